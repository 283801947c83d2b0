use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::models::{
    error::AppError,
    product::{Product, ProductCreate},
};
use crate::services::{
    api::{ApiConfig, create_product},
    cache,
};

/// Submission state of the create-product form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CreateFormState {
    pub submitting: bool,
    pub error: Option<String>,
}

#[derive(Debug, PartialEq)]
pub enum CreateFormAction {
    Submit,
    Succeeded,
    Failed(String),
}

impl Reducible for CreateFormState {
    type Action = CreateFormAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            CreateFormAction::Submit if self.submitting => self,
            CreateFormAction::Submit => Rc::new(Self {
                submitting: true,
                error: None,
            }),
            CreateFormAction::Succeeded => Rc::new(Self::default()),
            CreateFormAction::Failed(msg) => Rc::new(Self {
                submitting: false,
                error: Some(msg),
            }),
        }
    }
}

/// Claims the in-flight slot. Returns `false` while a submission is running.
pub fn try_begin(in_flight: &RefCell<bool>) -> bool {
    !in_flight.replace(true)
}

/// Turns a finished create into the form action and the product to report.
///
/// A created product invalidates the cached product list.
pub fn settle_create(result: Result<Product, AppError>) -> (CreateFormAction, Option<Product>) {
    match result {
        Ok(product) => {
            cache::invalidate(&ApiConfig::default().products_url());
            (CreateFormAction::Succeeded, Some(product))
        }
        Err(e) => (CreateFormAction::Failed(e.to_string()), None),
    }
}

/// Handle returned by `use_create_product` hook
#[derive(Clone, PartialEq)]
pub struct CreateProductHandle {
    pub state: CreateFormState,
    pub submit: Callback<ProductCreate>,
}

/// Creates products, reporting the created product to `on_created`.
///
/// A second submit while one is in flight is dropped.
#[hook]
pub fn use_create_product(on_created: Callback<Product>) -> CreateProductHandle {
    let state = use_reducer(CreateFormState::default);
    let in_flight = use_mut_ref(|| false);

    let submit = {
        let dispatcher = state.dispatcher();

        Callback::from(move |payload: ProductCreate| {
            if !try_begin(&in_flight) {
                return;
            }
            let dispatcher = dispatcher.clone();
            let on_created = on_created.clone();
            let in_flight = in_flight.clone();
            dispatcher.dispatch(CreateFormAction::Submit);

            spawn_local(async move {
                let result = create_product(payload).await;
                *in_flight.borrow_mut() = false;

                let (action, created) = settle_create(result);
                dispatcher.dispatch(action);
                if let Some(product) = created {
                    on_created.emit(product);
                }
            });
        })
    };

    CreateProductHandle {
        state: (*state).clone(),
        submit,
    }
}
