use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::models::{
    product::ProductId,
    snapshot::{DateRange, Snapshot},
};
use crate::services::api::get_best_price;

/// Best-price section state; independent of the snapshot view mode.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BestPriceState {
    pub loading: bool,
    pub error: Option<String>,
    pub result: Option<Rc<Snapshot>>,
}

pub enum BestPriceAction {
    Started,
    Found(Snapshot),
    Failed(String),
}

impl Reducible for BestPriceState {
    type Action = BestPriceAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = match action {
            BestPriceAction::Started => Self {
                loading: true,
                error: None,
                result: self.result.clone(),
            },
            BestPriceAction::Found(snapshot) => Self {
                loading: false,
                error: None,
                result: Some(Rc::new(snapshot)),
            },
            BestPriceAction::Failed(msg) => Self {
                loading: false,
                error: Some(msg),
                result: self.result.clone(),
            },
        };
        Rc::new(next)
    }
}

/// Handle returned by `use_best_price` hook
#[derive(Clone, PartialEq)]
pub struct BestPriceHandle {
    pub state: BestPriceState,
    pub fetch: Callback<DateRange>,
}

/// Looks up the cheapest snapshot on demand. Never fetches on its own.
#[hook]
pub fn use_best_price(product_id: ProductId) -> BestPriceHandle {
    let state = use_reducer(BestPriceState::default);

    let fetch = {
        let dispatcher = state.dispatcher();
        Callback::from(move |range: DateRange| {
            let dispatcher = dispatcher.clone();
            dispatcher.dispatch(BestPriceAction::Started);

            spawn_local(async move {
                match get_best_price(product_id, range).await {
                    Ok(snapshot) => dispatcher.dispatch(BestPriceAction::Found(snapshot)),
                    Err(e) => {
                        gloo::console::warn!(&format!("Best price lookup failed: {e}"));
                        dispatcher.dispatch(BestPriceAction::Failed(e.to_string()));
                    }
                }
            });
        })
    };

    BestPriceHandle {
        state: (*state).clone(),
        fetch,
    }
}
