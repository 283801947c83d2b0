use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::hooks::use_create_product::use_create_product;
use crate::hooks::use_route::{Route, navigate};
use crate::models::product::{Product, ProductCreate};

/// Reads the current value of the `<input>` that fired `e`.
pub(crate) fn input_value(e: &Event) -> Option<String> {
    e.target()
        .and_then(|target| target.dyn_into::<HtmlInputElement>().ok())
        .map(|input| input.value())
}

/// Name and prompt inputs; opens the new product's page once it is created.
#[function_component(NewProductForm)]
pub fn new_product_form() -> Html {
    let name = use_state(String::new);
    let prompt = use_state(String::new);

    let on_created = Callback::from(|product: Product| {
        navigate(&Route::ProductDetail(product.id));
    });
    let create = use_create_product(on_created);

    let on_name = {
        let name = name.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(value) = input_value(&e) {
                name.set(value);
            }
        })
    };

    let on_prompt = {
        let prompt = prompt.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(value) = input_value(&e) {
                prompt.set(value);
            }
        })
    };

    let onsubmit = {
        let name = name.clone();
        let prompt = prompt.clone();
        let submit = create.submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            submit.emit(ProductCreate::new((*name).clone(), (*prompt).clone()));
        })
    };

    let submitting = create.state.submitting;

    html! {
        <form class="new-product-form" {onsubmit}>
            <div class="form-row">
                <input
                    type="text"
                    placeholder="Enter product name\u{2026}"
                    value={(*name).clone()}
                    oninput={on_name}
                />
                <input
                    type="text"
                    placeholder="Enter shopping prompt\u{2026}"
                    value={(*prompt).clone()}
                    oninput={on_prompt}
                />
                <button type="submit" disabled={submitting}>
                    { if submitting { "Loading..." } else { "Go" } }
                </button>
            </div>
            if let Some(msg) = &create.state.error {
                <p class="form-error">{msg}</p>
            }
        </form>
    }
}
