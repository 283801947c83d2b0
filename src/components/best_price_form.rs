use yew::prelude::*;

use crate::components::new_product_form::input_value;
use crate::models::snapshot::DateRange;

#[derive(Properties, PartialEq)]
pub struct BestPriceFormProps {
    /// Receives the chosen range; blank inputs arrive as `None`.
    pub on_fetch: Callback<DateRange>,
}

#[function_component(BestPriceForm)]
pub fn best_price_form(props: &BestPriceFormProps) -> Html {
    let start = use_state(String::new);
    let end = use_state(String::new);

    let on_start = {
        let start = start.clone();
        Callback::from(move |e: Event| {
            if let Some(value) = input_value(&e) {
                start.set(value);
            }
        })
    };

    let on_end = {
        let end = end.clone();
        Callback::from(move |e: Event| {
            if let Some(value) = input_value(&e) {
                end.set(value);
            }
        })
    };

    let onclick = {
        let on_fetch = props.on_fetch.clone();
        let start = start.clone();
        let end = end.clone();
        Callback::from(move |_: MouseEvent| {
            on_fetch.emit(DateRange::from_inputs(&start, &end));
        })
    };

    html! {
        <div class="best-price-form">
            <input
                type="date"
                aria-label="Start date"
                value={(*start).clone()}
                onchange={on_start}
            />
            <input
                type="date"
                aria-label="End date"
                value={(*end).clone()}
                onchange={on_end}
            />
            <button type="button" {onclick}>{"Fetch Best Price"}</button>
        </div>
    }
}
