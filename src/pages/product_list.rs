use yew::prelude::*;

use crate::components::{NewProductForm, ProductCard};
use crate::hooks::use_products::use_products;
use crate::hooks::use_query::QueryState;

/// All products plus the create form.
#[function_component(ProductListPage)]
pub fn product_list_page() -> Html {
    let products = use_products();

    let listing = match &products.state {
        QueryState::Idle => html! {},
        QueryState::Loading => html! { <div class="status loading">{"Loading..."}</div> },
        QueryState::Error(_) => {
            let retry = products.revalidate.reform(|_: MouseEvent| ());
            html! {
                <div class="status error">
                    {"Error loading products."}
                    <button class="retry-button" onclick={retry}>{"Retry"}</button>
                </div>
            }
        }
        QueryState::Loaded(products) if products.is_empty() => html! {
            <p class="empty">{"No products yet. Add one above."}</p>
        },
        QueryState::Loaded(products) => html! {
            <div class="product-grid">
                { for products.iter().map(|product| html! {
                    <ProductCard key={product.id} product={product.clone()} />
                }) }
            </div>
        },
    };

    html! {
        <div class="product-list-page">
            <div class="panel">
                <NewProductForm />
            </div>
            {listing}
        </div>
    }
}
