use yew::prelude::*;

use crate::hooks::use_route::{Route, navigate};
use crate::models::product::Product;
use crate::utils::format::format_timestamp;

#[derive(Properties, PartialEq)]
pub struct ProductCardProps {
    pub product: Product,
}

#[function_component(ProductCard)]
pub fn product_card(props: &ProductCardProps) -> Html {
    let route = Route::ProductDetail(props.product.id);
    let href = route.to_path();

    let open = {
        let route = route.clone();
        Callback::from(move |_: MouseEvent| navigate(&route))
    };

    // The link is inside the clickable card; only navigate once
    let open_link = Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        e.stop_propagation();
        navigate(&route);
    });

    html! {
        <div class="product-card" onclick={open}>
            <h3>{&props.product.name}</h3>
            <p class="product-created">
                {"Created at: "}{format_timestamp(props.product.created_at)}
            </p>
            <a {href} class="product-link" onclick={open_link}>{"View"}</a>
        </div>
    }
}
