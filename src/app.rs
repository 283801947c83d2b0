use yew::prelude::*;

use crate::components::Layout;
use crate::hooks::use_route::{Route, use_route};
use crate::pages::{ProductDetailPage, ProductListPage};

#[function_component(App)]
pub fn app() -> Html {
    let route = use_route();

    let page = match route {
        Route::Products => html! { <ProductListPage /> },
        Route::ProductDetail(id) => html! { <ProductDetailPage key={id} {id} /> },
        Route::NotFound => html! {
            <div class="status error">{"Page not found."}</div>
        },
    };

    html! {
        <>
            <Layout>{page}</Layout>
            <style>
                {include_str!("style.css")}
            </style>
        </>
    }
}
