use yew::prelude::*;

use crate::hooks::use_route::{Route, navigate};

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    #[prop_or_default]
    pub children: Html,
}

/// Page chrome: sidebar navigation and header around the active page.
#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    let go_products = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        navigate(&Route::Products);
    });

    html! {
        <div class="app-container">
            <aside class="app-sidebar">
                <h2 class="app-title">{"shop-dashboard"}</h2>
                <nav class="app-nav">
                    <a href="/" class="nav-link" onclick={go_products}>{"Products"}</a>
                </nav>
            </aside>
            <div class="app-body">
                <header class="app-header">
                    <div>{"Dashboard"}</div>
                </header>
                <section class="app-main">
                    {props.children.clone()}
                </section>
            </div>
        </div>
    }
}
