use std::rc::Rc;
use yew::prelude::*;

use crate::components::{
    BestPriceForm, PriceChart, SnapshotCard, SnapshotGrid, SnapshotTable, Status, ViewModeToggle,
};
use crate::config::Config;
use crate::hooks::use_best_price::use_best_price;
use crate::hooks::use_products::use_product;
use crate::hooks::use_query::QueryState;
use crate::hooks::use_snapshots::{ViewMode, use_snapshots};
use crate::models::product::ProductId;
use crate::utils::format::{format_price, format_timestamp};

#[derive(Properties, PartialEq)]
pub struct ProductDetailProps {
    pub id: ProductId,
}

/// One product: view-mode toggle, snapshots, best-price lookup and history.
#[function_component(ProductDetailPage)]
pub fn product_detail_page(props: &ProductDetailProps) -> Html {
    let product = use_product(Some(props.id));
    let snapshots = use_snapshots(Some(props.id));
    let best = use_best_price(props.id);

    let product = match &product.state {
        QueryState::Loaded(product) => product.clone(),
        QueryState::Error(_) => {
            let retry = product.revalidate.reform(|_: MouseEvent| ());
            return html! {
                <div class="status error">
                    {"Error loading product."}
                    <button class="retry-button" onclick={retry}>{"Retry"}</button>
                </div>
            };
        }
        QueryState::Idle | QueryState::Loading => {
            return html! { <div class="status loading">{"Loading..."}</div> };
        }
    };

    let state = &snapshots.state;
    let loading_label = format!("Loading {}...", state.mode.label().to_lowercase());

    html! {
        <div class="product-detail-page">
            <h1>{&product.name}</h1>
            if let Some(prompt) = &product.prompt {
                <p class="product-prompt">{prompt}</p>
            }

            <ViewModeToggle mode={state.mode} on_change={snapshots.set_mode.clone()} />
            <Status loading={state.loading} error={state.error.clone()} {loading_label} />

            if state.mode == ViewMode::Realtime && state.visible().is_some_and(|s| !s.is_empty()) {
                <section class="latest-section">
                    <h2>{"Latest Snapshots"}</h2>
                    <SnapshotGrid snapshots={state.latest.clone()} />
                </section>
            }

            <section class="best-price-section">
                <h2>{"Best Price"}</h2>
                <BestPriceForm on_fetch={best.fetch.clone()} />
                <Status
                    loading={best.state.loading}
                    error={best.state.error.clone()}
                    loading_label={"Loading best price\u{2026}"}
                />
                if let Some(snapshot) = &best.state.result {
                    <div class="best-price-result">
                        <p>{"Title: "}{&snapshot.title}</p>
                        <p>{"Price: "}{format_price(snapshot.price)}</p>
                        <p>{"Date: "}{format_timestamp(snapshot.captured_at)}</p>
                        <SnapshotCard snapshot={Rc::clone(snapshot)} />
                    </div>
                }
            </section>

            if state.mode == ViewMode::History && state.visible().is_some() {
                <>
                <section class="history-section">
                    <h2>{format!("Price History (last {} days)", Config::HISTORY_WINDOW_DAYS)}</h2>
                    <PriceChart snapshots={state.history.clone()} />
                </section>
                <section class="history-table-section">
                    <h2>{"Snapshot History"}</h2>
                    <SnapshotTable snapshots={state.history.clone()} />
                </section>
                </>
            }
        </div>
    }
}
