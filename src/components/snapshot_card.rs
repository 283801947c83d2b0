use std::rc::Rc;
use yew::prelude::*;

use crate::models::snapshot::Snapshot;
use crate::utils::format::{format_price, format_timestamp, link_label};

/// One rendered URL line of a snapshot card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UrlRow {
    pub href: String,
    pub label: String,
    pub price: String,
}

/// Resolves link text and display price for every URL of `snapshot`.
pub fn url_rows(snapshot: &Snapshot) -> Vec<UrlRow> {
    snapshot
        .urls
        .iter()
        .map(|entry| UrlRow {
            href: entry.url().to_string(),
            label: link_label(entry.url()),
            price: format_price(snapshot.display_price(entry)),
        })
        .collect()
}

#[derive(Properties, PartialEq)]
pub struct SnapshotCardProps {
    pub snapshot: Rc<Snapshot>,
}

#[function_component(SnapshotCard)]
pub fn snapshot_card(props: &SnapshotCardProps) -> Html {
    let rows = use_memo(props.snapshot.clone(), |snapshot| url_rows(snapshot));

    html! {
        <div class="snapshot-card">
            <h3>{&props.snapshot.title}</h3>
            <p class="snapshot-captured">{format_timestamp(props.snapshot.captured_at)}</p>
            <ul class="snapshot-urls">
                { for rows.iter().map(|row| html! {
                    <li key={row.href.clone()}>
                        <a href={row.href.clone()} target="_blank" rel="noopener noreferrer">
                            {&row.label}
                        </a>
                        <span class="snapshot-price">{format!(" \u{2014} {}", row.price)}</span>
                    </li>
                }) }
            </ul>
        </div>
    }
}
