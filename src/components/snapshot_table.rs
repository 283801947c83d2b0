use std::rc::Rc;
use yew::prelude::*;

use crate::components::snapshot_card::SnapshotCard;
use crate::models::snapshot::Snapshot;
use crate::utils::format::{format_price, format_timestamp};

#[derive(Properties, PartialEq)]
pub struct SnapshotListProps {
    pub snapshots: Rc<Vec<Snapshot>>,
}

/// Grid of snapshot cards.
#[function_component(SnapshotGrid)]
pub fn snapshot_grid(props: &SnapshotListProps) -> Html {
    html! {
        <div class="snapshot-grid">
            { for props.snapshots.iter().map(|s| html! {
                <SnapshotCard key={s.id} snapshot={Rc::new(s.clone())} />
            }) }
        </div>
    }
}

/// Plain table: one row per snapshot, one link per URL.
#[function_component(SnapshotTable)]
pub fn snapshot_table(props: &SnapshotListProps) -> Html {
    html! {
        <table class="snapshot-table">
            <thead>
                <tr>
                    <th>{"Title"}</th>
                    <th>{"Price"}</th>
                    <th>{"Captured"}</th>
                    <th>{"Links"}</th>
                </tr>
            </thead>
            <tbody>
                { for props.snapshots.iter().map(|s| html! {
                    <tr key={s.id}>
                        <td>{&s.title}</td>
                        <td>{format_price(s.price)}</td>
                        <td>{format_timestamp(s.captured_at)}</td>
                        <td>
                            { for s.urls.iter().map(|entry| html! {
                                <a
                                    class="table-link"
                                    href={entry.url().to_string()}
                                    target="_blank"
                                    rel="noopener noreferrer"
                                >
                                    {entry.url()}
                                </a>
                            }) }
                        </td>
                    </tr>
                }) }
            </tbody>
        </table>
    }
}
