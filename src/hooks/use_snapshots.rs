use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::config::Config;
use crate::models::{product::ProductId, snapshot::Snapshot};
use crate::services::api::{get_history, get_latest_snapshots};

/// Which snapshots the detail page shows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ViewMode {
    /// Only the most recent capture
    #[default]
    Realtime,
    /// The trailing history window
    History,
}

impl ViewMode {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Realtime => "Real-time",
            Self::History => "History",
        }
    }

    pub const fn all() -> [Self; 2] {
        [Self::Realtime, Self::History]
    }
}

/// Snapshot panel of the detail page.
///
/// Each mode keeps its last result; `loading` and `error` are shared by both.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SnapshotsState {
    pub mode: ViewMode,
    pub loading: bool,
    pub error: Option<String>,
    pub latest: Rc<Vec<Snapshot>>,
    pub history: Rc<Vec<Snapshot>>,
    /// Incremented on every mode change; each value is one fetch.
    pub fetch_generation: u32,
}

pub enum SnapshotsAction {
    SetMode(ViewMode),
    FetchStarted,
    Loaded(ViewMode, Vec<Snapshot>),
    Failed(String),
}

impl SnapshotsState {
    /// Data retained for `mode`, whether or not it is the active one.
    pub fn data_for(&self, mode: ViewMode) -> &Rc<Vec<Snapshot>> {
        match mode {
            ViewMode::Realtime => &self.latest,
            ViewMode::History => &self.history,
        }
    }

    /// Snapshots of the active mode, hidden while loading or after an error.
    pub fn visible(&self) -> Option<&[Snapshot]> {
        if self.loading || self.error.is_some() {
            return None;
        }
        Some(self.data_for(self.mode).as_slice())
    }
}

impl Reducible for SnapshotsState {
    type Action = SnapshotsAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();

        match action {
            SnapshotsAction::SetMode(mode) if mode == self.mode => return self,
            SnapshotsAction::SetMode(mode) => {
                next.mode = mode;
                next.fetch_generation = next.fetch_generation.wrapping_add(1);
            }
            SnapshotsAction::FetchStarted => {
                next.loading = true;
                next.error = None;
            }
            SnapshotsAction::Loaded(mode, snapshots) => {
                next.loading = false;
                match mode {
                    ViewMode::Realtime => next.latest = Rc::new(snapshots),
                    ViewMode::History => next.history = Rc::new(snapshots),
                }
            }
            SnapshotsAction::Failed(msg) => {
                next.loading = false;
                next.error = Some(msg);
            }
        }

        Rc::new(next)
    }
}

/// Handle returned by `use_snapshots` hook
#[derive(Clone, PartialEq)]
pub struct SnapshotsHandle {
    pub state: SnapshotsState,
    pub set_mode: Callback<ViewMode>,
}

/// Fetches latest or history snapshots for the active view mode.
///
/// Runs on mount and after every mode change. Requests are not cancelled, so
/// when toggles race the last response to arrive wins.
#[hook]
pub fn use_snapshots(product_id: Option<ProductId>) -> SnapshotsHandle {
    let state = use_reducer(SnapshotsState::default);

    {
        let dispatcher = state.dispatcher();
        let deps = (product_id, state.mode, state.fetch_generation);

        use_effect_with(deps, move |(product_id, mode, _)| {
            if let Some(id) = *product_id {
                let mode = *mode;
                dispatcher.dispatch(SnapshotsAction::FetchStarted);

                spawn_local(async move {
                    let result = match mode {
                        ViewMode::Realtime => get_latest_snapshots(id).await,
                        ViewMode::History => get_history(id, Config::HISTORY_WINDOW_DAYS).await,
                    };

                    let action = match result {
                        Ok(snapshots) => SnapshotsAction::Loaded(mode, snapshots),
                        Err(e) => {
                            let msg = format!("Loading {mode:?} snapshots failed: {e}");
                            gloo::console::warn!(&msg);
                            SnapshotsAction::Failed(e.to_string())
                        }
                    };
                    dispatcher.dispatch(action);
                });
            }

            || () // Cleanup
        });
    }

    let set_mode = {
        let dispatcher = state.dispatcher();
        Callback::from(move |mode| dispatcher.dispatch(SnapshotsAction::SetMode(mode)))
    };

    SnapshotsHandle {
        state: (*state).clone(),
        set_mode,
    }
}
