use gloo::events::EventListener;
use std::future::Future;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::config::Config;
use crate::models::error::AppError;
use crate::services::cache;

/// State of a cached GET query.
#[derive(PartialEq, Debug)]
pub enum QueryState<T> {
    /// No key, so no request was issued.
    Idle,
    Loading,
    Loaded(Rc<T>),
    Error(String),
}

impl<T> Clone for QueryState<T> {
    fn clone(&self) -> Self {
        match self {
            Self::Idle => Self::Idle,
            Self::Loading => Self::Loading,
            Self::Loaded(data) => Self::Loaded(data.clone()),
            Self::Error(msg) => Self::Error(msg.clone()),
        }
    }
}

impl<T> QueryState<T> {
    /// Starting state for `key`: cached data when available, otherwise loading.
    pub fn initial(key: Option<&str>) -> Self
    where
        T: 'static,
    {
        match key {
            None => Self::Idle,
            Some(key) => cache::cached::<T>(key).map_or(Self::Loading, Self::Loaded),
        }
    }

    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Returns the data if it is loaded
    pub const fn data(&self) -> Option<&Rc<T>> {
        match self {
            Self::Loaded(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Error(msg) => Some(msg),
            _ => None,
        }
    }
}

/// Applies a finished fetch for `key` to the cache.
///
/// A success is stored and returned as `Loaded`. A failure yields `Error` only
/// when nothing is cached; otherwise `None` and the cached data stays on screen.
pub fn settle<T: 'static>(key: &str, result: Result<T, AppError>) -> Option<QueryState<T>> {
    match result {
        Ok(data) => {
            let data = Rc::new(data);
            cache::store(key, data.clone());
            Some(QueryState::Loaded(data))
        }
        Err(_) if cache::cached::<T>(key).is_some() => None,
        Err(e) => Some(QueryState::Error(e.to_string())),
    }
}

/// Bumped to force a revalidation.
#[derive(Default, PartialEq)]
struct Revalidation(u32);

impl Reducible for Revalidation {
    type Action = ();

    fn reduce(self: Rc<Self>, (): ()) -> Rc<Self> {
        Rc::new(Self(self.0.wrapping_add(1)))
    }
}

pub struct QueryHandle<T> {
    pub state: QueryState<T>,
    pub revalidate: Callback<()>,
}

impl<T> Clone for QueryHandle<T> {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
            revalidate: self.revalidate.clone(),
        }
    }
}

/// Cache-backed GET keyed by URL.
///
/// `query` pairs the cache key with the request that fills it; `None` disables
/// the query. Cached data is served immediately and revalidated on mount, on
/// key change and whenever the window regains focus.
#[hook]
pub fn use_query<T, F, Fut>(query: Option<(String, F)>) -> QueryHandle<T>
where
    T: 'static,
    F: FnOnce() -> Fut + 'static,
    Fut: Future<Output = Result<T, AppError>> + 'static,
{
    let (key, fetch) = query.unzip();
    let state = {
        let key = key.clone();
        use_state(move || QueryState::<T>::initial(key.as_deref()))
    };
    let revalidation = use_reducer(Revalidation::default);

    // Revalidate on window focus
    {
        let dispatcher = revalidation.dispatcher();
        use_effect_with((), move |_| {
            let listener = Config::REVALIDATE_ON_FOCUS
                .then(web_sys::window)
                .flatten()
                .map(|window| {
                    EventListener::new(&window, "focus", move |_| dispatcher.dispatch(()))
                });

            move || drop(listener)
        });
    }

    {
        let state = state.clone();
        let generation = revalidation.0;

        use_effect_with((key, generation), move |(key, _)| {
            state.set(QueryState::<T>::initial(key.as_deref()));

            if let (Some(key), Some(fetch)) = (key.clone(), fetch) {
                spawn_local(async move {
                    let result = fetch().await;
                    if let Err(e) = &result {
                        gloo::console::warn!(&format!("Fetching {key} failed: {e}"));
                    }
                    if let Some(next) = settle(&key, result) {
                        state.set(next);
                    }
                });
            }

            || () // Cleanup
        });
    }

    let revalidate = {
        let dispatcher = revalidation.dispatcher();
        Callback::from(move |()| dispatcher.dispatch(()))
    };

    QueryHandle {
        state: (*state).clone(),
        revalidate,
    }
}
