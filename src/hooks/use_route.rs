use gloo::history::{BrowserHistory, History};
use yew::prelude::*;

use crate::models::product::ProductId;

/// Client-side pages.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Route {
    Products,
    ProductDetail(ProductId),
    NotFound,
}

impl Route {
    pub fn from_path(path: &str) -> Self {
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] | ["products"] => Self::Products,
            ["products", id] => id.parse().map_or(Self::NotFound, Self::ProductDetail),
            _ => Self::NotFound,
        }
    }

    pub fn to_path(&self) -> String {
        match self {
            Self::Products | Self::NotFound => "/".to_string(),
            Self::ProductDetail(id) => format!("/products/{id}"),
        }
    }
}

/// Pushes `route` onto the browser history; `use_route` listeners re-render.
pub fn navigate(route: &Route) {
    BrowserHistory::new().push(route.to_path());
}

fn current_route() -> Route {
    Route::from_path(BrowserHistory::new().location().path())
}

/// Current route, updated on every history change.
#[hook]
pub fn use_route() -> Route {
    let route = use_state(current_route);

    {
        let route = route.clone();
        use_effect_with((), move |_| {
            let history = BrowserHistory::new();
            let listener = {
                let current = history.clone();
                history.listen(move || route.set(Route::from_path(current.location().path())))
            };

            move || drop(listener)
        });
    }

    (*route).clone()
}
