use yew::prelude::*;

use crate::hooks::use_query::{QueryHandle, use_query};
use crate::models::product::{Product, ProductId};
use crate::services::api::{ApiConfig, get_product, list_products};

/// Every product with its snapshots, cached and revalidated on mount and focus.
#[hook]
pub fn use_products() -> QueryHandle<Vec<Product>> {
    use_query(Some((ApiConfig::default().products_url(), list_products)))
}

/// A single product. No request is issued while `id` is `None`.
#[hook]
pub fn use_product(id: Option<ProductId>) -> QueryHandle<Product> {
    let query = id.map(|id| {
        let url = ApiConfig::default().product_url(id);
        (url, move || get_product(id))
    });
    use_query(query)
}
