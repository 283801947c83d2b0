pub mod use_best_price;
pub mod use_create_product;
pub mod use_products;
pub mod use_query;
pub mod use_route;
pub mod use_snapshots;
