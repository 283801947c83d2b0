pub mod product_detail;
pub mod product_list;

pub use product_detail::ProductDetailPage;
pub use product_list::ProductListPage;
