pub mod best_price_form;
pub mod chart;
pub mod layout;
pub mod new_product_form;
pub mod product_card;
pub mod snapshot_card;
pub mod snapshot_table;
pub mod status;
pub mod view_mode_toggle;

pub use best_price_form::BestPriceForm;
pub use chart::PriceChart;
pub use layout::Layout;
pub use new_product_form::NewProductForm;
pub use product_card::ProductCard;
pub use snapshot_card::SnapshotCard;
pub use snapshot_table::{SnapshotGrid, SnapshotTable};
pub use status::Status;
pub use view_mode_toggle::ViewModeToggle;
