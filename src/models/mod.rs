pub mod chart;
pub mod de;
pub mod error;
pub mod product;
pub mod snapshot;
