mod catalog;
pub mod models;
mod tier_index;

pub use catalog::Catalog;
pub use models::*;
pub use tier_index::TierIndex;
