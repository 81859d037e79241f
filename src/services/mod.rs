pub mod tierlist;

pub use tierlist::{OutputFormat, TierListService};
