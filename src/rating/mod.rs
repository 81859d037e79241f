pub mod title;

pub use title::{Medal, RankTitle};
