mod fallback;
mod normalize;
mod ready;
mod source;

pub use fallback::generate_fallback_players;
pub use normalize::{normalize, player_id};
pub use ready::{StoreReady, build_store, load_store, spawn_load};
pub use source::{LoadOutcome, Loader, PlayerSource, parse_records};
