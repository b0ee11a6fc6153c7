mod chain;
mod game_settings;
mod hand;
mod stock;
mod tile;
mod turn;

pub use chain::*;
pub use game_settings::*;
pub use hand::*;
pub use stock::*;
pub use tile::*;
pub use turn::*;
