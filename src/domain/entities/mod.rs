mod player;
mod round;

pub use player::*;
pub use round::*;
