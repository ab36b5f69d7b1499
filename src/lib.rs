mod board;
mod cell;
pub mod data;
mod grid;
pub mod logging;
mod placement;
mod question;
mod relay;
mod render;
mod rules;
mod state;
pub mod store;

pub use board::*;
pub use cell::*;
pub use grid::*;
pub use placement::*;
pub use question::*;
pub use relay::*;
pub use render::*;
pub use rules::*;
pub use state::*;
