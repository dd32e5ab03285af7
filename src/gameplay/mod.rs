pub mod choice;
pub use choice::*;

pub mod engine;
pub use engine::*;

pub mod payoff;
pub use payoff::*;

pub mod ply;
pub use ply::*;

pub mod seat;
pub use seat::*;

pub mod session;
pub use session::*;

pub mod winner;
pub use winner::*;
