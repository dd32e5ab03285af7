pub mod fixed;
pub use fixed::*;

#[cfg(feature = "cli")]
pub mod human;
#[cfg(feature = "cli")]
pub use human::*;

pub mod mirror;
pub use mirror::*;

pub mod opponent;
pub use opponent::*;

pub mod policy;
pub use policy::*;

pub mod random;
pub use random::*;

pub mod scripted;
pub use scripted::*;
