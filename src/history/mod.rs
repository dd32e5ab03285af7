pub mod entry;
pub use entry::*;

pub mod json;
pub use json::*;

pub mod memory;
pub use memory::*;

pub mod store;
pub use store::*;
