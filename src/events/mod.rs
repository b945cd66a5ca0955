//! Event module - attribute lookup over transaction events and logs

mod addresses;
mod reader;

pub use addresses::*;
pub use reader::*;
