//! Transaction module - the decoded transaction and its execution result

mod outcome;

pub use outcome::*;
