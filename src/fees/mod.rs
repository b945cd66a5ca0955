//! Fees module - fee schedule, reconciliation, and message surcharges

mod msg_fees;
mod resolver;
mod schedule;

pub use msg_fees::*;
pub use resolver::*;
pub use schedule::*;
