//! The mutable vending machine and its result types.
//!
//! [`VendingMachine`] owns all machine state and applies the decisions of
//! [`crate::core`] and [`crate::enforcement`]. Operations return
//! [`VendResult`]; hosts that need the flat code call
//! [`VendingError::response`] or `Response::from(&result)`.

mod machine;
mod response;

pub use machine::VendingMachine;
pub use response::{Blocker, Response, VendResult, VendingError};
