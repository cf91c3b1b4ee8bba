//! Core vending machine types and logic.
//!
//! This module contains the pure part of the machine:
//! - Access modes and the operations each one permits
//! - Coin denominations, inventories and change-making
//! - Immutable mode transition history
//!
//! Nothing here mutates machine state; [`crate::vending`] applies the
//! decisions made here.

mod change;
mod history;
mod mode;

pub use change::{make_change, ChangeError, CoinInventory, Denomination, Payout};
pub use history::{ModeHistory, ModeTransition, MAX_TRANSITIONS};
pub use mode::{Mode, Operation};
