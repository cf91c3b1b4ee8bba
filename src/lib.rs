//! A coin-operated vending machine modeled as a finite-state rule engine.
//!
//! The machine tracks products, coins, the customer's balance and an access
//! mode, and enforces the rules for buying, refunding and restocking. It is
//! synchronous and in-memory; hosts own any I/O.
//!
//! # Core Concepts
//!
//! - **Modes**: `Operation` for customers, `Administering` for operators.
//!   Each mutating call belongs to one mode.
//! - **Change-making**: refunds and purchases pay out using only coins of
//!   value 1 and 2, under the machine's current coin inventory.
//! - **Atomicity**: a rejected call leaves the machine exactly as it was.
//!
//! # Example
//!
//! ```rust
//! use vending_machine::builder::DEFAULT_ADMIN_CODE;
//! use vending_machine::core::Denomination;
//! use vending_machine::{Response, VendingMachine};
//!
//! let mut machine = VendingMachine::new();
//!
//! machine.enter_admin(DEFAULT_ADMIN_CODE).unwrap();
//! machine.fill_products().unwrap();
//! machine.fill_coins(10, 10).unwrap();
//! machine.exit_admin();
//!
//! for _ in 0..3 {
//!     machine.insert_coin(Denomination::Two).unwrap();
//! }
//! machine.dispense_product(1).unwrap();
//! assert_eq!(machine.balance(), 0);
//! assert_eq!(machine.product_count(), 39);
//!
//! let result = machine.fill_products();
//! assert_eq!(Response::from(&result), Response::IllegalOperation);
//! ```

pub mod builder;
pub mod core;
pub mod enforcement;
pub mod vending;

// Re-export commonly used types
pub use builder::{MachineBuilder, MachineConfig};
pub use crate::core::{Denomination, Mode};
pub use vending::{Response, VendResult, VendingError, VendingMachine};
