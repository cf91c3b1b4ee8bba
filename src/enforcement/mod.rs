//! Argument validation for machine operations.
//!
//! Rules are built on Stillwater's `Validation` type, which accumulates
//! every violation rather than failing fast. A restock with two bad coin
//! counts reports both.
//!
//! # Example
//!
//! ```rust
//! use vending_machine::enforcement::{rules, ParamViolation};
//!
//! let violations = rules::into_result(rules::coin_refill(0, 50, 99, 50)).unwrap_err();
//! assert_eq!(violations.len(), 2);
//! assert!(matches!(violations[0], ParamViolation::CoinCountOutOfRange { .. }));
//! ```

pub mod rules;
pub mod violations;

pub use violations::ParamViolation;
