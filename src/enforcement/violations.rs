//! Parameter violations reported by validation rules.

use crate::core::Denomination;
use thiserror::Error;

/// A single rejected argument.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParamViolation {
    #[error("{denomination} count {count} outside 1..={capacity}")]
    CoinCountOutOfRange {
        denomination: Denomination,
        count: u32,
        capacity: u32,
    },

    #[error("Price must be greater than zero")]
    NonPositivePrice,

    #[error("Product count {count} outside 1..={max}")]
    ProductCountOutOfRange { count: u32, max: u32 },

    #[error("Admin code does not match")]
    WrongAdminCode,
}
