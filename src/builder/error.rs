//! Build errors for machine configuration.

use crate::core::Denomination;
use thiserror::Error;

/// Errors that can occur when building a vending machine.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("Product capacity must be at least 1")]
    ZeroProductCapacity,

    #[error("Coin capacity for {denomination} must be at least 1")]
    ZeroCoinCapacity { denomination: Denomination },

    #[error("Price must be greater than zero")]
    ZeroPrice,
}
