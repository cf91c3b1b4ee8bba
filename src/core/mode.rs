//! Access modes and the operations they gate.
//!
//! The machine is always in exactly one [`Mode`]. Every mutating operation
//! belongs to one mode, and [`Mode::permits`] is the pure predicate that
//! decides whether it may run.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Current access mode of the machine.
///
/// # Example
///
/// ```rust
/// use vending_machine::core::{Mode, Operation};
///
/// assert!(Mode::Operation.permits(Operation::InsertCoin));
/// assert!(!Mode::Operation.permits(Operation::FillProducts));
/// assert!(Mode::Administering.permits(Operation::SetPrice));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
pub enum Mode {
    /// Customer-facing: insert coins, buy, get a refund.
    #[default]
    Operation,
    /// Operator-facing: restock products and coins, set the price.
    Administering,
}

impl Mode {
    /// Get the mode's name for display/logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Operation => "Operation",
            Self::Administering => "Administering",
        }
    }

    /// Check whether `operation` may run in this mode.
    pub fn permits(&self, operation: Operation) -> bool {
        operation.required_mode() == *self
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A mode-gated operation.
///
/// Mode transitions and queries are not listed: they are valid in any mode.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Operation {
    FillProducts,
    FillCoins,
    SetPrice,
    InsertCoin,
    ReturnMoney,
    DispenseProduct,
}

impl Operation {
    /// Every gated operation, administrative ones first.
    pub const ALL: [Operation; 6] = [
        Self::FillProducts,
        Self::FillCoins,
        Self::SetPrice,
        Self::InsertCoin,
        Self::ReturnMoney,
        Self::DispenseProduct,
    ];

    /// The only mode in which this operation is legal.
    pub fn required_mode(&self) -> Mode {
        match self {
            Self::FillProducts | Self::FillCoins | Self::SetPrice => Mode::Administering,
            Self::InsertCoin | Self::ReturnMoney | Self::DispenseProduct => Mode::Operation,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::FillProducts => "fill_products",
            Self::FillCoins => "fill_coins",
            Self::SetPrice => "set_price",
            Self::InsertCoin => "insert_coin",
            Self::ReturnMoney => "return_money",
            Self::DispenseProduct => "dispense_product",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
