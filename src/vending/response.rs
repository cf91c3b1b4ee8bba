//! Result codes and errors returned by machine operations.

use crate::core::{ChangeError, Denomination, Mode, Operation};
use crate::enforcement::ParamViolation;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result of a mutating machine operation.
pub type VendResult<T = ()> = Result<T, VendingError>;

/// Flat response code for hosts that expect one enumeration per call.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Response {
    Ok,
    IllegalOperation,
    InvalidParam,
    CannotPerform,
    TooBigChange,
    UnsuitableChange,
    InsufficientProduct,
    InsufficientMoney,
}

impl<T> From<&VendResult<T>> for Response {
    fn from(result: &VendResult<T>) -> Self {
        match result {
            Ok(_) => Response::Ok,
            Err(error) => error.response(),
        }
    }
}

/// Why an otherwise legal request cannot be carried out right now.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum Blocker {
    #[error("customer balance of {balance} must be returned or spent first")]
    BalanceOutstanding { balance: u64 },

    #[error("{denomination} store is full ({capacity} coins)")]
    CoinStoreFull {
        denomination: Denomination,
        capacity: u32,
    },
}

/// Errors that can occur during machine operations.
///
/// Every rejected call leaves the machine exactly as it was.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum VendingError {
    #[error("Operation '{operation}' is not allowed in {mode} mode")]
    IllegalOperation { operation: Operation, mode: Mode },

    #[error("Invalid parameters: {violations:?}")]
    InvalidParam { violations: Vec<ParamViolation> },

    #[error("Cannot perform: {0}")]
    CannotPerform(Blocker),

    #[error("Change of {amount} exceeds the {available} held in coins")]
    TooBigChange { amount: u64, available: u64 },

    #[error("Change of {amount} cannot be formed from the coins held")]
    UnsuitableChange { amount: u64 },

    #[error("Requested {requested} products but only {available} loaded")]
    InsufficientProduct { requested: u32, available: u32 },

    #[error("Purchase costs {cost} but balance is {balance}")]
    InsufficientMoney { cost: u64, balance: u64 },
}

impl VendingError {
    /// The flat response code for this error.
    pub fn response(&self) -> Response {
        match self {
            Self::IllegalOperation { .. } => Response::IllegalOperation,
            Self::InvalidParam { .. } => Response::InvalidParam,
            Self::CannotPerform(_) => Response::CannotPerform,
            Self::TooBigChange { .. } => Response::TooBigChange,
            Self::UnsuitableChange { .. } => Response::UnsuitableChange,
            Self::InsufficientProduct { .. } => Response::InsufficientProduct,
            Self::InsufficientMoney { .. } => Response::InsufficientMoney,
        }
    }
}

impl From<Vec<ParamViolation>> for VendingError {
    fn from(violations: Vec<ParamViolation>) -> Self {
        Self::InvalidParam { violations }
    }
}

impl From<ChangeError> for VendingError {
    fn from(error: ChangeError) -> Self {
        match error {
            ChangeError::TooBig { amount, available } => Self::TooBigChange { amount, available },
            ChangeError::Unsuitable { amount } => Self::UnsuitableChange { amount },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ok_result_maps_to_ok() {
        let result: VendResult = Ok(());
        assert_eq!(Response::from(&result), Response::Ok);
    }

    #[test]
    fn errors_map_to_their_codes() {
        let cases = [
            (
                VendingError::IllegalOperation {
                    operation: Operation::SetPrice,
                    mode: Mode::Operation,
                },
                Response::IllegalOperation,
            ),
            (
                VendingError::InvalidParam {
                    violations: vec![ParamViolation::NonPositivePrice],
                },
                Response::InvalidParam,
            ),
            (
                VendingError::CannotPerform(Blocker::BalanceOutstanding { balance: 1 }),
                Response::CannotPerform,
            ),
            (
                VendingError::TooBigChange {
                    amount: 3,
                    available: 0,
                },
                Response::TooBigChange,
            ),
            (
                VendingError::UnsuitableChange { amount: 3 },
                Response::UnsuitableChange,
            ),
            (
                VendingError::InsufficientProduct {
                    requested: 2,
                    available: 1,
                },
                Response::InsufficientProduct,
            ),
            (
                VendingError::InsufficientMoney {
                    cost: 5,
                    balance: 0,
                },
                Response::InsufficientMoney,
            ),
        ];

        for (error, code) in cases {
            assert_eq!(error.response(), code);
            let result: VendResult = Err(error);
            assert_eq!(Response::from(&result), code);
        }
    }

    #[test]
    fn change_errors_convert() {
        assert_eq!(
            VendingError::from(ChangeError::Unsuitable { amount: 5 }),
            VendingError::UnsuitableChange { amount: 5 }
        );
        assert_eq!(
            VendingError::from(ChangeError::TooBig {
                amount: 9,
                available: 4
            }),
            VendingError::TooBigChange {
                amount: 9,
                available: 4
            }
        );
    }

    #[test]
    fn error_messages_carry_context() {
        let error = VendingError::IllegalOperation {
            operation: Operation::InsertCoin,
            mode: Mode::Administering,
        };
        assert_eq!(
            error.to_string(),
            "Operation 'insert_coin' is not allowed in Administering mode"
        );

        let error = VendingError::CannotPerform(Blocker::CoinStoreFull {
            denomination: Denomination::Two,
            capacity: 50,
        });
        assert_eq!(error.to_string(), "Cannot perform: coin(2) store is full (50 coins)");
    }
}
