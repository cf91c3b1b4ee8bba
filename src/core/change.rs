//! Change-making over the two supported coin denominations.
//!
//! The algorithm is greedy and exact only because the large coin is worth
//! exactly twice the small one. Adding a denomination or changing the ratio
//! requires re-deriving it.
//!
//! Everything here is pure: [`make_change`] decides a [`Payout`] from a
//! borrowed [`CoinInventory`]. The machine removes those coins only once
//! the whole operation has succeeded.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Coin denominations accepted by the machine.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Denomination {
    One,
    Two,
}

impl Denomination {
    /// Face value in the smallest coin unit.
    pub fn value(&self) -> u32 {
        match self {
            Self::One => 1,
            Self::Two => 2,
        }
    }
}

impl fmt::Display for Denomination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "coin({})", self.value())
    }
}

/// Coins currently held, per denomination.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub struct CoinInventory {
    pub ones: u32,
    pub twos: u32,
}

impl CoinInventory {
    pub fn new(ones: u32, twos: u32) -> Self {
        Self { ones, twos }
    }

    pub fn count(&self, denomination: Denomination) -> u32 {
        match denomination {
            Denomination::One => self.ones,
            Denomination::Two => self.twos,
        }
    }

    pub(crate) fn count_mut(&mut self, denomination: Denomination) -> &mut u32 {
        match denomination {
            Denomination::One => &mut self.ones,
            Denomination::Two => &mut self.twos,
        }
    }

    /// Combined face value of every coin held.
    pub fn total_value(&self) -> u64 {
        u64::from(self.ones) * u64::from(Denomination::One.value())
            + u64::from(self.twos) * u64::from(Denomination::Two.value())
    }

    /// Remove a payout previously computed by [`make_change`] for this inventory.
    pub(crate) fn withdraw(&mut self, payout: Payout) {
        debug_assert!(payout.ones <= self.ones && payout.twos <= self.twos);
        self.ones -= payout.ones;
        self.twos -= payout.twos;
    }
}

/// Coins handed back to the customer.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub struct Payout {
    pub ones: u32,
    pub twos: u32,
}

impl Payout {
    pub fn value(&self) -> u64 {
        u64::from(self.ones) * u64::from(Denomination::One.value())
            + u64::from(self.twos) * u64::from(Denomination::Two.value())
    }

    pub fn is_empty(&self) -> bool {
        self.ones == 0 && self.twos == 0
    }
}

/// Reasons an amount cannot be paid out.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum ChangeError {
    #[error("Change of {amount} exceeds the {available} held in coins")]
    TooBig { amount: u64, available: u64 },

    #[error("Change of {amount} cannot be formed from the coins held")]
    Unsuitable { amount: u64 },
}

/// Decide which coins pay out `amount`.
///
/// # Example
///
/// ```rust
/// use vending_machine::core::{make_change, ChangeError, CoinInventory, Payout};
///
/// // Large coins alone are not enough: all of them go, the rest in small coins.
/// let payout = make_change(6, &CoinInventory::new(10, 1)).unwrap();
/// assert_eq!(payout, Payout { ones: 4, twos: 1 });
///
/// // An odd amount with no small coins cannot be represented.
/// assert_eq!(
///     make_change(3, &CoinInventory::new(0, 2)),
///     Err(ChangeError::Unsuitable { amount: 3 })
/// );
/// ```
pub fn make_change(amount: u64, inventory: &CoinInventory) -> Result<Payout, ChangeError> {
    if amount == 0 {
        return Ok(Payout::default());
    }

    let available = inventory.total_value();
    if amount > available {
        return Err(ChangeError::TooBig { amount, available });
    }

    let large = u64::from(Denomination::Two.value());
    let twos_value = u64::from(inventory.twos) * large;

    // Large coins cannot cover it: empty them and top up with small coins.
    // total_value >= amount bounds the remainder by `inventory.ones`.
    if amount > twos_value {
        let remainder = amount - twos_value;
        return Ok(Payout {
            ones: remainder as u32,
            twos: inventory.twos,
        });
    }

    // From here amount <= twos_value, so amount / large fits in `inventory.twos`.
    if amount % large == 0 {
        return Ok(Payout {
            ones: 0,
            twos: (amount / large) as u32,
        });
    }

    if inventory.ones == 0 {
        return Err(ChangeError::Unsuitable { amount });
    }

    Ok(Payout {
        ones: 1,
        twos: (amount / large) as u32,
    })
}
