//! Machine configuration and its fluent builder.

use crate::builder::error::BuildError;
use crate::core::Denomination;
use crate::vending::VendingMachine;
use serde::{Deserialize, Serialize};

/// Code accepted by `enter_admin` on a default machine.
pub const DEFAULT_ADMIN_CODE: u64 = 117_345_294_655_382;

/// Fixed parameters of a machine, set at construction.
///
/// Capacities and the admin code never change afterwards; `price` is only
/// the starting price and can be changed in administering mode.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MachineConfig {
    pub admin_code: u64,
    pub max_products: u32,
    pub coin_capacity_ones: u32,
    pub coin_capacity_twos: u32,
    pub price: u32,
}

impl Default for MachineConfig {
    fn default() -> Self {
        Self {
            admin_code: DEFAULT_ADMIN_CODE,
            max_products: 40,
            coin_capacity_ones: 50,
            coin_capacity_twos: 50,
            price: 5,
        }
    }
}

impl MachineConfig {
    pub fn coin_capacity(&self, denomination: Denomination) -> u32 {
        match denomination {
            Denomination::One => self.coin_capacity_ones,
            Denomination::Two => self.coin_capacity_twos,
        }
    }

    /// Check the invariants a machine relies on.
    pub fn validate(&self) -> Result<(), BuildError> {
        if self.max_products == 0 {
            return Err(BuildError::ZeroProductCapacity);
        }
        for denomination in [Denomination::One, Denomination::Two] {
            if self.coin_capacity(denomination) == 0 {
                return Err(BuildError::ZeroCoinCapacity { denomination });
            }
        }
        if self.price == 0 {
            return Err(BuildError::ZeroPrice);
        }
        Ok(())
    }
}

/// Builder for constructing machines with a fluent API.
///
/// Unset fields fall back to [`MachineConfig::default`].
///
/// # Example
///
/// ```rust
/// use vending_machine::builder::MachineBuilder;
/// use vending_machine::core::Denomination;
///
/// let machine = MachineBuilder::new()
///     .admin_code(42)
///     .max_products(10)
///     .coin_capacity(Denomination::Two, 20)
///     .price(3)
///     .build()
///     .unwrap();
///
/// assert_eq!(machine.price(), 3);
/// assert_eq!(machine.config().max_products, 10);
/// ```
#[derive(Clone, Debug, Default)]
pub struct MachineBuilder {
    config: MachineConfig,
}

impl MachineBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration.
    pub fn from_config(config: MachineConfig) -> Self {
        Self { config }
    }

    pub fn admin_code(mut self, code: u64) -> Self {
        self.config.admin_code = code;
        self
    }

    pub fn max_products(mut self, max: u32) -> Self {
        self.config.max_products = max;
        self
    }

    /// Set how many coins of one denomination the machine can store.
    pub fn coin_capacity(mut self, denomination: Denomination, capacity: u32) -> Self {
        match denomination {
            Denomination::One => self.config.coin_capacity_ones = capacity,
            Denomination::Two => self.config.coin_capacity_twos = capacity,
        }
        self
    }

    /// Set the starting price.
    pub fn price(mut self, price: u32) -> Self {
        self.config.price = price;
        self
    }

    /// Build the machine.
    /// Returns an error if a capacity or the price is zero.
    pub fn build(self) -> Result<VendingMachine, BuildError> {
        VendingMachine::with_config(self.config)
    }
}
