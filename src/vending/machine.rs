//! The vending machine state holder.

use crate::builder::{BuildError, MachineConfig};
use crate::core::{
    make_change, CoinInventory, Denomination, Mode, ModeHistory, ModeTransition, Operation,
};
use crate::enforcement::rules;
use crate::vending::response::{Blocker, VendResult, VendingError};
use chrono::Utc;
use tracing::{debug, info, warn};

/// In-memory vending machine.
///
/// Every mutating call either applies all of its effects or returns an
/// error and leaves the machine untouched.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VendingMachine {
    config: MachineConfig,
    mode: Mode,
    products: u32,
    price: u32,
    coins: CoinInventory,
    balance: u64,
    history: ModeHistory,
}

impl Default for VendingMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl VendingMachine {
    /// Create an empty machine with the factory configuration.
    pub fn new() -> Self {
        Self::from_checked(MachineConfig::default())
    }

    /// Create an empty machine in operation mode.
    ///
    /// Returns an error if a capacity or the starting price is zero.
    pub fn with_config(config: MachineConfig) -> Result<Self, BuildError> {
        config.validate()?;
        Ok(Self::from_checked(config))
    }

    /// `config` must already satisfy [`MachineConfig::validate`].
    fn from_checked(config: MachineConfig) -> Self {
        Self {
            price: config.price,
            config,
            mode: Mode::Operation,
            products: 0,
            coins: CoinInventory::default(),
            balance: 0,
            history: ModeHistory::new(),
        }
    }

    pub fn config(&self) -> &MachineConfig {
        &self.config
    }

    pub fn product_count(&self) -> u32 {
        self.products
    }

    /// Money inserted by the current customer and not yet spent or returned.
    pub fn balance(&self) -> u64 {
        self.balance
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn price(&self) -> u32 {
        self.price
    }

    /// Face value of all coins held.
    ///
    /// Coin inventory is hidden from customers: this reports 0 in
    /// operation mode.
    pub fn held_coin_value(&self) -> u64 {
        match self.mode {
            Mode::Operation => 0,
            Mode::Administering => self.coins.total_value(),
        }
    }

    /// Coins held of one denomination; 0 in operation mode.
    pub fn coin_count(&self, denomination: Denomination) -> u32 {
        match self.mode {
            Mode::Operation => 0,
            Mode::Administering => self.coins.count(denomination),
        }
    }

    pub fn coin1_count(&self) -> u32 {
        self.coin_count(Denomination::One)
    }

    pub fn coin2_count(&self) -> u32 {
        self.coin_count(Denomination::Two)
    }

    /// Every successful mode change since construction.
    pub fn history(&self) -> &ModeHistory {
        &self.history
    }

    /// Switch to administering mode.
    ///
    /// An outstanding balance blocks entry even when the code is right; it
    /// is checked before the code. Re-entering while already administering
    /// succeeds without recording a transition.
    pub fn enter_admin(&mut self, code: u64) -> VendResult {
        if self.balance != 0 {
            debug!(balance = self.balance, "admin entry blocked by balance");
            return Err(VendingError::CannotPerform(Blocker::BalanceOutstanding {
                balance: self.balance,
            }));
        }

        if let Err(violations) =
            rules::into_result(rules::admin_code_matches(code, self.config.admin_code))
        {
            warn!("rejected admin code");
            return Err(violations.into());
        }

        if self.mode != Mode::Administering {
            self.switch_mode(Mode::Administering);
        }
        Ok(())
    }

    /// Return to operation mode. Does nothing if already there.
    pub fn exit_admin(&mut self) {
        if self.mode == Mode::Administering {
            self.switch_mode(Mode::Operation);
        }
    }

    /// Load products up to capacity.
    pub fn fill_products(&mut self) -> VendResult {
        self.gate(Operation::FillProducts)?;
        self.products = self.config.max_products;
        info!(products = self.products, "products restocked");
        Ok(())
    }

    /// Set the coin stores to exactly `ones` and `twos` coins.
    ///
    /// Both counts are validated before either is written.
    pub fn fill_coins(&mut self, ones: u32, twos: u32) -> VendResult {
        self.gate(Operation::FillCoins)?;
        rules::into_result(rules::coin_refill(
            ones,
            self.config.coin_capacity_ones,
            twos,
            self.config.coin_capacity_twos,
        ))?;

        self.coins = CoinInventory::new(ones, twos);
        info!(ones, twos, "coins restocked");
        Ok(())
    }

    pub fn set_price(&mut self, price: u32) -> VendResult {
        self.gate(Operation::SetPrice)?;
        rules::into_result(rules::price_positive(price))?;

        info!(old = self.price, new = price, "price changed");
        self.price = price;
        Ok(())
    }

    /// Accept one coin from the customer.
    pub fn insert_coin(&mut self, denomination: Denomination) -> VendResult {
        self.gate(Operation::InsertCoin)?;

        let capacity = self.config.coin_capacity(denomination);
        if self.coins.count(denomination) >= capacity {
            debug!(%denomination, capacity, "coin store full");
            return Err(VendingError::CannotPerform(Blocker::CoinStoreFull {
                denomination,
                capacity,
            }));
        }

        *self.coins.count_mut(denomination) += 1;
        self.balance += u64::from(denomination.value());
        debug!(%denomination, balance = self.balance, "coin inserted");
        Ok(())
    }

    /// Refund the whole balance from the coins held.
    pub fn return_money(&mut self) -> VendResult {
        self.gate(Operation::ReturnMoney)?;
        if self.balance == 0 {
            return Ok(());
        }

        let payout = make_change(self.balance, &self.coins)?;
        self.coins.withdraw(payout);
        debug!(
            refunded = self.balance,
            ones = payout.ones,
            twos = payout.twos,
            "money returned"
        );
        self.balance = 0;
        Ok(())
    }

    /// Sell `count` products, paying out any change.
    ///
    /// Checks run in order: count range, product availability, balance,
    /// change-making. Nothing changes unless all of them pass.
    pub fn dispense_product(&mut self, count: u32) -> VendResult {
        self.gate(Operation::DispenseProduct)?;
        rules::into_result(rules::product_count_in_range(
            count,
            self.config.max_products,
        ))?;

        if count > self.products {
            return Err(VendingError::InsufficientProduct {
                requested: count,
                available: self.products,
            });
        }

        let cost = u64::from(count) * u64::from(self.price);
        let Some(change) = self.balance.checked_sub(cost) else {
            return Err(VendingError::InsufficientMoney {
                cost,
                balance: self.balance,
            });
        };

        let payout = make_change(change, &self.coins)?;
        self.coins.withdraw(payout);
        self.products -= count;
        self.balance = 0;
        info!(count, cost, change, remaining = self.products, "products dispensed");
        Ok(())
    }

    fn gate(&self, operation: Operation) -> VendResult {
        if self.mode.permits(operation) {
            Ok(())
        } else {
            debug!(%operation, mode = %self.mode, "operation rejected by mode");
            Err(VendingError::IllegalOperation {
                operation,
                mode: self.mode,
            })
        }
    }

    fn switch_mode(&mut self, to: Mode) {
        let transition = ModeTransition {
            from: self.mode,
            to,
            timestamp: Utc::now(),
        };
        self.history.push(transition);
        self.mode = to;
        info!(mode = %to, "mode changed");
    }
}
