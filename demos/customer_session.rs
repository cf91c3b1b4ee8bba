//! A short day in the life of a vending machine.
//!
//! Run with `RUST_LOG=debug cargo run --example customer_session` to see
//! the machine's log events.

use tracing_subscriber::EnvFilter;
use vending_machine::builder::DEFAULT_ADMIN_CODE;
use vending_machine::{Denomination, Response, VendingError, VendingMachine};

fn main() -> Result<(), VendingError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut machine = VendingMachine::new();

    println!("=== Operator restock ===");
    machine.enter_admin(DEFAULT_ADMIN_CODE)?;
    machine.fill_products()?;
    machine.fill_coins(10, 2)?;
    println!(
        "Loaded {} products, holding {} in coins",
        machine.product_count(),
        machine.held_coin_value()
    );
    machine.exit_admin();

    println!("\n=== Customer buys one product ===");
    for _ in 0..9 {
        machine.insert_coin(Denomination::One)?;
    }
    machine.insert_coin(Denomination::Two)?;
    println!("Balance: {}", machine.balance());
    machine.dispense_product(1)?;
    println!(
        "Dispensed. Balance {}, {} products left",
        machine.balance(),
        machine.product_count()
    );

    println!("\n=== Customer changes their mind ===");
    machine.insert_coin(Denomination::Two)?;
    let attempt = machine.dispense_product(1);
    println!("Dispense with balance 2: {:?}", Response::from(&attempt));
    machine.return_money()?;
    println!("Refunded. Balance {}", machine.balance());

    println!("\n=== Inventory check ===");
    println!("Customer view of coins: {}", machine.held_coin_value());
    machine.enter_admin(DEFAULT_ADMIN_CODE)?;
    println!(
        "Operator view: {} small, {} large",
        machine.coin1_count(),
        machine.coin2_count()
    );
    machine.exit_admin();

    println!("\nMode path: {:?}", machine.history().get_path());
    Ok(())
}
