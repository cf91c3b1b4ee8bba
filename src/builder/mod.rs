//! Builder API for configuring machines.
//!
//! A machine's capacities and admin code are fixed at construction.
//! [`MachineConfig`] holds them and [`MachineBuilder`] provides a fluent way
//! to override the factory defaults while checking their invariants.

pub mod config;
pub mod error;

pub use config::{MachineBuilder, MachineConfig, DEFAULT_ADMIN_CODE};
pub use error::BuildError;
