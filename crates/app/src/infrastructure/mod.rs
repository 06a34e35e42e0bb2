//! Platform adapters.

pub mod platform;
