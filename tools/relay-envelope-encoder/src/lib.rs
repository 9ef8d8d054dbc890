//! Off-chain tooling for the relay adapters.

pub mod encoder;
pub mod simulate;
pub mod types;

mod tests;
