//! Configuration types
//!
//! Host-tunable face settings. Hosts parse these from whatever format they
//! like (the simulator reads TOML through serde).

pub mod types;

pub use types::*;
