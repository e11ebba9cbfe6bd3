//! Configuration types
//!
//! Mission tuning parameters. Stored as postcard binary data or parsed
//! from TOML when the corresponding features are enabled.

pub mod encoding;
pub mod types;

pub use types::*;
