//! Workout configuration
//!
//! Owned, fixed-capacity description of a workout. The firmware build
//! script deserializes it from TOML; at runtime it turns into a
//! [`Program`](crate::program::Program) that borrows its strings.

pub mod types;

pub use types::*;
