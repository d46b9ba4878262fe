//! # countrymap-rs
//!
//! Umbrella crate of the workspace: re-exports [`countrymap_core`] and hosts
//! the demos (`cargo run --example basic_usage`).
//!
//! The front-ends live in their own crates: `countrymap-cli` (binary
//! `countrymap`) and `countrymap-web` (binary `countrymap-web`).

pub use countrymap_core::*;
