//! Core functionality for quickprop property-based testing.
//!
//! This crate provides the building blocks for property-based testing:
//! pseudorandom generators, composable arbitraries, lazy value streams,
//! properties and the runner that checks them.

pub mod arbitrary;
pub mod data;
pub mod error;
pub mod prng;
pub mod property;
pub mod runner;
pub mod stream;

// Re-export the main types
pub use arbitrary::*;
pub use data::*;
pub use error::*;
pub use prng::*;
pub use property::*;
pub use runner::*;
pub use stream::*;
