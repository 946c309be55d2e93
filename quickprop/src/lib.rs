//! quickprop property-based testing library.
//!
//! This is the main entry point for quickprop, providing a convenient API
//! for property-based testing in Rust.
//!
//! ```rust
//! use quickprop::*;
//!
//! let prop = property(integer(0, 1000).unwrap(), |&n| n + 1 > n);
//! assert!(assert_property(&prop, &Config::default().with_runs(50)).is_ok());
//! ```

pub use quickprop_core::*;
