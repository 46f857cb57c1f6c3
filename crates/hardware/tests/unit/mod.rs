//! # Unit Components
//!
//! This module serves as the central hub for the component tests, laid out
//! like the library source tree.



/// Unit tests for the branch prediction unit.
pub mod core;

/// Unit tests for the per-core driver and synthetic workloads.
pub mod sim;
