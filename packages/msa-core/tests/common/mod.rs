//! Common test utilities for msa-core
//!
//! Shared fixtures, a brute-force reference solver and proptest strategies.

#![allow(dead_code)]

mod fixtures;
mod reference;
mod strategies;

pub use fixtures::*;
pub use reference::*;
pub use strategies::*;
