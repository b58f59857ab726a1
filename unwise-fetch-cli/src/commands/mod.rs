//! CLI command implementations.
//!
//! - [`fetch`] - Download every indexed product of one tile

pub mod fetch;
