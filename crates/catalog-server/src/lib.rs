//! # Catalog Server Library
//!
//! Dependency injection modules and startup utilities for the product
//! catalog server.

pub mod di;
pub mod startup;
