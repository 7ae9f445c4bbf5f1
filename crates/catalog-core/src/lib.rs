//! # Catalog Core
//!
//! Core types, domain entities, and error definitions for the product catalog.
//! Every other crate in the workspace builds on the abstractions defined here.

pub mod domain;
pub mod error;
pub mod id;
pub mod result;
pub mod validation;

pub use domain::*;
pub use error::*;
pub use id::*;
pub use result::*;
pub use validation::*;

// Re-export shaku for dependency injection
pub use shaku::{module, HasComponent, Interface};
