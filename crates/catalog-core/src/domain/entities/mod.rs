//! Domain entities.

mod product;

pub use product::*;
