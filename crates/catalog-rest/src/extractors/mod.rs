//! Custom Axum extractors.

mod validated;

pub use validated::*;
