//! # Catalog Service
//!
//! Product service layer. Owns the cache-consistency rules between the
//! entity store and the read-through cache.

pub mod cache;
pub mod dto;
pub mod r#impl;
pub mod product_service;

pub use cache::*;
pub use dto::*;
pub use product_service::*;
pub use r#impl::ProductServiceImpl;
