//! # Catalog Repository
//!
//! Entity store for products.
//!
//! ```text
//! Service
//!   ↓  Arc<dyn ProductRepository>   (store interface)
//! MySqlProductRepository            (SQLx)      InMemoryProductRepository
//!   ↓  Arc<dyn DatabasePoolInterface>
//! MySQL
//! ```

pub mod memory;
pub mod mysql;
pub mod pool;
pub mod traits;

pub use memory::InMemoryProductRepository;
pub use mysql::*;
pub use pool::*;
pub use traits::*;
