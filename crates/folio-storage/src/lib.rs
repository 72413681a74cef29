// Storage layer for Folio
// Decision: Support both PostgreSQL (production) and in-memory (dev mode)
//
// - Database: sqlx repository over PostgreSQL, with embedded migrations
// - InMemoryDatabase: same API over locked maps, used in dev mode and tests
// - StorageBackend: enum dispatch between the two

pub mod backend;
pub mod memory;
pub mod models;
pub mod repositories;

pub use backend::StorageBackend;
pub use memory::InMemoryDatabase;
pub use models::*;
pub use repositories::Database;
