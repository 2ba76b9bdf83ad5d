// Adapters layer: concrete implementations of the domain ports.

pub mod sqlite;
pub mod storage;

pub use sqlite::SqliteCatalog;
pub use storage::LocalStorage;
