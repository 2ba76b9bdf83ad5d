pub mod completion_marker;
pub mod header_renumber;
pub mod list_filter;
pub mod table_counter;

pub use crate::domain::model::{Declaration, DeclarationKind, Heading, ListEntry};
pub use crate::domain::ports::{Storage, TableCatalog};
pub use crate::utils::error::Result;
