pub mod aggregate;
pub mod catalog;
pub mod lookup;

pub use aggregate::Item;
pub use catalog::{ItemCatalog, StaticItemCatalog};
pub use lookup::{normalize_code, resolve_code, LookupOutcome, FAILED_MESSAGE, NOT_FOUND_MESSAGE};
