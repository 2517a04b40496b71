pub mod api;
pub mod source;
pub mod ui;

pub use source::{use_lookup_source, LookupSource};
