pub mod config;
pub mod error;
pub mod format;
pub mod spreadsheet_store;
pub mod vcs;
