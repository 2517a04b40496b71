pub mod api_error;
pub mod files;
pub mod spreadsheet;
pub mod timestamp;
