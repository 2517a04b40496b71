pub mod u501_upload_spreadsheet;
pub mod u502_commit_spreadsheets;
pub mod u503_sync_database;
