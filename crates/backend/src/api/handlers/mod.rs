pub mod a001_stock_item;
pub mod files;
pub mod usecases;
