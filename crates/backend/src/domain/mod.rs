pub mod a001_stock_item;
