pub mod service;

pub use service::receive;
