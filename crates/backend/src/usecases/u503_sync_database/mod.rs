pub mod service;

pub use service::run;
