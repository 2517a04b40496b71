pub mod api;
pub mod server_files;
pub mod view;

pub use view::UploadPage;
