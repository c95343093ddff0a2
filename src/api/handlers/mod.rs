pub mod delete;
pub mod download;
pub mod health;
pub mod list;
pub mod upload;

pub use delete::delete_handler;
pub use download::download_handler;
pub use health::health_handler;
pub use list::list_handler;
pub use upload::upload_handler;
