pub mod handlers;
pub mod routes;
pub mod static_files;
pub mod templates;
pub mod view;

pub use routes::create_page_router;
pub use view::{resolve, View};
