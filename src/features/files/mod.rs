pub mod dtos;
pub mod handlers;
pub mod models;
pub mod ownership;
pub mod repositories;
pub mod routes;
pub mod services;

pub use repositories::{FileRepository, PgFileRepository};
pub use routes::routes;
pub use services::FileService;
