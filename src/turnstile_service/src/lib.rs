mod customer_auth_service;
mod helpers;
mod tracing;

pub use customer_auth_service::CustomerAuthService;
pub use helpers::{configure_postgresql, get_postgres_pool};
