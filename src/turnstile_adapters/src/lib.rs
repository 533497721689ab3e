pub mod config;
pub mod hashing;
pub mod http;
pub mod logging;
pub mod persistence;
pub mod token;

pub use hashing::Argon2PasswordHasher;
pub use logging::TracingLogger;
pub use persistence::{HashMapUserStore, PostgresUserStore};
pub use token::{JwtConfig, JwtTokenSigner};
