pub mod authenticate;
pub mod customers;
pub mod error;

pub use authenticate::{AuthenticateRequest, authenticate};
pub use customers::{CreateCustomerRequest, create_customer};
pub use error::{ErrorResponse, RequestError};
