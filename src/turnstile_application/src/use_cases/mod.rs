pub mod authenticate;
pub mod register;

pub use authenticate::{AuthenticateError, AuthenticateUseCase};
pub use register::{RegisterError, RegisterUseCase};
