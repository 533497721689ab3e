pub mod response;
pub mod routes;

pub use response::EnvelopeResponse;
