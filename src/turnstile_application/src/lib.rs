pub mod use_cases;

#[cfg(test)]
mod fakes;

pub use use_cases::*;
