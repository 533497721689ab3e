//! Catalog of the reasons a customer request can end in a conflict.

use std::fmt;

use serde::{Serialize, ser::SerializeStruct};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CustomerMessage {
    NotFoundUser,
    EmailOrPassword,
    DuplicateEmail,
}

impl CustomerMessage {
    pub fn code(&self) -> &'static str {
        match self {
            Self::NotFoundUser => "NOT_FOUND_USER",
            Self::EmailOrPassword => "EMAIL_OR_PASSWORD",
            Self::DuplicateEmail => "DUPLICATE_EMAIL",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Self::NotFoundUser => "user not found",
            Self::EmailOrPassword => "email or password incorrect",
            Self::DuplicateEmail => "duplicate email",
        }
    }
}

impl fmt::Display for CustomerMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl Serialize for CustomerMessage {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut state = serializer.serialize_struct("CustomerMessage", 2)?;
        state.serialize_field("code", self.code())?;
        state.serialize_field("message", self.message())?;
        state.end()
    }
}
