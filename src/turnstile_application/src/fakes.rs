//! Hand-written doubles for the ports, shared by the use case tests.

use std::sync::{
    Mutex,
    atomic::{AtomicUsize, Ordering},
};

use secrecy::{ExposeSecret, Secret};
use turnstile_core::{
    Email, Logger, NewUser, Password, PasswordHash, PasswordHasher, PasswordHasherError, Profile,
    Token, TokenSigner, TokenSignerError, User, UserId, UserRepository, UserRepositoryError,
};

pub fn email(raw: &str) -> Email {
    Email::try_from(Secret::new(raw.to_string())).unwrap()
}

pub fn password(raw: &str) -> Password {
    Password::try_from(Secret::new(raw.to_string())).unwrap()
}

/// Mirrors `FakePasswordHasher::hash` so stored users can be built directly.
pub fn hashed(raw: &str) -> PasswordHash {
    PasswordHash::new(Secret::new(format!("hashed:{raw}")))
}

pub fn stored_user(id: i64, address: &str, raw_password: &str) -> User {
    User::new(
        UserId::new(id),
        "any_name".to_string(),
        email(address),
        hashed(raw_password),
        Profile::new(),
    )
}

pub enum Lookup {
    Missing,
    Found(User),
    Fails(String),
}

pub enum Creation {
    Succeeds(i64),
    AlreadyExists,
    Fails(String),
}

pub struct FakeUserRepository {
    lookup: Lookup,
    creation: Creation,
    find_calls: AtomicUsize,
    looked_up: Mutex<Vec<Email>>,
    created: Mutex<Vec<NewUser>>,
}

impl FakeUserRepository {
    pub fn new(lookup: Lookup, creation: Creation) -> Self {
        Self {
            lookup,
            creation,
            find_calls: AtomicUsize::new(0),
            looked_up: Mutex::new(Vec::new()),
            created: Mutex::new(Vec::new()),
        }
    }

    pub fn find_calls(&self) -> usize {
        self.find_calls.load(Ordering::SeqCst)
    }

    pub fn looked_up(&self) -> Vec<Email> {
        self.looked_up.lock().unwrap().clone()
    }

    pub fn create_calls(&self) -> usize {
        self.created.lock().unwrap().len()
    }

    pub fn created(&self) -> Vec<NewUser> {
        self.created.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl UserRepository for FakeUserRepository {
    async fn find_by_email(&self, email: &Email) -> Result<Option<User>, UserRepositoryError> {
        self.find_calls.fetch_add(1, Ordering::SeqCst);
        self.looked_up.lock().unwrap().push(email.clone());
        match &self.lookup {
            Lookup::Missing => Ok(None),
            Lookup::Found(user) => Ok(Some(user.clone())),
            Lookup::Fails(message) => Err(UserRepositoryError::UnexpectedError(message.clone())),
        }
    }

    async fn create(&self, user: NewUser) -> Result<User, UserRepositoryError> {
        self.created.lock().unwrap().push(user.clone());
        match &self.creation {
            Creation::Succeeds(id) => Ok(user.with_id(UserId::new(*id))),
            Creation::AlreadyExists => Err(UserRepositoryError::UserAlreadyExists),
            Creation::Fails(message) => Err(UserRepositoryError::UnexpectedError(message.clone())),
        }
    }
}

#[derive(Default)]
pub struct FakePasswordHasher {
    pub failure: Option<String>,
}

impl FakePasswordHasher {
    pub fn failing(message: &str) -> Self {
        Self {
            failure: Some(message.to_string()),
        }
    }

    fn check(&self) -> Result<(), PasswordHasherError> {
        match &self.failure {
            Some(message) => Err(PasswordHasherError(message.clone())),
            None => Ok(()),
        }
    }
}

#[async_trait::async_trait]
impl PasswordHasher for FakePasswordHasher {
    async fn hash(&self, password: &Password) -> Result<PasswordHash, PasswordHasherError> {
        self.check()?;
        Ok(hashed(password.as_ref().expose_secret()))
    }

    async fn compare(
        &self,
        password: &Password,
        hash: &PasswordHash,
    ) -> Result<bool, PasswordHasherError> {
        self.check()?;
        Ok(hashed(password.as_ref().expose_secret()).as_ref().expose_secret()
            == hash.as_ref().expose_secret())
    }
}

#[derive(Default)]
pub struct FakeTokenSigner {
    pub failure: Option<String>,
}

impl TokenSigner for FakeTokenSigner {
    fn sign(&self, user_id: &UserId) -> Result<Token, TokenSignerError> {
        match &self.failure {
            Some(message) => Err(TokenSignerError(message.clone())),
            None => Ok(Token::new(format!("signed-{user_id}"))),
        }
    }
}

#[derive(Default)]
pub struct RecordingLogger {
    infos: Mutex<Vec<String>>,
    errors: Mutex<Vec<String>>,
}

impl RecordingLogger {
    pub fn infos(&self) -> Vec<String> {
        self.infos.lock().unwrap().clone()
    }

    pub fn errors(&self) -> Vec<String> {
        self.errors.lock().unwrap().clone()
    }
}

impl Logger for RecordingLogger {
    fn info(&self, message: &str) {
        self.infos.lock().unwrap().push(message.to_string());
    }

    fn error(&self, message: &str) {
        self.errors.lock().unwrap().push(message.to_string());
    }
}
