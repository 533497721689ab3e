use fake::{Fake, faker::internet::en::SafeEmail};
use secrecy::Secret;
use serde::Serialize;
use serde_json::{Value, json};
use tokio::net::TcpListener;
use turnstile_adapters::{
    Argon2PasswordHasher, HashMapUserStore, JwtConfig, JwtTokenSigner, TracingLogger,
    config::constants::{prod, test},
};
use turnstile_core::{Email, NewUser, User, UserRepository, UserRepositoryError};
use turnstile_service::CustomerAuthService;

pub struct TestApp {
    pub address: String,
    pub http_client: reqwest::Client,
}

impl TestApp {
    pub async fn new() -> Self {
        Self::with_repository(HashMapUserStore::new()).await
    }

    pub async fn with_repository<R>(repository: R) -> Self
    where
        R: UserRepository + Clone + 'static,
    {
        let signer = JwtTokenSigner::new(JwtConfig {
            jwt_secret: Secret::new(test::JWT_SECRET.to_string()),
            token_ttl_in_seconds: prod::TOKEN_TTL_IN_SECONDS,
        });

        let service = CustomerAuthService::new(
            repository,
            Argon2PasswordHasher::new(),
            signer,
            TracingLogger::new(),
        );

        let listener = TcpListener::bind(test::APP_ADDRESS)
            .await
            .expect("Failed to bind test listener");
        let address = format!("http://{}", listener.local_addr().unwrap());

        tokio::spawn(service.run_standalone(listener, None));

        Self {
            address,
            http_client: reqwest::Client::new(),
        }
    }

    pub async fn post_authenticate<Body>(&self, body: &Body) -> reqwest::Response
    where
        Body: Serialize,
    {
        self.http_client
            .post(format!("{}/authenticate", &self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn post_customers<Body>(&self, body: &Body) -> reqwest::Response
    where
        Body: Serialize,
    {
        self.http_client
            .post(format!("{}/customers", &self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    /// Register a customer and return the body that was sent.
    pub async fn register(&self, password: &str) -> Value {
        let body = json!({
            "name": "any_name",
            "email": get_random_email(),
            "password": password,
        });
        let response = self.post_customers(&body).await;
        assert_eq!(response.status().as_u16(), 201);
        body
    }
}

pub fn get_random_email() -> String {
    SafeEmail().fake()
}

/// Repository whose every call fails with the same message.
#[derive(Clone)]
pub struct UnavailableUserStore {
    pub message: &'static str,
}

#[async_trait::async_trait]
impl UserRepository for UnavailableUserStore {
    async fn find_by_email(&self, _email: &Email) -> Result<Option<User>, UserRepositoryError> {
        Err(UserRepositoryError::UnexpectedError(self.message.to_string()))
    }

    async fn create(&self, _user: NewUser) -> Result<User, UserRepositoryError> {
        Err(UserRepositoryError::UnexpectedError(self.message.to_string()))
    }
}
