use chrono::Utc;
use jsonwebtoken::{EncodingKey, Header, encode};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use turnstile_core::{Token, TokenSigner, TokenSignerError, UserId};

#[derive(Clone)]
pub struct JwtConfig {
    pub jwt_secret: Secret<String>,
    pub token_ttl_in_seconds: i64,
}

impl JwtConfig {
    pub fn as_bytes(&self) -> &[u8] {
        self.jwt_secret.expose_secret().as_bytes()
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct Claims {
    pub sub: String,
    pub iat: i64,
    pub exp: i64,
}

/// Signs HS256 session tokens whose subject is the user id.
#[derive(Clone)]
pub struct JwtTokenSigner {
    config: JwtConfig,
}

impl JwtTokenSigner {
    pub fn new(config: JwtConfig) -> Self {
        Self { config }
    }
}

impl TokenSigner for JwtTokenSigner {
    fn sign(&self, user_id: &UserId) -> Result<Token, TokenSignerError> {
        let delta = chrono::Duration::try_seconds(self.config.token_ttl_in_seconds).ok_or(
            TokenSignerError("Token time to live is out of range".to_string()),
        )?;

        let now = Utc::now();
        let exp = now
            .checked_add_signed(delta)
            .ok_or(TokenSignerError(
                "Token expiry is out of range".to_string(),
            ))?
            .timestamp();

        let claims = Claims {
            sub: user_id.to_string(),
            iat: now.timestamp(),
            exp,
        };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.config.as_bytes()),
        )
        .map(Token::new)
        .map_err(|e| TokenSignerError(e.to_string()))
    }
}
