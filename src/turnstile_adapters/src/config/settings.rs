use axum::http::HeaderValue;
use config::{Config, ConfigError, Environment, File, builder::DefaultState};
use secrecy::Secret;
use serde::Deserialize;

use super::constants::{BASE_CONFIG_FILE, env, prod};
use crate::token::JwtConfig;

#[derive(Debug, Clone, Deserialize)]
pub struct ServiceSetting {
    pub application: ApplicationSetting,
    pub postgres: PostgresSetting,
    pub auth: AuthSetting,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApplicationSetting {
    pub address: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PostgresSetting {
    pub url: Secret<String>,
    pub max_connections: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuthSetting {
    pub jwt: JwtSetting,
    #[serde(default)]
    pub allowed_origins: AllowedOrigins,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JwtSetting {
    pub secret: Secret<String>,
    pub time_to_live: i64,
}

impl From<&JwtSetting> for JwtConfig {
    fn from(setting: &JwtSetting) -> Self {
        JwtConfig {
            jwt_secret: setting.secret.clone(),
            token_ttl_in_seconds: setting.time_to_live,
        }
    }
}

/// Origins allowed to call the service from a browser.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct AllowedOrigins(Vec<String>);

impl AllowedOrigins {
    pub fn contains(&self, origin: &HeaderValue) -> bool {
        self.0
            .iter()
            .any(|allowed| allowed.as_bytes() == origin.as_bytes())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl ServiceSetting {
    /// Load settings from `.env`, `config/base.json` and `TURNSTILE__*` variables,
    /// later sources overriding earlier ones.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Self::build(
            Config::builder()
                .add_source(File::with_name(BASE_CONFIG_FILE).required(false))
                .add_source(environment()),
        )
    }

    fn build(builder: config::ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        builder
            .set_default("application.address", prod::APP_ADDRESS)?
            .set_default(
                "postgres.max_connections",
                i64::from(prod::POSTGRES_MAX_CONNECTIONS),
            )?
            .set_default("auth.jwt.time_to_live", prod::TOKEN_TTL_IN_SECONDS)?
            .build()?
            .try_deserialize()
    }
}

fn environment() -> Environment {
    Environment::with_prefix(env::ENV_PREFIX)
        .separator(env::ENV_SEPARATOR)
        .list_separator(",")
        .with_list_parse_key("auth.allowed_origins")
        .try_parsing(true)
}
