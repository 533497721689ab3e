pub mod env {
    pub const ENV_PREFIX: &str = "TURNSTILE";
    pub const ENV_SEPARATOR: &str = "__";
    pub const DATABASE_URL_ENV_VAR: &str = "TURNSTILE__POSTGRES__URL";
    pub const JWT_SECRET_ENV_VAR: &str = "TURNSTILE__AUTH__JWT__SECRET";
    pub const ALLOWED_ORIGINS_ENV_VAR: &str = "TURNSTILE__AUTH__ALLOWED_ORIGINS";
}

pub const BASE_CONFIG_FILE: &str = "config/base";

pub mod prod {
    pub const APP_ADDRESS: &str = "0.0.0.0:3000";
    pub const TOKEN_TTL_IN_SECONDS: i64 = 600;
    pub const POSTGRES_MAX_CONNECTIONS: u32 = 5;
}

pub mod test {
    pub const APP_ADDRESS: &str = "127.0.0.1:0";
    pub const JWT_SECRET: &str = "test-secret-key-for-testing-only";
}
