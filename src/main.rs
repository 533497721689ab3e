use color_eyre::eyre::Result;
use tracing_error::ErrorLayer;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};
use turnstile::{
    Argon2PasswordHasher, CustomerAuthService, JwtConfig, JwtTokenSigner, PostgresUserStore,
    TracingLogger, adapters::config::ServiceSetting, configure_postgresql,
};

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing()?;

    // Load configuration
    let config = ServiceSetting::load()?;

    // Setup database connection pool and run migrations
    let pg_pool = configure_postgresql(&config.postgres).await?;

    // Create collaborators
    let user_store = PostgresUserStore::new(pg_pool);
    let signer = JwtTokenSigner::new(JwtConfig::from(&config.auth.jwt));

    let service = CustomerAuthService::new(
        user_store,
        Argon2PasswordHasher::new(),
        signer,
        TracingLogger::new(),
    );

    let allowed_origins = Some(config.auth.allowed_origins.clone())
        .filter(|origins| !origins.is_empty());

    let listener = tokio::net::TcpListener::bind(&config.application.address).await?;
    tracing::info!("Starting customer auth service...");

    service.run_standalone(listener, allowed_origins).await?;

    Ok(())
}

pub fn init_tracing() -> Result<()> {
    let fmt_layer = fmt::layer().compact();

    let filter_layer = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("info"))?;

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .with(ErrorLayer::default())
        .init();

    Ok(())
}
