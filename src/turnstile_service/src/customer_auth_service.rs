use std::sync::Arc;

use axum::{
    Router,
    http::{HeaderValue, Method, request},
    routing::post,
};
use tokio::net::TcpListener;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};
use turnstile_adapters::{
    config::AllowedOrigins,
    http::routes::{authenticate, create_customer},
};
use turnstile_application::{AuthenticateUseCase, RegisterUseCase};
use turnstile_core::{Logger, PasswordHasher, TokenSigner, UserRepository};

use crate::tracing::{make_span_with_request_id, on_request, on_response};

/// Customer authentication service exposing the authenticate and registration flows
pub struct CustomerAuthService {
    router: Router,
}

impl CustomerAuthService {
    /// Create a new CustomerAuthService from its collaborators
    ///
    /// # Arguments
    /// * `repository` - Store for customer records (must be Clone)
    /// * `hasher` - Password hashing and comparison (must be Clone)
    /// * `signer` - Session token signer
    /// * `logger` - Sink for the flows' informational and error messages (must be Clone)
    ///
    /// # Note on Architecture
    /// Each route gets its own use case as state, so the signer only lives in the
    /// authenticate route.
    pub fn new<R, H, T, L>(repository: R, hasher: H, signer: T, logger: L) -> Self
    where
        R: UserRepository + Clone + 'static,
        H: PasswordHasher + Clone + 'static,
        T: TokenSigner + 'static,
        L: Logger + Clone + 'static,
    {
        let authenticate_use_case =
            AuthenticateUseCase::new(repository.clone(), hasher.clone(), signer, logger.clone());
        let register_use_case = RegisterUseCase::new(repository, hasher, logger);

        let router = Router::new()
            // Authenticate needs the full set of collaborators
            .route("/authenticate", post(authenticate::<R, H, T, L>))
            .with_state(Arc::new(authenticate_use_case))
            // Registration never signs tokens
            .route("/customers", post(create_customer::<R, H, L>))
            .with_state(Arc::new(register_use_case));

        Self { router }
    }

    fn with_trace_layer(mut self) -> Self {
        self.router = self.router.layer(
            TraceLayer::new_for_http()
                .make_span_with(make_span_with_request_id)
                .on_request(on_request)
                .on_response(on_response),
        );
        self
    }

    /// Convert the service into a router that can be nested into another application
    ///
    /// # Arguments
    /// * `allowed_origins` - Optional list of allowed CORS origins
    pub fn as_nested_router(mut self, allowed_origins: Option<AllowedOrigins>) -> Router {
        if let Some(allowed_origins) = allowed_origins {
            let cors = CorsLayer::new()
                .allow_methods([Method::POST])
                .allow_credentials(true)
                .allow_origin(AllowOrigin::predicate(
                    move |origin: &HeaderValue, _request_parts: &request::Parts| {
                        allowed_origins.contains(origin)
                    },
                ));

            self.router = self.router.layer(cors);
        }
        self.with_trace_layer().router
    }

    /// Run the service as a standalone server
    ///
    /// # Arguments
    /// * `listener` - TCP listener to bind the server to
    /// * `allowed_origins` - Optional list of allowed CORS origins
    pub async fn run_standalone(
        self,
        listener: TcpListener,
        allowed_origins: Option<AllowedOrigins>,
    ) -> Result<(), std::io::Error> {
        let router = self.as_nested_router(allowed_origins);

        tracing::info!("Customer auth service listening on {}", listener.local_addr()?);

        axum::serve(listener, router).await
    }
}
