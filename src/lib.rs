//! # Turnstile - Customer Authentication Service Library
//!
//! This is a facade crate that re-exports all public APIs from the service components.
//! Use this crate to get access to the authentication and registration flows in one place.
//!
//! ## Structure
//!
//! - **Core domain types**: `Email`, `Password`, `User`, `ApiResponse`, etc.
//! - **Ports**: `UserRepository`, `PasswordHasher`, `TokenSigner`, `Logger`
//! - **Use cases**: `AuthenticateUseCase`, `RegisterUseCase`
//! - **Adapters**: `PostgresUserStore`, `Argon2PasswordHasher`, `JwtTokenSigner`, etc.
//! - **Service**: `CustomerAuthService` - The main entry point for the HTTP service

// ============================================================================
// Core Domain Types
// ============================================================================

/// Core domain types and value objects
pub mod core {
    pub use turnstile_core::*;
}

// Re-export most commonly used core types at the root level
pub use turnstile_core::{
    ApiBody, ApiResponse, AuthenticatedUser, CreatedUser, CustomerMessage, Email, NewUser,
    Password, PasswordHash, Profile, Token, User, UserError, UserId, UserInput,
};

// ============================================================================
// Ports
// ============================================================================

/// Port trait definitions
pub mod ports {
    pub use turnstile_core::{
        Logger, PasswordHasher, PasswordHasherError, TokenSigner, TokenSignerError,
        UserRepository, UserRepositoryError,
    };
}

// Re-export ports at root level
pub use ports::{
    Logger, PasswordHasher, PasswordHasherError, TokenSigner, TokenSignerError, UserRepository,
    UserRepositoryError,
};

// ============================================================================
// Use Cases (Application Layer)
// ============================================================================

/// Application use cases
pub mod use_cases {
    pub use turnstile_application::*;
}

// Re-export use cases at root level
pub use turnstile_application::{
    AuthenticateError, AuthenticateUseCase, RegisterError, RegisterUseCase,
};

// ============================================================================
// Adapters (Infrastructure)
// ============================================================================

/// Infrastructure adapters
pub mod adapters {
    /// HTTP route handlers
    pub mod http {
        pub use turnstile_adapters::http::*;
    }

    /// Persistence implementations
    pub mod persistence {
        pub use turnstile_adapters::persistence::*;
    }

    /// Password hashing
    pub mod hashing {
        pub use turnstile_adapters::hashing::*;
    }

    /// JWT session tokens
    pub mod token {
        pub use turnstile_adapters::token::*;
    }

    /// Configuration
    pub mod config {
        pub use turnstile_adapters::config::*;
    }
}

// Re-export commonly used adapters at root level
pub use turnstile_adapters::{
    Argon2PasswordHasher, HashMapUserStore, JwtConfig, JwtTokenSigner, PostgresUserStore,
    TracingLogger,
};

// ============================================================================
// Customer Auth Service (Main Entry Point)
// ============================================================================

/// Main customer auth service
pub use turnstile_service::{CustomerAuthService, configure_postgresql, get_postgres_pool};

// ============================================================================
// Re-export common external dependencies
// ============================================================================

/// Re-export async-trait for implementing the port traits
pub use async_trait::async_trait;

/// Re-export secrecy for working with secrets
pub use secrecy::{ExposeSecret, Secret};

pub use http;
