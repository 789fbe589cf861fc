//! # swipe-common
//!
//! Shared utilities including configuration, error handling, authentication, and telemetry.

pub mod auth;
pub mod config;
pub mod error;
pub mod telemetry;

// Re-export commonly used types at crate root
pub use auth::{
    hash_password, validate_password_strength, verify_password, Claims, IssuedToken, JwtService,
    MAX_PASSWORD_LEN,
};
pub use config::{
    AdminConfig, AppConfig, AppSettings, ConfigError, CorsConfig, DatabaseConfig,
    DiscoveryConfig, Environment, IdentityConfig, JwtConfig, KeycloakConfig, RateLimitConfig,
    ServerConfig,
};
pub use error::{domain_status, AppError};
pub use telemetry::{
    try_init_tracing, try_init_tracing_with_config, LogFormat, TracingConfig, TracingError,
};
