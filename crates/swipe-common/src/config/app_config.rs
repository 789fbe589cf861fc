//! Application configuration structs
//!
//! Loads configuration from environment variables (and a `.env` file if present).
//! The resulting [`AppConfig`] is built once at startup and passed explicitly
//! to every component that needs it.

use serde::Deserialize;
use std::env;
use std::str::FromStr;
use swipe_core::{DiscoveryQuota, DEFAULT_UNVERIFIED_LIMIT};

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub app: AppSettings,
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub identity: IdentityConfig,
    pub discovery: DiscoveryConfig,
    pub admin: AdminConfig,
    pub rate_limit: RateLimitConfig,
    pub cors: CorsConfig,
}

/// General application settings
#[derive(Debug, Clone, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_app_name")]
    pub name: String,
    #[serde(default)]
    pub env: Environment,
}

/// Environment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    #[must_use]
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }

    fn parse(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "production" => Some(Self::Production),
            "staging" => Some(Self::Staging),
            "development" => Some(Self::Development),
            _ => None,
        }
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Per-request deadline; requests past it are dropped and cancelled
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

impl ServerConfig {
    #[must_use]
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Database configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
    /// Run embedded migrations at startup
    #[serde(default = "default_true")]
    pub auto_migrate: bool,
}

/// JWT configuration for the local identity provider
#[derive(Debug, Clone, Deserialize)]
pub struct JwtConfig {
    pub secret: String,
    #[serde(default = "default_access_token_expiry")]
    pub access_token_expiry: i64,
    #[serde(default = "default_jwt_issuer")]
    pub issuer: String,
}

/// Keycloak realm and client settings
#[derive(Debug, Clone, Deserialize)]
pub struct KeycloakConfig {
    pub url: String,
    #[serde(default = "default_realm")]
    pub realm: String,
    pub client_id: String,
    pub client_secret: String,
    #[serde(default = "default_keycloak_timeout")]
    pub request_timeout_secs: u64,
}

/// Which identity provider issues accounts and tokens
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "provider", rename_all = "lowercase")]
pub enum IdentityConfig {
    Local(JwtConfig),
    Keycloak(KeycloakConfig),
}

/// Candidate discovery limits
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct DiscoveryConfig {
    #[serde(default = "default_unverified_limit")]
    pub unverified_limit: i64,
    #[serde(default)]
    pub verified_limit: Option<i64>,
    #[serde(default = "default_page_size")]
    pub default_page_size: i64,
    #[serde(default = "default_max_page_size")]
    pub max_page_size: i64,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            unverified_limit: default_unverified_limit(),
            verified_limit: None,
            default_page_size: default_page_size(),
            max_page_size: default_max_page_size(),
        }
    }
}

impl DiscoveryConfig {
    /// Reject negative quotas and page sizes below one
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.unverified_limit < 0 {
            return Err(ConfigError::InvalidValue(
                "DISCOVERY_UNVERIFIED_LIMIT",
                self.unverified_limit.to_string(),
            ));
        }
        if let Some(limit) = self.verified_limit.filter(|l| *l < 0) {
            return Err(ConfigError::InvalidValue(
                "DISCOVERY_VERIFIED_LIMIT",
                limit.to_string(),
            ));
        }
        if self.default_page_size < 1 {
            return Err(ConfigError::InvalidValue(
                "DISCOVERY_DEFAULT_PAGE_SIZE",
                self.default_page_size.to_string(),
            ));
        }
        if self.max_page_size < 1 {
            return Err(ConfigError::InvalidValue(
                "DISCOVERY_MAX_PAGE_SIZE",
                self.max_page_size.to_string(),
            ));
        }
        Ok(())
    }

    #[must_use]
    pub fn quota(&self) -> DiscoveryQuota {
        DiscoveryQuota::new(self.unverified_limit, self.verified_limit)
    }
}

/// Operator endpoints
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AdminConfig {
    /// Shared key for `x-admin-key`; admin routes reject every request when unset
    #[serde(default)]
    pub api_key: Option<String>,
}

/// Rate limiting configuration
#[derive(Debug, Clone, Deserialize)]
pub struct RateLimitConfig {
    #[serde(default = "default_requests_per_second")]
    pub requests_per_second: u32,
    #[serde(default = "default_burst")]
    pub burst: u32,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            requests_per_second: default_requests_per_second(),
            burst: default_burst(),
        }
    }
}

/// CORS configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CorsConfig {
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

// Default value functions
fn default_app_name() -> String {
    "swipe-api".to_string()
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8090
}

fn default_request_timeout() -> u64 {
    30
}

fn default_max_connections() -> u32 {
    10
}

fn default_min_connections() -> u32 {
    1
}

fn default_true() -> bool {
    true
}

fn default_access_token_expiry() -> i64 {
    3600 // 1 hour
}

fn default_jwt_issuer() -> String {
    "swipe-api".to_string()
}

fn default_realm() -> String {
    "master".to_string()
}

fn default_keycloak_timeout() -> u64 {
    10
}

fn default_unverified_limit() -> i64 {
    DEFAULT_UNVERIFIED_LIMIT
}

fn default_page_size() -> i64 {
    20
}

fn default_max_page_size() -> i64 {
    100
}

fn default_requests_per_second() -> u32 {
    10
}

fn default_burst() -> u32 {
    50
}

/// Parse an optional raw value, reporting unparsable input instead of ignoring it
fn parse_var<T: FromStr>(name: &'static str, raw: Option<String>) -> Result<Option<T>, ConfigError> {
    match raw.map(|s| s.trim().to_string()).filter(|s| !s.is_empty()) {
        None => Ok(None),
        Some(s) => s
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidValue(name, s)),
    }
}

fn var(name: &'static str) -> Option<String> {
    env::var(name).ok()
}

fn optional<T: FromStr>(name: &'static str) -> Result<Option<T>, ConfigError> {
    parse_var(name, var(name))
}

fn or_default<T: FromStr>(name: &'static str, default: fn() -> T) -> Result<T, ConfigError> {
    Ok(optional(name)?.unwrap_or_else(default))
}

fn required(name: &'static str) -> Result<String, ConfigError> {
    var(name)
        .filter(|s| !s.trim().is_empty())
        .ok_or(ConfigError::MissingVar(name))
}

impl IdentityConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let provider = var("IDENTITY_PROVIDER").unwrap_or_else(|| "local".to_string());

        match provider.to_lowercase().as_str() {
            "local" => Ok(Self::Local(JwtConfig {
                secret: required("JWT_SECRET")?,
                access_token_expiry: or_default("JWT_ACCESS_TOKEN_EXPIRY", default_access_token_expiry)?,
                issuer: var("JWT_ISSUER").unwrap_or_else(default_jwt_issuer),
            })),
            "keycloak" => Ok(Self::Keycloak(KeycloakConfig {
                url: required("KEYCLOAK_URL")?,
                realm: var("KEYCLOAK_REALM").unwrap_or_else(default_realm),
                client_id: required("KEYCLOAK_CLIENT_ID")?,
                client_secret: required("KEYCLOAK_CLIENT_SECRET")?,
                request_timeout_secs: or_default(
                    "KEYCLOAK_REQUEST_TIMEOUT_SECS",
                    default_keycloak_timeout,
                )?,
            })),
            _ => Err(ConfigError::InvalidValue("IDENTITY_PROVIDER", provider)),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    /// Returns an error if required environment variables are missing or unparsable
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let discovery = DiscoveryConfig {
            unverified_limit: or_default("DISCOVERY_UNVERIFIED_LIMIT", default_unverified_limit)?,
            verified_limit: optional("DISCOVERY_VERIFIED_LIMIT")?,
            default_page_size: or_default("DISCOVERY_DEFAULT_PAGE_SIZE", default_page_size)?,
            max_page_size: or_default("DISCOVERY_MAX_PAGE_SIZE", default_max_page_size)?,
        };
        discovery.validate()?;

        Ok(Self {
            app: AppSettings {
                name: var("APP_NAME").unwrap_or_else(default_app_name),
                env: var("APP_ENV")
                    .as_deref()
                    .and_then(Environment::parse)
                    .unwrap_or_default(),
            },
            server: ServerConfig {
                host: var("SERVER_HOST").unwrap_or_else(default_host),
                port: or_default("SERVER_PORT", default_port)?,
                request_timeout_secs: or_default("REQUEST_TIMEOUT_SECS", default_request_timeout)?,
            },
            database: DatabaseConfig {
                url: required("DATABASE_URL")?,
                max_connections: or_default("DATABASE_MAX_CONNECTIONS", default_max_connections)?,
                min_connections: or_default("DATABASE_MIN_CONNECTIONS", default_min_connections)?,
                auto_migrate: or_default("DATABASE_AUTO_MIGRATE", default_true)?,
            },
            identity: IdentityConfig::from_env()?,
            discovery,
            admin: AdminConfig {
                api_key: var("ADMIN_API_KEY").filter(|s| !s.trim().is_empty()),
            },
            rate_limit: RateLimitConfig {
                requests_per_second: or_default("RATE_LIMIT_PER_SECOND", default_requests_per_second)?,
                burst: or_default("RATE_LIMIT_BURST", default_burst)?,
            },
            cors: CorsConfig {
                allowed_origins: var("CORS_ALLOWED_ORIGINS")
                    .map(|s| {
                        s.split(',')
                            .map(str::trim)
                            .filter(|o| !o.is_empty())
                            .map(String::from)
                            .collect()
                    })
                    .unwrap_or_default(),
            },
        })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),

    #[error("Invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}
