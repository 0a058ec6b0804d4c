//! Application configuration loaded from environment variables.
//!
//! The secret key is used for both password hashing and token signing in
//! this MVP. Provide a strong value in any deployment that matters.

use std::env;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Application name, also used as the token issuer claim
    pub app_name: String,
    /// Environment name (development, production, ...)
    pub environment: String,
    /// Allowed CORS origins ("*" allows any origin)
    pub cors_origins: Vec<String>,
    /// Secret key for password hashing and token signing
    pub secret_key: String,
    /// Access token expiry in minutes
    pub access_token_expire_minutes: i64,
    /// Server port
    pub port: u16,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Every setting has a development default; nothing is strictly
    /// required, which keeps local bring-up to a single command.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        Ok(Self {
            app_name: env::var("APP_NAME").unwrap_or_else(|_| "Carpool Backend API".to_string()),
            environment: env::var("ENV").unwrap_or_else(|_| "development".to_string()),
            cors_origins: env::var("CORS_ORIGINS")
                .unwrap_or_else(|_| "*".to_string())
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
            secret_key: env::var("SECRET_KEY").unwrap_or_else(|_| "dev-secret-key".to_string()),
            access_token_expire_minutes: env::var("ACCESS_TOKEN_EXPIRE_MINUTES")
                .unwrap_or_else(|_| "60".to_string())
                .parse()
                .map_err(|_| ConfigError::Invalid("ACCESS_TOKEN_EXPIRE_MINUTES"))?,
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .unwrap_or(8080),
        })
    }

    /// Default config for testing only.
    pub fn test_default() -> Self {
        Self {
            app_name: "Carpool Backend API".to_string(),
            environment: "test".to_string(),
            cors_origins: vec!["*".to_string()],
            secret_key: "test-secret-key".to_string(),
            access_token_expire_minutes: 60,
            port: 8080,
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable: {0}")]
    Invalid(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        env::remove_var("APP_NAME");
        env::remove_var("ACCESS_TOKEN_EXPIRE_MINUTES");

        let config = Config::from_env().expect("Config should load");

        assert_eq!(config.app_name, "Carpool Backend API");
        assert_eq!(config.access_token_expire_minutes, 60);
        assert_eq!(config.port, 8080);
    }

    #[test]
    fn test_cors_origins_split() {
        env::set_var("CORS_ORIGINS", "http://a.example, http://b.example");
        let config = Config::from_env().expect("Config should load");
        env::remove_var("CORS_ORIGINS");

        assert_eq!(
            config.cors_origins,
            vec!["http://a.example".to_string(), "http://b.example".to_string()]
        );
    }
}
