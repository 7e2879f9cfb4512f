use std::env;
use std::fmt;

use auth::JwtError;
use auth::TokenSettings;
use config::Config as ConfigBuilder;
use config::ConfigError;
use config::Environment;
use config::File;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    pub server: ServerConfig,
    pub jwt: JwtConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub http_port: u16,
}

#[derive(Deserialize, Clone)]
pub struct JwtConfig {
    #[serde(default)]
    pub secret: String,
    #[serde(default = "default_algorithm")]
    pub algorithm: String,
    #[serde(default = "default_expiration_minutes")]
    pub expiration_minutes: u32,
}

impl fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret", &"<redacted>")
            .field("algorithm", &self.algorithm)
            .field("expiration_minutes", &self.expiration_minutes)
            .finish()
    }
}

fn default_max_connections() -> u32 {
    5
}

fn default_algorithm() -> String {
    TokenSettings::DEFAULT_ALGORITHM.to_string()
}

fn default_expiration_minutes() -> u32 {
    30
}

impl Config {
    /// Load configuration from files with environment variable overrides
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (DATABASE__URL, JWT__SECRET, etc.)
    /// 2. Environment-specific config file (config/{environment}.toml)
    /// 3. Default config file (config/default.toml)
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let configuration = ConfigBuilder::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Example: JWT__EXPIRATION_MINUTES=60 overrides jwt.expiration_minutes
            .add_source(Environment::with_prefix("").separator("__"))
            .build()?;

        configuration.try_deserialize()
    }

    /// Token signing settings derived from the `jwt` section.
    ///
    /// # Errors
    /// * `EmptySecret` - No signing secret configured
    /// * `UnsupportedAlgorithm` - Algorithm is not HS256, HS384 or HS512
    /// * `InvalidLifetime` - Expiration is zero minutes
    pub fn token_settings(&self) -> Result<TokenSettings, JwtError> {
        TokenSettings::new(
            self.jwt.secret.as_bytes(),
            &self.jwt.algorithm,
            chrono::Duration::minutes(i64::from(self.jwt.expiration_minutes)),
        )
    }
}
