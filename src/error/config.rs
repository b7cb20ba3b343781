use thiserror::Error;

/// Errors raised while loading the application configuration from the
/// environment.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),
}
