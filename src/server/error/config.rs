use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// A required environment variable is unset. `.env.example` lists every
    /// variable the server reads.
    #[error("Required environment variable {0} is not set")]
    MissingEnvVar(String),
}
