use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is not set.
    ///
    /// The application requires this environment variable to be defined. Check
    /// `.env.example` for required configuration variables.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// Environment variable is set but cannot be used.
    #[error("Invalid value {value:?} for {var}: {reason}")]
    InvalidValue {
        /// Variable name
        var: String,
        /// Value as read from the environment
        value: String,
        /// What was expected instead
        reason: String,
    },

    /// A rate limit quota could not be turned into a governor configuration.
    #[error("Invalid rate limit of {0} requests per minute")]
    InvalidRateLimit(u32),
}
