use std::error::Error;

/// Base trait for all application errors
pub trait SimuladorError: Error + Send + Sync + 'static {
    /// Error code for programmatic handling
    fn error_code(&self) -> &'static str;

    /// Whether this error should be logged as an error or warning
    fn is_user_error(&self) -> bool {
        false
    }
}

/// Common result type for the application
pub type SimuladorResult<T> = Result<T, Box<dyn SimuladorError>>;

impl SimuladorError for simulador_paths::PathError {
    fn error_code(&self) -> &'static str {
        match self {
            simulador_paths::PathError::HomeNotFound => "HOME_NOT_FOUND",
        }
    }
}

impl SimuladorError for simulador_config::ConfigError {
    fn error_code(&self) -> &'static str {
        match self {
            simulador_config::ConfigError::ConfigParseError { .. } => "CONFIG_PARSE_ERROR",
            simulador_config::ConfigError::InvalidConfiguration { .. } => "INVALID_CONFIGURATION",
            simulador_config::ConfigError::PathError { .. } => "CONFIG_PATH_ERROR",
            simulador_config::ConfigError::IoError { .. } => "CONFIG_IO_ERROR",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(
            self,
            simulador_config::ConfigError::ConfigParseError { .. }
                | simulador_config::ConfigError::InvalidConfiguration { .. }
        )
    }
}
