#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to parse config file '{path}': {message}")]
    ConfigParseError { path: String, message: String },

    #[error("Invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("Cannot locate config directory: {source}")]
    PathError {
        #[from]
        source: simulador_paths::PathError,
    },

    #[error("IO error reading config: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },
}

impl ConfigError {
    /// True when the error only means "there is no config file here".
    pub fn is_file_not_found(&self) -> bool {
        matches!(self, ConfigError::IoError { source } if source.kind() == std::io::ErrorKind::NotFound)
    }
}
