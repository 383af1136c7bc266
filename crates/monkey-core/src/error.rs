use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("No monkey data available.")]
    EmptyData,

    #[error("Data source '{source_name}' failed: {message}")]
    Fetch { source_name: String, message: String },

    #[error("Data source unavailable: {0}")]
    SourceUnavailable(String),

    #[error("Load cancelled")]
    Cancelled,

    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
}

pub type Result<T> = std::result::Result<T, CatalogError>;

impl CatalogError {
    /// Shorthand for a failed fetch attributed to the named data source.
    pub fn fetch(source_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Fetch {
            source_name: source_name.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fetch_error_names_the_source() {
        let err = CatalogError::fetch("seed", "disk on fire");
        assert_eq!(err.to_string(), "Data source 'seed' failed: disk on fire");
        assert!(matches!(err, CatalogError::Fetch { ref source_name, .. } if source_name == "seed"));
    }

    #[test]
    fn empty_data_uses_the_user_facing_message() {
        assert_eq!(CatalogError::EmptyData.to_string(), "No monkey data available.");
        assert_eq!(
            CatalogError::InvalidArgument("name".into()).to_string(),
            "Invalid argument: name"
        );
    }
}
