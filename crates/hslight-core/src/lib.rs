//! # hslight Core
//!
//! Everything around the Haskell highlighter that a host needs to put it to
//! use:
//!
//! - [`Config`]: TOML settings (theme, color overrides, file extensions)
//! - [`FileTypeRegistry`]: routes files to the Haskell language by extension
//! - [`ColorScheme`]: resolves highlight keys to concrete colors

pub mod config;
pub mod registry;
pub mod scheme;

pub use config::{Config, ConfigError, FileConfig, HighlightConfig, Theme};
pub use registry::{FileTypeRegistry, RegistryError};
pub use scheme::{ColorScheme, Rgb, SchemeError};

/// Result type for core operations
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur in core operations
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("Registry error: {0}")]
    Registry(#[from] RegistryError),

    #[error("Color scheme error: {0}")]
    Scheme(#[from] SchemeError),
}

/// Settings resolved from a [`Config`], ready for highlighting.
#[derive(Debug)]
pub struct Session {
    pub config: Config,
    pub registry: FileTypeRegistry,
    pub scheme: ColorScheme,
}

impl Session {
    /// Validates a config and builds the registry and color scheme from it.
    pub fn from_config(config: Config) -> CoreResult<Self> {
        let registry = FileTypeRegistry::from_config(&config.files)?;
        let scheme = ColorScheme::from_config(&config)?;
        Ok(Self {
            config,
            registry,
            scheme,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hslight_syntax::HASKELL;

    #[test]
    fn test_session_from_default_config() {
        let session = Session::from_config(Config::default()).unwrap();
        assert_eq!(session.registry.language_for("Main.hs"), Some(&HASKELL));
        assert_eq!(session.scheme, ColorScheme::dark());
    }

    #[test]
    fn test_session_reports_scheme_errors() {
        let mut config = Config::default();
        config.colors.insert("HS_STRING".to_string(), "#12".to_string());
        let err = Session::from_config(config).unwrap_err();
        assert!(matches!(err, CoreError::Scheme(SchemeError::InvalidColor(_))));
    }

    #[test]
    fn test_session_reports_registry_errors() {
        let mut config = Config::default();
        config.files.extra_extensions.push(String::new());
        let err = Session::from_config(config).unwrap_err();
        assert!(matches!(err, CoreError::Registry(RegistryError::EmptyExtension)));
    }
}
