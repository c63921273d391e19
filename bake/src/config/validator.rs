//! Configuration validation.

use crate::config::schema::{Config, ProcessConfig};
use crate::error::{Error, Result};

/// Validates a merged configuration.
///
/// # Examples
///
/// ```
/// use bake::config::{Config, ConfigValidator, ProcessConfig};
///
/// ConfigValidator::validate(&Config::default()).unwrap();
///
/// let config = Config {
///     process: Some(ProcessConfig { timeout_ms: Some(0), ..Default::default() }),
///     ..Default::default()
/// };
/// assert!(ConfigValidator::validate(&config).is_err());
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] for the first invalid field.
    pub fn validate(config: &Config) -> Result<()> {
        if let Some(ref process) = config.process {
            Self::validate_process(process)?;
        }
        Ok(())
    }

    fn validate_process(process: &ProcessConfig) -> Result<()> {
        if process.timeout_ms == Some(0) {
            return Err(Error::Validation {
                field: "process.timeout_ms".into(),
                message: "Timeout must be greater than 0".into(),
            });
        }

        for key in process.environment.iter().flat_map(|env| env.keys()) {
            if key.trim().is_empty() {
                return Err(Error::Validation {
                    field: "process.environment".into(),
                    message: "Variable names cannot be empty".into(),
                });
            }
            if key.contains(['=', '\0']) {
                return Err(Error::Validation {
                    field: "process.environment".into(),
                    message: format!("Variable name '{key}' cannot contain '=' or null bytes"),
                });
            }
        }

        Ok(())
    }
}
