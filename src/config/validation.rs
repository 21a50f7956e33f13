use crate::collector::LinkFilter;
use crate::config::types::{Config, DocumentConfig, FilterConfig, OutputConfig};
use crate::ConfigError;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_document_config(&config.document)?;
    validate_filter_config(&config.filter)?;
    validate_output_config(&config.output)?;
    Ok(())
}

/// Validates the document base URL
fn validate_document_config(config: &DocumentConfig) -> Result<(), ConfigError> {
    if let Some(base_url) = &config.base_url {
        Url::parse(base_url).map_err(|e| {
            ConfigError::InvalidUrl(format!("Invalid base-url '{}': {}", base_url, e))
        })?;
    }
    Ok(())
}

/// Validates that both filter patterns compile
fn validate_filter_config(config: &FilterConfig) -> Result<(), ConfigError> {
    LinkFilter::try_from(config).map(|_| ())
}

/// Validates output configuration
fn validate_output_config(config: &OutputConfig) -> Result<(), ConfigError> {
    if config.path.as_deref().is_some_and(|path| path.trim().is_empty()) {
        return Err(ConfigError::Validation(
            "output path cannot be empty".to_string(),
        ));
    }
    Ok(())
}
