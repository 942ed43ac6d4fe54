use crate::config::types::{
    BackendKind, Config, CrawlerConfig, IndexConfig, StopwordsConfig, UserAgentConfig,
};
use crate::ConfigError;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_crawler_config(&config.crawler)?;
    validate_user_agent_config(&config.user_agent)?;
    validate_index_config(&config.index)?;
    if let Some(stopwords) = &config.stopwords {
        validate_stopwords_config(stopwords)?;
    }
    Ok(())
}

/// Validates crawler configuration
///
/// `max_pages = 0` is allowed and produces an empty crawl.
fn validate_crawler_config(config: &CrawlerConfig) -> Result<(), ConfigError> {
    let url = Url::parse(&config.start_url).map_err(|e| {
        ConfigError::InvalidUrl(format!("Invalid start-url '{}': {}", config.start_url, e))
    })?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::Validation(format!(
            "start-url '{}' must use http or https",
            config.start_url
        )));
    }

    if url.host_str().is_none() {
        return Err(ConfigError::InvalidUrl(format!(
            "start-url '{}' has no host",
            config.start_url
        )));
    }

    Ok(())
}

/// Validates user agent configuration
fn validate_user_agent_config(config: &UserAgentConfig) -> Result<(), ConfigError> {
    if config.crawler_name.is_empty() {
        return Err(ConfigError::Validation(
            "crawler_name cannot be empty".to_string(),
        ));
    }

    if !config
        .crawler_name
        .chars()
        .all(|c| c.is_alphanumeric() || c == '-')
    {
        return Err(ConfigError::Validation(format!(
            "crawler_name must contain only alphanumeric characters and hyphens, got '{}'",
            config.crawler_name
        )));
    }

    if config.crawler_version.trim().is_empty() {
        return Err(ConfigError::Validation(
            "crawler_version cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// Validates index backend configuration
fn validate_index_config(config: &IndexConfig) -> Result<(), ConfigError> {
    match config.backend {
        BackendKind::InMemory => Ok(()),
        BackendKind::Persisted => match config.database_path.as_deref() {
            Some(path) if !path.trim().is_empty() => Ok(()),
            _ => Err(ConfigError::Validation(
                "database_path is required for the persisted backend".to_string(),
            )),
        },
    }
}

/// Validates the optional stopword override
fn validate_stopwords_config(config: &StopwordsConfig) -> Result<(), ConfigError> {
    match (&config.words, &config.file) {
        (Some(_), Some(_)) => Err(ConfigError::Validation(
            "stopwords.words and stopwords.file are mutually exclusive".to_string(),
        )),
        (None, Some(file)) if file.trim().is_empty() => Err(ConfigError::Validation(
            "stopwords.file cannot be empty".to_string(),
        )),
        _ => Ok(()),
    }
}
