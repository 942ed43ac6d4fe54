use crate::analysis::Stopwords;
use crate::config::types::Config;
use crate::config::validation::validate;
use crate::ConfigError;
use sha2::{Digest, Sha256};
use std::path::Path;

/// Loads and parses a configuration file from the given path
///
/// # Arguments
///
/// * `path` - Path to the TOML configuration file
///
/// # Returns
///
/// * `Ok(Config)` - Successfully loaded and validated configuration
/// * `Err(ConfigError)` - Failed to load, parse, or validate the configuration
///
/// # Example
///
/// ```no_run
/// use std::path::Path;
/// use ripple_search::config::load_config;
///
/// let config = load_config(Path::new("ripple.toml")).unwrap();
/// println!("Start URL: {}", config.crawler.start_url);
/// ```
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    validate(&config)?;
    Ok(config)
}

/// SHA-256 of the configuration file's bytes, hex encoded
///
/// Logged at startup so runs against one persisted index can be traced back
/// to the configuration that produced them.
pub fn compute_config_hash(path: &Path) -> Result<String, ConfigError> {
    let content = std::fs::read(path)?;
    let mut hasher = Sha256::new();
    hasher.update(&content);
    Ok(hex::encode(hasher.finalize()))
}

/// Loads a configuration together with its hash
pub fn load_config_with_hash(path: &Path) -> Result<(Config, String), ConfigError> {
    let config = load_config(path)?;
    let hash = compute_config_hash(path)?;
    Ok((config, hash))
}

/// Builds the stopword set selected by the configuration
///
/// Falls back to the built-in English list when no `[stopwords]` section is
/// present. A stopword file holds one word per line; blank lines and lines
/// starting with `#` are ignored.
pub fn load_stopwords(config: &Config) -> Result<Stopwords, ConfigError> {
    let Some(section) = &config.stopwords else {
        return Ok(Stopwords::default());
    };

    if let Some(words) = &section.words {
        return Ok(Stopwords::from_words(words));
    }

    if let Some(file) = &section.file {
        let content = std::fs::read_to_string(file)?;
        let words = content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'));
        return Ok(Stopwords::from_words(words));
    }

    Ok(Stopwords::default())
}
