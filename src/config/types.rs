use serde::Deserialize;

/// Main configuration structure for Ripple-Search
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub crawler: CrawlerConfig,
    #[serde(rename = "user-agent")]
    pub user_agent: UserAgentConfig,
    pub index: IndexConfig,
    #[serde(default)]
    pub stopwords: Option<StopwordsConfig>,
}

/// Crawl boundary configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CrawlerConfig {
    /// URL the breadth-first crawl starts from; also fixes the host scope
    #[serde(rename = "start-url")]
    pub start_url: String,

    /// Maximum number of pages emitted by the crawl
    #[serde(rename = "max-pages")]
    pub max_pages: usize,
}

/// User agent identification configuration
#[derive(Debug, Clone, Deserialize)]
pub struct UserAgentConfig {
    /// Name of the crawler
    #[serde(rename = "crawler-name")]
    pub crawler_name: String,

    /// Version of the crawler
    #[serde(rename = "crawler-version")]
    pub crawler_version: String,
}

/// Which index backend to build
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BackendKind {
    /// Volatile maps, lost when the process exits
    InMemory,
    /// SQLite database at `database-path`
    Persisted,
}

/// Index backend configuration
#[derive(Debug, Clone, Deserialize)]
pub struct IndexConfig {
    pub backend: BackendKind,

    /// Path to the SQLite database file (persisted backend only)
    #[serde(rename = "database-path", default)]
    pub database_path: Option<String>,
}

/// Optional stopword override. `words` and `file` are mutually exclusive.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StopwordsConfig {
    #[serde(default)]
    pub words: Option<Vec<String>>,

    #[serde(default)]
    pub file: Option<String>,
}
