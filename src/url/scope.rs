use url::Url;

/// The `scheme://host[:port]/` prefix every crawled URL must share
///
/// Built from the crawl's start URL. Only the prefix is compared: paths,
/// queries and the start URL's own path play no part.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostScope {
    prefix: String,
}

impl HostScope {
    /// Builds the scope for a start URL
    ///
    /// # Returns
    ///
    /// * `Some(HostScope)` - The start URL has a host
    /// * `None` - The start URL has no host (e.g. `mailto:`)
    ///
    /// # Examples
    ///
    /// ```
    /// use url::Url;
    /// use ripple_search::url::HostScope;
    ///
    /// let start = Url::parse("http://example.com:8080/docs/index.html").unwrap();
    /// let scope = HostScope::new(&start).unwrap();
    /// assert_eq!(scope.prefix(), "http://example.com:8080/");
    /// assert!(scope.contains("http://example.com:8080/other"));
    /// assert!(!scope.contains("http://example.com/other"));
    /// ```
    pub fn new(start: &Url) -> Option<Self> {
        let host = start.host_str()?;
        let prefix = match start.port() {
            Some(port) => format!("{}://{}:{}/", start.scheme(), host, port),
            None => format!("{}://{}/", start.scheme(), host),
        };
        Some(Self { prefix })
    }

    /// True if `url` shares this scope's scheme and host
    pub fn contains(&self, url: &str) -> bool {
        url.starts_with(&self.prefix)
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }
}
