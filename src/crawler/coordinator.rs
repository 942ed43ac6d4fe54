//! Crawler coordinator - breadth-first crawl and index construction
//!
//! This module contains the crawl loop and the crawl-then-index pipeline:
//! - `crawl` walks the start URL's host breadth-first and returns the visit order
//! - `index_urls` downloads each page and feeds its words to an index backend
//! - `Coordinator` ties both to a configuration and one selected backend
//!
//! Downloads run strictly one at a time. Fetch failures are logged and
//! skipped; index backend failures abort the run.

use crate::config::{load_stopwords, Config};
use crate::crawler::{build_http_client, download, extract, Frontier};
use crate::index::{open_index, Hit, SearchIndex};
use crate::url::{clean_href, HostScope};
use crate::{CrawlError, Result};
use chrono::{DateTime, Utc};
use reqwest::Client;
use std::time::{Duration, Instant};
use url::Url;

/// Outcome of indexing a list of URLs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IndexReport {
    /// Pages downloaded and handed to the backend
    pub indexed: usize,

    /// Pages skipped because their download failed
    pub failed: usize,
}

/// Summary of one `Coordinator::run`
#[derive(Debug, Clone)]
pub struct CrawlSummary {
    pub started_at: DateTime<Utc>,

    /// URLs emitted by the crawl, failed downloads included
    pub pages_crawled: usize,

    pub pages_indexed: usize,
    pub pages_failed: usize,
    pub elapsed: Duration,
}

/// Crawls breadth-first from `start`, staying on its scheme and host
///
/// Returns the URLs in visit order, at most `max_pages` of them. Every popped
/// URL is emitted, even when its download fails; such a page just contributes
/// no links. Links are resolved against the page they appear on.
///
/// # Arguments
///
/// * `client` - The HTTP client to use
/// * `start` - The seed URL, emitted verbatim as the first entry
/// * `max_pages` - Upper bound on the number of URLs returned
///
/// # Returns
///
/// * `Ok(Vec<String>)` - The visit order (empty when `max_pages` is 0)
/// * `Err(CrawlError)` - The start URL could not be parsed or has no host
pub async fn crawl(
    client: &Client,
    start: &str,
    max_pages: usize,
) -> std::result::Result<Vec<String>, CrawlError> {
    if max_pages == 0 {
        return Ok(Vec::new());
    }

    let start_url = Url::parse(start).map_err(|source| CrawlError::InvalidStartUrl {
        url: start.to_string(),
        source,
    })?;
    let scope =
        HostScope::new(&start_url).ok_or_else(|| CrawlError::MissingHost(start.to_string()))?;

    tracing::info!("Starting crawl at {} (scope {}, max {} pages)", start, scope.prefix(), max_pages);

    let mut frontier = Frontier::new(start);
    let mut order = Vec::with_capacity(max_pages);
    let started = Instant::now();

    while order.len() < max_pages {
        let Some(current) = frontier.pop_unvisited() else {
            tracing::info!("Frontier is empty, crawl complete");
            break;
        };
        order.push(current.clone());
        tracing::debug!("Visiting {}", current);

        match download(client, &current).await {
            Ok(body) => {
                let enqueued = enqueue_links(&mut frontier, &scope, &current, &body);
                tracing::debug!("{} links enqueued from {}", enqueued, current);
            }
            Err(e) => tracing::warn!("Skipping {}: {}", current, e),
        }

        if frontier.visited_count() % 10 == 0 {
            let rate =
                frontier.visited_count() as f64 / started.elapsed().as_secs_f64().max(f64::EPSILON);
            tracing::info!(
                "Progress: {} pages crawled, {} in frontier, {:.2} pages/sec",
                frontier.visited_count(),
                frontier.pending(),
                rate
            );
        }
    }

    tracing::info!("Crawl finished: {} pages in {:?}", order.len(), started.elapsed());
    Ok(order)
}

/// Pushes the in-scope links of one downloaded page onto the frontier
///
/// Hrefs are resolved against `current`, the page they appear on. Returns the
/// number of URLs actually enqueued.
fn enqueue_links(frontier: &mut Frontier, scope: &HostScope, current: &str, body: &[u8]) -> usize {
    let extraction = extract(body);
    let mut enqueued = 0usize;
    for href in extraction.hrefs() {
        let Some(absolute) = clean_href(current, href) else {
            continue;
        };
        if !scope.contains(&absolute) {
            tracing::debug!("Out of scope: {}", absolute);
            continue;
        }
        if frontier.push(absolute) {
            enqueued += 1;
        }
    }
    enqueued
}

/// Downloads each URL in order and adds its words to `index`
///
/// Download failures are counted and skipped. A backend error stops the run
/// and is returned to the caller.
pub async fn index_urls(
    client: &Client,
    urls: &[String],
    index: &mut dyn SearchIndex,
) -> Result<IndexReport> {
    let mut report = IndexReport::default();

    for url in urls {
        let body = match download(client, url).await {
            Ok(body) => body,
            Err(e) => {
                tracing::warn!("Not indexing {}: {}", url, e);
                report.failed += 1;
                continue;
            }
        };

        let (words, _) = extract(&body).into_parts();
        index.add_document(url, &words)?;
        report.indexed += 1;

        if report.indexed % 10 == 0 {
            tracing::info!("Indexed {} of {} pages", report.indexed, urls.len());
        }
    }

    tracing::info!(
        "Indexing finished: {} indexed, {} failed",
        report.indexed,
        report.failed
    );
    Ok(report)
}

/// Main coordinator structure
pub struct Coordinator {
    config: Config,
    client: Client,
    index: Box<dyn SearchIndex>,
}

impl Coordinator {
    /// Creates a coordinator around an already opened backend
    ///
    /// # Arguments
    ///
    /// * `config` - The validated configuration
    /// * `index` - The backend pages are indexed into
    ///
    /// # Returns
    ///
    /// * `Ok(Coordinator)` - Ready to run
    /// * `Err(RippleError)` - The HTTP client could not be built
    pub fn new(config: Config, index: Box<dyn SearchIndex>) -> Result<Self> {
        let client = build_http_client(&config.user_agent).map_err(CrawlError::Client)?;
        Ok(Self {
            config,
            client,
            index,
        })
    }

    /// Creates a coordinator with the stopwords and backend the configuration selects
    pub fn from_config(config: Config) -> Result<Self> {
        let stopwords = load_stopwords(&config)?;
        let index = open_index(&config.index, stopwords)?;
        Self::new(config, index)
    }

    /// Crawls from the configured start URL, then indexes every crawled page
    pub async fn run(&mut self) -> Result<CrawlSummary> {
        let started_at = Utc::now();
        let started = Instant::now();

        let urls = crawl(
            &self.client,
            &self.config.crawler.start_url,
            self.config.crawler.max_pages,
        )
        .await?;

        let report = index_urls(&self.client, &urls, self.index.as_mut()).await?;

        let summary = CrawlSummary {
            started_at,
            pages_crawled: urls.len(),
            pages_indexed: report.indexed,
            pages_failed: report.failed,
            elapsed: started.elapsed(),
        };

        tracing::info!(
            "Run completed: {} crawled, {} indexed, {} failed in {:?}",
            summary.pages_crawled,
            summary.pages_indexed,
            summary.pages_failed,
            summary.elapsed
        );

        Ok(summary)
    }

    /// Answers a single-term query against the backend
    pub fn search(&self, term: &str) -> Result<Vec<Hit>> {
        Ok(self.index.search(term)?)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn index(&self) -> &dyn SearchIndex {
        self.index.as_ref()
    }

    /// Gives up the coordinator, keeping the backend
    pub fn into_index(self) -> Box<dyn SearchIndex> {
        self.index
    }
}
