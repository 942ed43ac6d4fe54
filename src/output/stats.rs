//! Statistics and run summary printing
//!
//! This module renders index statistics and crawl summaries for the
//! command line.

use crate::crawler::CrawlSummary;
use crate::index::IndexStats;

/// Renders index statistics as a plain-text report
pub fn format_statistics(stats: &IndexStats) -> String {
    // Average distinct terms per document
    let density = if stats.documents > 0 {
        stats.postings as f64 / stats.documents as f64
    } else {
        0.0
    };

    let lines = [
        "=== Index Statistics ===\n".to_string(),
        format!("  Documents: {}", stats.documents),
        format!("  Terms: {}", stats.terms),
        format!("  Postings: {}", stats.postings),
        format!("  Distinct terms per document: {:.1}", density),
    ];
    render(&lines)
}

/// Prints index statistics to stdout
pub fn print_statistics(stats: &IndexStats) {
    print!("{}", format_statistics(stats));
}

/// Renders a crawl summary as a plain-text report
pub fn format_summary(summary: &CrawlSummary) -> String {
    let success_rate = if summary.pages_crawled > 0 {
        (summary.pages_indexed as f64 / summary.pages_crawled as f64) * 100.0
    } else {
        0.0
    };

    let lines = [
        "=== Crawl Summary ===\n".to_string(),
        format!(
            "  Started: {}",
            summary.started_at.format("%Y-%m-%d %H:%M:%S UTC")
        ),
        format!("  Duration: {:.2}s", summary.elapsed.as_secs_f64()),
        format!("  Pages crawled: {}", summary.pages_crawled),
        format!("  Pages indexed: {}", summary.pages_indexed),
        format!("  Pages failed: {}", summary.pages_failed),
        format!(
            "  Success Rate: {:.1}% ({} / {} pages indexed)",
            success_rate, summary.pages_indexed, summary.pages_crawled
        ),
    ];

    render(&lines)
}

/// Joins report lines, ending with a newline
fn render(lines: &[String]) -> String {
    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// Prints a crawl summary to stdout
pub fn print_summary(summary: &CrawlSummary) {
    print!("{}", format_summary(summary));
}
