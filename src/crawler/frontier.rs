//! FIFO crawl frontier with a visited set
//!
//! The frontier drives breadth-first traversal: URLs are popped in the order
//! they were pushed, and each URL is handed out at most once. The visited set
//! is keyed by the exact URL string.

use std::collections::{HashSet, VecDeque};

/// Pending URLs plus everything already handed out
#[derive(Debug, Default)]
pub struct Frontier {
    /// URLs waiting to be visited, oldest first
    queue: VecDeque<String>,

    /// URLs already popped, whether or not their download succeeded
    visited: HashSet<String>,
}

impl Frontier {
    /// Creates a frontier seeded with one URL
    pub fn new(seed: impl Into<String>) -> Self {
        let mut frontier = Self::default();
        frontier.queue.push_back(seed.into());
        frontier
    }

    /// Enqueues a URL unless it was already visited
    ///
    /// Returns true if the URL was enqueued. A URL still waiting in the queue
    /// may be enqueued again; the duplicate is dropped when popped.
    pub fn push(&mut self, url: String) -> bool {
        if self.visited.contains(&url) {
            return false;
        }
        self.queue.push_back(url);
        true
    }

    /// Pops the oldest URL not yet visited and marks it visited
    pub fn pop_unvisited(&mut self) -> Option<String> {
        while let Some(url) = self.queue.pop_front() {
            if self.visited.insert(url.clone()) {
                return Some(url);
            }
        }
        None
    }

    #[cfg(test)]
    pub fn is_visited(&self, url: &str) -> bool {
        self.visited.contains(url)
    }

    /// Number of queued entries, duplicates included
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Number of distinct URLs handed out so far
    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }
}
