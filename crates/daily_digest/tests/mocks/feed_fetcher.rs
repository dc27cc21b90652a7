use std::{
    collections::{HashMap, HashSet},
    sync::{Arc, Mutex},
};

use feed_ingest::{FeedFetcher, ParsedFeed};

#[derive(Clone, Default)]
pub struct MockFeedFetcher {
    feeds: HashMap<String, ParsedFeed>,
    failing: HashSet<String>,
    pub calls: Arc<Mutex<Vec<String>>>,
}

impl MockFeedFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_feed(mut self, feed_url: impl Into<String>, feed: ParsedFeed) -> Self {
        self.feeds.insert(feed_url.into(), feed);
        self
    }

    pub fn with_failing(mut self, feed_url: impl Into<String>) -> Self {
        self.failing.insert(feed_url.into());
        self
    }
}

impl FeedFetcher for MockFeedFetcher {
    type Error = anyhow::Error;

    async fn fetch_feed(&self, feed_url: &str) -> anyhow::Result<ParsedFeed> {
        self.calls.lock().unwrap().push(feed_url.to_string());
        if self.failing.contains(feed_url) {
            return Err(anyhow::anyhow!("Connection refused: {feed_url}"));
        }
        self.feeds
            .get(feed_url)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("No canned feed for {feed_url}"))
    }
}
