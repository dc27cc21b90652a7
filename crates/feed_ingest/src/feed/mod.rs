pub mod atom;

use std::{fmt::Debug, future::Future};

use chrono::{DateTime, Utc};

/// Fetches a channel's upload feed and hands back its parsed form.
///
/// A document that fetches but does not parse is reported through the
/// `malformed` flag on [`ParsedFeed`], not as an error; only transport
/// failures surface as `Err`.
pub trait FeedFetcher {
    type Error: Debug;

    fn fetch_feed(
        &self,
        feed_url: &str,
    ) -> impl Future<Output = Result<ParsedFeed, Self::Error>> + Send;
}

#[derive(Debug, Clone, Default)]
pub struct ParsedFeed {
    pub title: String,
    pub malformed: bool,
    pub entries: Vec<FeedEntry>,
}

/// One raw feed entry. Every field is optional; the freshness filter
/// decides what an entry must carry to become a [`crate::VideoEntry`].
#[derive(Debug, Clone, Default)]
pub struct FeedEntry {
    pub title: Option<String>,
    pub link: Option<String>,
    pub video_id: Option<String>,
    pub published: Option<DateTime<Utc>>,
}

#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    #[error("HTTP error: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Feed request failed: {status} - {message}")]
    Http { status: u16, message: String },
}
