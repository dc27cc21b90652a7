//! # Feed Ingest Module
//!
//! This module provides functionality for turning user-supplied channel
//! references into fetchable YouTube upload feed addresses and for selecting
//! the feed entries published within the trailing freshness window.
//!
//! Feed fetching sits behind the `FeedFetcher` seam so the digest pipeline
//! can be driven against canned feeds in tests.

mod feed;
mod freshness;
mod resolver;

pub use feed::atom::AtomFeedClient;
pub use feed::{FeedEntry, FeedError, FeedFetcher, ParsedFeed};
pub use freshness::{filter_fresh, VideoEntry, FRESHNESS_WINDOW_HOURS};
pub use resolver::{resolve_channel_reference, ResolvedFeed};
