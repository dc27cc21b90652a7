use std::sync::LazyLock;

use regex::Regex;

const CANONICAL_FEED_PATH: &str = "feeds/videos.xml";
const CHANNEL_FEED_BASE: &str = "https://www.youtube.com/feeds/videos.xml?channel_id=";

static CHANNEL_PAGE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"youtube\.com/channel/([^/]+)").unwrap());

/// Outcome of resolving a user-supplied channel reference.
///
/// Resolution never fails; a reference that cannot be turned into a feed
/// address is passed through unchanged and left to fail at fetch time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedFeed {
    /// The reference already was a feed address.
    FeedAddressDirect(String),
    /// A feed address constructed from a channel id, either extracted from
    /// a channel-page URL or supplied raw.
    ChannelIdConstructed(String),
    /// A URL form we cannot resolve automatically (e.g. an @handle URL).
    UnresolvedPassthrough(String),
}

impl ResolvedFeed {
    pub fn url(&self) -> &str {
        match self {
            ResolvedFeed::FeedAddressDirect(url)
            | ResolvedFeed::ChannelIdConstructed(url)
            | ResolvedFeed::UnresolvedPassthrough(url) => url,
        }
    }
}

/// Resolves a channel reference (raw channel id or URL) into a feed address.
///
/// Ordered heuristic, first match wins:
/// 1. already a feed address: returned unchanged
/// 2. `youtube.com/channel/<id>` page URL: feed address constructed from the id
/// 3. any other URL: passed through with a warning
/// 4. anything else: treated as a raw channel id
pub fn resolve_channel_reference(reference: &str) -> ResolvedFeed {
    let reference = reference.trim();

    if reference.contains(CANONICAL_FEED_PATH) {
        return ResolvedFeed::FeedAddressDirect(reference.to_string());
    }

    if let Some(captures) = CHANNEL_PAGE_RE.captures(reference) {
        let channel_id = &captures[1];
        return ResolvedFeed::ChannelIdConstructed(format!("{CHANNEL_FEED_BASE}{channel_id}"));
    }

    if reference.starts_with("http") {
        // Handle-based URLs can't be mapped to a feed without scraping.
        tracing::warn!(
            reference,
            "Automatic feed discovery may not work for this URL; use a channel id or feed address"
        );
        return ResolvedFeed::UnresolvedPassthrough(reference.to_string());
    }

    ResolvedFeed::ChannelIdConstructed(format!("{CHANNEL_FEED_BASE}{reference}"))
}
