use crate::feed::{FeedEntry, FeedError, FeedFetcher, ParsedFeed};

/// Fetches YouTube upload feeds over HTTP and parses the Atom documents.
#[derive(Debug, Clone, Default)]
pub struct AtomFeedClient {
    client: reqwest::Client,
}

impl AtomFeedClient {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

impl FeedFetcher for AtomFeedClient {
    type Error = FeedError;

    async fn fetch_feed(&self, feed_url: &str) -> Result<ParsedFeed, Self::Error> {
        let resp = self
            .client
            .get(feed_url)
            .header("Accept-Language", "en-US,en;q=0.9")
            .send()
            .await
            .inspect_err(|e| tracing::error!(error = %e, feed_url, "Failed to fetch feed"))?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let message = resp.text().await.unwrap_or_default();
            return Err(FeedError::Http { status, message });
        }

        let body = resp.bytes().await?;
        Ok(parse_feed_document(&body))
    }
}

/// Parses an Atom/RSS document into a [`ParsedFeed`].
///
/// A document `feed-rs` rejects yields `malformed: true` with no entries
/// rather than an error, so one broken feed never aborts a digest run.
pub fn parse_feed_document(document: &[u8]) -> ParsedFeed {
    let feed = match feed_rs::parser::parse(document) {
        Ok(feed) => feed,
        Err(e) => {
            tracing::debug!(error = %e, "Feed document did not parse");
            return ParsedFeed {
                malformed: true,
                ..Default::default()
            };
        }
    };

    let entries = feed
        .entries
        .into_iter()
        .map(|entry| {
            let link = entry.links.first().map(|l| l.href.clone());
            let video_id = entry
                .id
                .strip_prefix("yt:video:")
                .map(str::to_string)
                .or_else(|| link.as_deref().and_then(video_id_from_link));

            FeedEntry {
                title: entry.title.map(|t| t.content),
                link,
                video_id,
                published: entry.published,
            }
        })
        .collect();

    ParsedFeed {
        title: feed.title.map(|t| t.content).unwrap_or_default(),
        malformed: false,
        entries,
    }
}

/// Pulls the `v` query parameter out of a watch URL.
fn video_id_from_link(link: &str) -> Option<String> {
    let (_, query) = link.split_once('?')?;
    query.split('&').find_map(|pair| {
        pair.strip_prefix("v=")
            .filter(|id| !id.is_empty())
            .map(str::to_string)
    })
}
