use chrono::{DateTime, Duration, Utc};

use crate::feed::ParsedFeed;

/// Trailing window a video must fall in to make the digest.
pub const FRESHNESS_WINDOW_HOURS: i64 = 24;

const WATCH_URL_BASE: &str = "https://www.youtube.com/watch?v=";

/// A feed entry that passed the freshness filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoEntry {
    pub title: String,
    pub link: String,
    pub video_id: String,
    pub published: DateTime<Utc>,
    pub channel_title: String,
}

/// Selects the entries of `feed` published strictly after
/// `now - FRESHNESS_WINDOW_HOURS`, preserving feed order.
///
/// `now` is captured once by the caller so a single window covers every
/// entry of the feed. A malformed feed contributes no entries. Entries
/// without a publish timestamp or a video id are dropped silently.
pub fn filter_fresh(feed: &ParsedFeed, now: DateTime<Utc>) -> Vec<VideoEntry> {
    if feed.malformed {
        tracing::warn!(feed_title = %feed.title, "Skipping malformed feed document");
        return Vec::new();
    }

    let cutoff = now - Duration::hours(FRESHNESS_WINDOW_HOURS);

    feed.entries
        .iter()
        .filter_map(|entry| {
            let published = entry.published?;
            if published <= cutoff {
                return None;
            }
            let video_id = match &entry.video_id {
                Some(id) => id.clone(),
                None => {
                    tracing::debug!(title = ?entry.title, "Dropping fresh entry without a video id");
                    return None;
                }
            };

            Some(VideoEntry {
                title: entry.title.clone().unwrap_or_else(|| video_id.clone()),
                link: entry
                    .link
                    .clone()
                    .unwrap_or_else(|| format!("{WATCH_URL_BASE}{video_id}")),
                video_id,
                published,
                channel_title: feed.title.clone(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feed::FeedEntry;
    use chrono::TimeZone;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap()
    }

    fn entry(video_id: &str, published: Option<DateTime<Utc>>) -> FeedEntry {
        FeedEntry {
            title: Some(format!("Video {video_id}")),
            link: Some(format!("https://www.youtube.com/watch?v={video_id}")),
            video_id: Some(video_id.to_string()),
            published,
        }
    }

    fn feed(entries: Vec<FeedEntry>) -> ParsedFeed {
        ParsedFeed {
            title: "Test Channel".to_string(),
            malformed: false,
            entries,
        }
    }

    #[test]
    fn test_entry_inside_window_is_included() {
        let now = fixed_now();
        let fresh = filter_fresh(
            &feed(vec![entry("a", Some(now - Duration::hours(2)))]),
            now,
        );
        assert_eq!(fresh.len(), 1);
        assert_eq!(fresh[0].video_id, "a");
        assert_eq!(fresh[0].channel_title, "Test Channel");
    }

    #[test]
    fn test_entry_outside_window_is_excluded() {
        let now = fixed_now();
        let fresh = filter_fresh(
            &feed(vec![entry("a", Some(now - Duration::hours(30)))]),
            now,
        );
        assert!(fresh.is_empty());
    }

    #[test]
    fn test_entry_exactly_at_cutoff_is_excluded() {
        let now = fixed_now();
        let at_cutoff = now - Duration::hours(FRESHNESS_WINDOW_HOURS);
        assert!(filter_fresh(&feed(vec![entry("a", Some(at_cutoff))]), now).is_empty());

        let just_inside = at_cutoff + Duration::seconds(1);
        assert_eq!(
            filter_fresh(&feed(vec![entry("a", Some(just_inside))]), now).len(),
            1
        );
    }

    #[test]
    fn test_entry_without_timestamp_is_dropped_silently() {
        let now = fixed_now();
        let fresh = filter_fresh(
            &feed(vec![
                entry("a", None),
                entry("b", Some(now - Duration::hours(1))),
            ]),
            now,
        );
        assert_eq!(fresh.len(), 1);
        assert_eq!(fresh[0].video_id, "b");
    }

    #[test]
    fn test_entry_without_video_id_is_dropped() {
        let now = fixed_now();
        let mut no_id = entry("unused", Some(now - Duration::hours(1)));
        no_id.video_id = None;
        assert!(filter_fresh(&feed(vec![no_id]), now).is_empty());
    }

    #[test]
    fn test_malformed_feed_yields_no_entries() {
        let now = fixed_now();
        let malformed = ParsedFeed {
            malformed: true,
            ..feed(vec![entry("a", Some(now - Duration::hours(1)))])
        };
        assert!(filter_fresh(&malformed, now).is_empty());
    }

    #[test]
    fn test_feed_order_is_preserved() {
        let now = fixed_now();
        let fresh = filter_fresh(
            &feed(vec![
                entry("first", Some(now - Duration::hours(3))),
                entry("second", Some(now - Duration::hours(1))),
                entry("third", Some(now - Duration::hours(2))),
            ]),
            now,
        );
        let ids: Vec<_> = fresh.iter().map(|v| v.video_id.as_str()).collect();
        assert_eq!(ids, ["first", "second", "third"]);
    }

    #[test]
    fn test_missing_title_and_link_fall_back() {
        let now = fixed_now();
        let bare = FeedEntry {
            title: None,
            link: None,
            video_id: Some("xyz".to_string()),
            published: Some(now - Duration::hours(1)),
        };
        let fresh = filter_fresh(&feed(vec![bare]), now);
        assert_eq!(fresh[0].title, "xyz");
        assert_eq!(fresh[0].link, "https://www.youtube.com/watch?v=xyz");
    }
}
