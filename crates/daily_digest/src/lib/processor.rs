pub mod builder;

use chrono::Utc;
use feed_ingest::{filter_fresh, resolve_channel_reference, FeedFetcher, VideoEntry};
use itertools::Itertools;

use crate::{
    delivery::{DeliveryOutcome, DigestSink},
    llm::summarizer::{clamp_to_context_window, Summarizer},
    transcript::TranscriptFetcher,
    Digest, DigestEntry, NO_TRANSCRIPT_PLACEHOLDER,
};

// The core daily digest pipeline: resolve each configured channel, keep the
// videos of the last day, process each one, deliver the consolidated report.
pub struct DailyDigestProcessor<F, T, S, K>
where
    F: FeedFetcher + Send + Sync + 'static,
    T: TranscriptFetcher + Send + Sync + 'static,
    S: Summarizer + Send + Sync + 'static,
    K: DigestSink + Send + Sync + 'static,
{
    pub(crate) channels: Vec<String>,
    pub(crate) feed_fetcher: F,
    pub(crate) transcripts: T,
    pub(crate) summarizer: S,
    pub(crate) sink: K,
}

/// How a pipeline run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// A digest was assembled and handed to the sink.
    Completed { entry_count: usize },
    /// No video passed the freshness filter on any channel; nothing was
    /// delivered.
    NothingToSend,
}

impl<F, T, S, K> DailyDigestProcessor<F, T, S, K>
where
    F: FeedFetcher + Send + Sync + 'static,
    T: TranscriptFetcher + Send + Sync + 'static,
    S: Summarizer + Send + Sync + 'static,
    K: DigestSink + Send + Sync + 'static,
{
    #[tracing::instrument(skip(self))]
    pub async fn run(self) -> anyhow::Result<RunOutcome> {
        let mut entries = Vec::new();

        for reference in &self.channels {
            let resolved = resolve_channel_reference(reference);
            tracing::info!(feed_url = %resolved.url(), "Checking feed");

            let videos = match self.fresh_videos(resolved.url()).await {
                Ok(videos) => videos,
                Err(e) => {
                    // One channel failing must not abort the run.
                    tracing::error!(error = ?e, reference = %reference, "Skipping channel");
                    continue;
                }
            };

            for video in &videos {
                tracing::info!(title = %video.title, video_id = %video.video_id, "Found new video");
                entries.push(self.process_video(video).await);
            }
        }

        if entries.is_empty() {
            tracing::info!("No new videos found in the last 24 hours");
            return Ok(RunOutcome::NothingToSend);
        }

        let digest = Digest::new(entries);
        let entry_count = digest.entry_count();

        match self.sink.deliver(&digest).await {
            Ok(DeliveryOutcome::Sent) => tracing::info!("Digest email sent"),
            Ok(DeliveryOutcome::Console) => {}
            // The summary work is not lost when delivery fails; the run
            // still completes.
            Err(e) => tracing::error!(error = ?e, "Failed to deliver digest"),
        }

        Ok(RunOutcome::Completed { entry_count })
    }

    /// Fetches one feed and applies the freshness window. `now` is captured
    /// once here, so all entries of the feed see the same cutoff.
    async fn fresh_videos(&self, feed_url: &str) -> anyhow::Result<Vec<VideoEntry>> {
        let feed = self
            .feed_fetcher
            .fetch_feed(feed_url)
            .await
            .map_err(|e| anyhow::anyhow!("Failed to fetch feed: {e:?}"))?;

        Ok(filter_fresh(&feed, Utc::now()))
    }

    /// Turns one fresh video into exactly one digest entry.
    ///
    /// Transcript and summarization failures are folded into the entry body,
    /// never raised, so a single broken video cannot abort the batch.
    #[tracing::instrument(skip(self, video), fields(video_id = %video.video_id))]
    async fn process_video(&self, video: &VideoEntry) -> DigestEntry {
        let body = match self.transcripts.fetch_transcript(&video.video_id).await {
            Err(e) => {
                tracing::warn!(error = ?e, "Could not retrieve transcript");
                NO_TRANSCRIPT_PLACEHOLDER.to_string()
            }
            Ok(segments) => {
                let transcript = segments.iter().map(|s| s.text.as_str()).join(" ");
                let transcript = clamp_to_context_window(&transcript, S::CONTEXT_WINDOW_LIMIT);

                tracing::info!(title = %video.title, "Summarizing");
                match self.summarizer.summarize(&video.title, transcript).await {
                    Ok(resp) => resp.summary,
                    Err(e) => format!("Error generating summary: {e:?}"),
                }
            }
        };

        DigestEntry {
            channel_title: video.channel_title.clone(),
            video_title: video.title.clone(),
            link: video.link.clone(),
            body,
        }
    }
}
