use reqwest::Client;
use serde::Deserialize;

use crate::transcript::{TranscriptFetcher, TranscriptSegment};

/// Retrieves caption tracks through YouTube's innertube player endpoint and
/// fetches the selected track in `json3` timedtext format.
pub struct TimedTextClient {
    client: Client,
    base_url: String,
}

#[derive(Debug, thiserror::Error)]
pub enum TranscriptError {
    #[error("HTTP error: {0}")]
    Request(#[from] reqwest::Error),
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },
    #[error("No transcript available for this video")]
    TranscriptUnavailable,
}

impl Default for TimedTextClient {
    fn default() -> Self {
        Self::new()
    }
}

impl TimedTextClient {
    const INNERTUBE_CLIENT_NAME: &'static str = "ANDROID";
    const INNERTUBE_CLIENT_VERSION: &'static str = "20.10.38";

    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: "https://www.youtube.com".into(),
        }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Resolves the timedtext URL of the video's caption track, preferring
    /// an English track when several exist.
    async fn resolve_caption_track(&self, video_id: &str) -> Result<String, TranscriptError> {
        let body = serde_json::json!({
            "context": {
                "client": {
                    "clientName": Self::INNERTUBE_CLIENT_NAME,
                    "clientVersion": Self::INNERTUBE_CLIENT_VERSION
                }
            },
            "videoId": video_id,
        });

        let resp = self
            .client
            .post(format!("{}/youtubei/v1/player", self.base_url))
            .json(&body)
            .send()
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to make http request"))?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let message = resp.text().await.unwrap_or_default();
            return Err(TranscriptError::Api { status, message });
        }

        let player = resp.json::<PlayerResponse>().await?;
        let mut tracks = player
            .captions
            .and_then(|c| c.player_captions_tracklist_renderer)
            .map(|r| r.caption_tracks)
            .unwrap_or_default();

        if tracks.is_empty() {
            return Err(TranscriptError::TranscriptUnavailable);
        }

        let preferred = tracks
            .iter()
            .position(|t| t.language_code.starts_with("en"))
            .unwrap_or(0);

        Ok(tracks.swap_remove(preferred).base_url)
    }
}

#[derive(Debug, Deserialize)]
struct PlayerResponse {
    captions: Option<Captions>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Captions {
    player_captions_tracklist_renderer: Option<TracklistRenderer>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TracklistRenderer {
    #[serde(default)]
    caption_tracks: Vec<CaptionTrack>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CaptionTrack {
    base_url: String,
    #[serde(default)]
    language_code: String,
}

#[derive(Debug, Deserialize)]
struct TimedTextResponse {
    events: Option<Vec<TimedTextEvent>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TimedTextEvent {
    t_start_ms: Option<u64>,
    d_duration_ms: Option<u64>,
    segs: Option<Vec<TimedTextSeg>>,
}

#[derive(Debug, Deserialize)]
struct TimedTextSeg {
    utf8: Option<String>,
}

impl TranscriptFetcher for TimedTextClient {
    type Error = TranscriptError;

    async fn fetch_transcript(
        &self,
        video_id: &str,
    ) -> Result<Vec<TranscriptSegment>, Self::Error> {
        let track_url = self.resolve_caption_track(video_id).await?;
        let track_url = if track_url.contains("fmt=") {
            track_url
        } else {
            format!("{track_url}&fmt=json3")
        };

        let resp = self
            .client
            .get(&track_url)
            .send()
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to fetch caption track"))?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let message = resp.text().await.unwrap_or_default();
            return Err(TranscriptError::Api { status, message });
        }

        let timed_text = resp.json::<TimedTextResponse>().await?;
        let segments: Vec<TranscriptSegment> = timed_text
            .events
            .unwrap_or_default()
            .into_iter()
            .filter_map(|event| {
                let text: String = event
                    .segs?
                    .into_iter()
                    .filter_map(|seg| seg.utf8)
                    .collect();
                let text = text.trim().to_string();
                if text.is_empty() {
                    return None;
                }
                Some(TranscriptSegment {
                    start: event.t_start_ms.unwrap_or(0) as f64 / 1000.0,
                    duration: event.d_duration_ms.unwrap_or(0) as f64 / 1000.0,
                    text,
                })
            })
            .collect();

        // A track that resolves but carries no text is as good as missing.
        if segments.is_empty() {
            return Err(TranscriptError::TranscriptUnavailable);
        }

        Ok(segments)
    }
}
