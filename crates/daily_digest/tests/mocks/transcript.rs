use std::sync::{Arc, Mutex};

use daily_digest::{TranscriptFetcher, TranscriptSegment};

#[derive(Clone)]
pub struct MockTranscriptFetcher {
    pub segments: Vec<TranscriptSegment>,
    pub calls: Arc<Mutex<Vec<String>>>,
    pub fail_with: Option<String>,
}

impl MockTranscriptFetcher {
    pub fn new(segment_texts: &[&str]) -> Self {
        let segments = segment_texts
            .iter()
            .enumerate()
            .map(|(i, text)| TranscriptSegment {
                start: i as f64 * 5.0,
                duration: 5.0,
                text: text.to_string(),
            })
            .collect();
        Self {
            segments,
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_with: None,
        }
    }

    pub fn failing(msg: &str) -> Self {
        Self {
            segments: Vec::new(),
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_with: Some(msg.to_string()),
        }
    }
}

impl TranscriptFetcher for MockTranscriptFetcher {
    type Error = anyhow::Error;

    async fn fetch_transcript(&self, video_id: &str) -> anyhow::Result<Vec<TranscriptSegment>> {
        self.calls.lock().unwrap().push(video_id.to_string());
        if let Some(ref msg) = self.fail_with {
            return Err(anyhow::anyhow!("{}", msg));
        }
        Ok(self.segments.clone())
    }
}
