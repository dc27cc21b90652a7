pub mod timedtext;

use std::{fmt::Debug, future::Future};

/// Retrieves the timed caption segments of one video.
pub trait TranscriptFetcher {
    type Error: Debug;

    fn fetch_transcript(
        &self,
        video_id: &str,
    ) -> impl Future<Output = Result<Vec<TranscriptSegment>, Self::Error>>;
}

/// One caption segment, in transcript order. Times are in seconds.
#[derive(Debug, Clone, PartialEq)]
pub struct TranscriptSegment {
    pub start: f64,
    pub duration: f64,
    pub text: String,
}
