mod config;
mod digest;
mod llm;
mod processor;
pub mod delivery;
pub mod tracing;
pub mod transcript;

pub use config::{load_channel_list, MailConfig};
pub use delivery::{DeliveryOutcome, DigestSink};
pub use digest::{Digest, DigestEntry, NO_TRANSCRIPT_PLACEHOLDER};
pub use llm::gemini;
pub use llm::summarizer::{clamp_to_context_window, Summarizer, SummaryResponse};
pub use processor::{builder::DailyDigestProcessorBuilder, DailyDigestProcessor, RunOutcome};
pub use transcript::{TranscriptFetcher, TranscriptSegment};
