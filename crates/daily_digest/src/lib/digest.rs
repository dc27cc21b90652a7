use chrono::NaiveDate;
use itertools::Itertools;

/// Entry body used when a video has no retrievable transcript.
pub const NO_TRANSCRIPT_PLACEHOLDER: &str = "(No transcript available for summarization)";

const PREAMBLE: &str = "Here is your daily YouTube summary:";
const SUBJECT_PREFIX: &str = "YouTube Daily Digest";
const ENTRY_SEPARATOR: &str = "----------------------------------------";

/// One digest block: where the video came from, where to watch it, and
/// either its summary or a fixed failure note.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigestEntry {
    pub channel_title: String,
    pub video_title: String,
    pub link: String,
    pub body: String,
}

/// The consolidated daily report, in discovery order.
///
/// Only constructed when at least one entry exists; an empty run never
/// reaches delivery.
#[derive(Debug, Clone)]
pub struct Digest {
    entries: Vec<DigestEntry>,
}

impl Digest {
    pub fn new(entries: Vec<DigestEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[DigestEntry] {
        &self.entries
    }

    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    pub fn subject(&self, date: NaiveDate) -> String {
        format!("{SUBJECT_PREFIX} - {date}")
    }

    /// Renders the plain-text report body.
    pub fn to_body(&self) -> String {
        let blocks = self
            .entries
            .iter()
            .map(|entry| {
                format!(
                    "CHANNEL: {}\nVIDEO: {}\nLINK: {}\n\n{}\n\n{}\n",
                    entry.channel_title, entry.video_title, entry.link, entry.body, ENTRY_SEPARATOR
                )
            })
            .join("\n");

        format!("{PREAMBLE}\n\n{blocks}")
    }
}
