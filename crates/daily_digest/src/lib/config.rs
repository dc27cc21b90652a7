use std::path::Path;

use anyhow::Context;

/// Mail settings handed to the delivery sink.
///
/// Sender, password, and recipient are each optional; delivery only goes
/// over SMTP when all three are present.
#[derive(Debug, Clone, Default)]
pub struct MailConfig {
    pub sender: Option<String>,
    pub password: Option<String>,
    pub recipient: Option<String>,
    pub smtp_server: String,
    pub smtp_port: u16,
}

impl MailConfig {
    /// Sender, password, and recipient, if all three are configured.
    pub fn credentials(&self) -> Option<(&str, &str, &str)> {
        Some((
            self.sender.as_deref()?,
            self.password.as_deref()?,
            self.recipient.as_deref()?,
        ))
    }
}

/// Reads the channel list file. A missing file is fatal; the pipeline
/// never runs without one.
pub fn load_channel_list(path: &Path) -> anyhow::Result<Vec<String>> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Channel list not found at {}", path.display()))?;
    Ok(parse_channel_list(&contents))
}

fn parse_channel_list(contents: &str) -> Vec<String> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(String::from)
        .collect()
}
