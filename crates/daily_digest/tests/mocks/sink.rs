use std::sync::{Arc, Mutex};

use daily_digest::{DeliveryOutcome, Digest, DigestSink};

#[derive(Clone)]
pub struct MockSink {
    pub delivered_bodies: Arc<Mutex<Vec<String>>>,
    pub fail_with: Option<String>,
}

impl Default for MockSink {
    fn default() -> Self {
        Self {
            delivered_bodies: Arc::new(Mutex::new(Vec::new())),
            fail_with: None,
        }
    }
}

impl MockSink {
    pub fn failing(msg: &str) -> Self {
        Self {
            fail_with: Some(msg.to_string()),
            ..Default::default()
        }
    }
}

impl DigestSink for MockSink {
    type Error = anyhow::Error;

    async fn deliver(&self, digest: &Digest) -> anyhow::Result<DeliveryOutcome> {
        if let Some(ref msg) = self.fail_with {
            return Err(anyhow::anyhow!("{}", msg));
        }
        self.delivered_bodies.lock().unwrap().push(digest.to_body());
        Ok(DeliveryOutcome::Sent)
    }
}
