pub mod smtp;

use std::{fmt::Debug, future::Future};

use crate::Digest;

/// Consumes the assembled digest. The sink decides how (or whether) the
/// report leaves the process.
pub trait DigestSink {
    type Error: Debug;

    fn deliver(
        &self,
        digest: &Digest,
    ) -> impl Future<Output = Result<DeliveryOutcome, Self::Error>>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryOutcome {
    /// The digest went out over SMTP.
    Sent,
    /// Mail configuration was incomplete; the body was written to stdout.
    Console,
}
