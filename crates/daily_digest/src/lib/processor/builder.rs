use feed_ingest::FeedFetcher;

use crate::{
    delivery::DigestSink, llm::summarizer::Summarizer, processor::DailyDigestProcessor,
    transcript::TranscriptFetcher,
};

pub struct DailyDigestProcessorBuilder<F = (), T = (), S = (), K = ()> {
    channels: Vec<String>,
    feed_fetcher: F,
    transcripts: T,
    summarizer: S,
    sink: K,
}

impl DailyDigestProcessorBuilder {
    pub fn new(channels: Vec<String>) -> Self {
        Self {
            channels,
            feed_fetcher: (),
            transcripts: (),
            summarizer: (),
            sink: (),
        }
    }
}

impl<F, T, S, K> DailyDigestProcessorBuilder<F, T, S, K> {
    pub fn feed_fetcher<F2: FeedFetcher + Send + Sync + 'static>(
        self,
        feed_fetcher: F2,
    ) -> DailyDigestProcessorBuilder<F2, T, S, K> {
        DailyDigestProcessorBuilder {
            channels: self.channels,
            feed_fetcher,
            transcripts: self.transcripts,
            summarizer: self.summarizer,
            sink: self.sink,
        }
    }

    pub fn transcripts<T2: TranscriptFetcher + Send + Sync + 'static>(
        self,
        transcripts: T2,
    ) -> DailyDigestProcessorBuilder<F, T2, S, K> {
        DailyDigestProcessorBuilder {
            channels: self.channels,
            feed_fetcher: self.feed_fetcher,
            transcripts,
            summarizer: self.summarizer,
            sink: self.sink,
        }
    }

    pub fn summarizer<S2: Summarizer + Send + Sync + 'static>(
        self,
        summarizer: S2,
    ) -> DailyDigestProcessorBuilder<F, T, S2, K> {
        DailyDigestProcessorBuilder {
            channels: self.channels,
            feed_fetcher: self.feed_fetcher,
            transcripts: self.transcripts,
            summarizer,
            sink: self.sink,
        }
    }

    pub fn sink<K2: DigestSink + Send + Sync + 'static>(
        self,
        sink: K2,
    ) -> DailyDigestProcessorBuilder<F, T, S, K2> {
        DailyDigestProcessorBuilder {
            channels: self.channels,
            feed_fetcher: self.feed_fetcher,
            transcripts: self.transcripts,
            summarizer: self.summarizer,
            sink,
        }
    }
}

impl<F, T, S, K> DailyDigestProcessorBuilder<F, T, S, K>
where
    F: FeedFetcher + Send + Sync + 'static,
    T: TranscriptFetcher + Send + Sync + 'static,
    S: Summarizer + Send + Sync + 'static,
    K: DigestSink + Send + Sync + 'static,
{
    pub fn build(self) -> DailyDigestProcessor<F, T, S, K> {
        DailyDigestProcessor {
            channels: self.channels,
            feed_fetcher: self.feed_fetcher,
            transcripts: self.transcripts,
            summarizer: self.summarizer,
            sink: self.sink,
        }
    }
}
