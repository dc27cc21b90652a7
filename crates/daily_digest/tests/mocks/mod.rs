pub mod feed_fetcher;
pub mod sink;
pub mod summarizer;
pub mod transcript;
