use std::path::PathBuf;

use clap::Parser;
use daily_digest::{
    delivery::smtp::EmailSink, gemini::GeminiClient, load_channel_list,
    tracing::init_tracing_subscriber, transcript::timedtext::TimedTextClient,
    DailyDigestProcessorBuilder, MailConfig,
};
use feed_ingest::AtomFeedClient;

#[derive(Parser)]
#[command(name = "daily-digest", about = "YouTube daily digest mailer")]
struct Cli {
    /// Channel list file, one channel id or URL per line
    #[arg(long, env = "CHANNELS_FILE", default_value = "channels.txt")]
    channels_file: PathBuf,

    /// Gemini API key; summarization is skipped when unset
    #[arg(long, env = "GEMINI_API_KEY")]
    gemini_api_key: Option<String>,

    /// Digest sender address
    #[arg(long, env = "EMAIL_SENDER")]
    email_sender: Option<String>,

    /// SMTP password for the sender account
    #[arg(long, env = "EMAIL_PASSWORD")]
    email_password: Option<String>,

    /// Digest recipient address
    #[arg(long, env = "EMAIL_RECEIVER")]
    email_receiver: Option<String>,

    /// SMTP relay host
    #[arg(long, env = "SMTP_SERVER", default_value = "smtp.gmail.com")]
    smtp_server: String,

    /// SMTP relay port (STARTTLS)
    #[arg(long, env = "SMTP_PORT", default_value = "587")]
    smtp_port: u16,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    let _guard = sentry::init((
        std::env::var("SENTRY_DSN").unwrap_or_default(),
        sentry::ClientOptions {
            release: sentry::release_name!(),
            environment: Some("production".into()),
            ..Default::default()
        },
    ));

    let cli = Cli::parse();
    init_tracing_subscriber()?;

    let channels = load_channel_list(&cli.channels_file)?;
    tracing::info!(count = channels.len(), "Loaded channel list");

    let mail = MailConfig {
        sender: cli.email_sender,
        password: cli.email_password,
        recipient: cli.email_receiver,
        smtp_server: cli.smtp_server,
        smtp_port: cli.smtp_port,
    };

    let processor = DailyDigestProcessorBuilder::new(channels)
        .feed_fetcher(AtomFeedClient::new())
        .transcripts(TimedTextClient::new())
        .summarizer(GeminiClient::new(cli.gemini_api_key))
        .sink(EmailSink::new(mail))
        .build();

    processor.run().await?;

    Ok(())
}
