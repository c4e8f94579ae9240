use std::{net::SocketAddr, sync::Arc};

use anyhow::Context;
use clap::Parser;
use mindmap_datastore::FirebaseStatusStore;
use mindmap_notes::{
    gemini::GeminiClient, server::router, tracing::init_tracing_subscriber,
    yt::transcript::YtTranscriptFetcher, NotesProcessorBuilder,
};

#[derive(Parser)]
#[command(name = "mindmap-notes", about = "Turns video captions into Markdown study notes")]
struct Cli {
    /// Gemini API key
    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true)]
    gemini_api_key: String,

    /// Gemini model used for segmentation and notes
    #[arg(long, env = "GEMINI_MODEL", default_value = GeminiClient::DEFAULT_MODEL)]
    gemini_model: String,

    /// Base URL of the generative language API
    #[arg(long, env = "GEMINI_BASE_URL", default_value = GeminiClient::DEFAULT_BASE_URL)]
    gemini_base_url: String,

    /// Firebase Realtime Database URL
    #[arg(long, env = "FIREBASE_DATABASE_URL")]
    firebase_database_url: String,

    /// Firebase database secret or access token
    #[arg(long, env = "FIREBASE_AUTH_TOKEN", hide_env_values = true)]
    firebase_auth_token: Option<String>,

    /// Caption languages in order of preference
    #[arg(long, env = "TRANSCRIPT_LANGUAGES", value_delimiter = ',', default_value = "en")]
    transcript_languages: Vec<String>,

    /// Address to listen on
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    host: String,

    /// Port to listen on
    #[arg(long, env = "PORT", default_value = "8080")]
    port: u16,
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

    let store = FirebaseStatusStore::new(&cli.firebase_database_url, cli.firebase_auth_token);
    let transcript_fetcher = YtTranscriptFetcher::new(cli.transcript_languages)?;
    let generator = GeminiClient::new(cli.gemini_api_key)
        .with_base_url(cli.gemini_base_url)
        .with_model(cli.gemini_model);

    let processor = NotesProcessorBuilder::new()
        .store(store)
        .transcript_fetcher(transcript_fetcher)
        .generator(generator)
        .build();

    let addr: SocketAddr = format!("{}:{}", cli.host, cli.port)
        .parse()
        .context("Invalid HOST/PORT")?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    tracing::info!(%addr, "Listening for jobs");
    axum::serve(listener, router(Arc::new(processor))).await?;

    Ok(())
}
