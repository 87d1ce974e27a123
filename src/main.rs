use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;

use triptych::application::services::AnalysisDispatcher;
use triptych::infrastructure::observability::{init_tracing, TracingConfig};
use triptych::infrastructure::openai::{OpenAiChatClient, OpenAiSpeechClient};
use triptych::infrastructure::text_processing::DocumentExtractor;
use triptych::infrastructure::web::HttpPageFetcher;
use triptych::presentation::{create_router, AppState, Environment, Settings};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".into())
        .try_into()
        .map_err(anyhow::Error::msg)?;

    let mut settings = Settings::load(environment)?;

    // The credential travels as a bare env var in deployment; config files
    // carry everything else.
    if settings.openai.api_key.is_empty() {
        settings.openai.api_key = std::env::var("OPENAI_API_KEY").unwrap_or_default();
    }

    init_tracing(&TracingConfig::new(
        environment.as_str(),
        settings.logging.level.as_str(),
        settings.logging.enable_json,
    ));

    if settings.openai.api_key.is_empty() {
        tracing::warn!("No OpenAI API key configured; analysis requests will fail");
    }

    let speech = Arc::new(OpenAiSpeechClient::new(
        settings.openai.api_key.clone(),
        settings.openai.base_url.clone(),
        settings.openai.transcription_model.clone(),
    ));
    let chat = Arc::new(OpenAiChatClient::new(
        settings.openai.api_key.clone(),
        settings.openai.base_url.clone(),
        settings.openai.chat_model.clone(),
    ));
    let fetcher = Arc::new(HttpPageFetcher::new());

    let state = AppState {
        dispatcher: Arc::new(AnalysisDispatcher::new(speech, chat)),
        extractor: Arc::new(DocumentExtractor::new(
            fetcher,
            settings.extraction.max_pdf_pages,
        )),
    };

    let router = create_router(state);

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port).parse()?;
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
