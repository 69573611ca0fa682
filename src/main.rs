use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;
use tokio::sync::RwLock;

use docrag::application::ports::{ChatModel, DocumentLoader, Embedder, VectorStoreCatalog};
use docrag::application::services::{ChatService, ChatSession, IngestionService};
use docrag::domain::SourceFormat;
use docrag::infrastructure::llm::{OpenAiChatModel, OpenAiEmbedder};
use docrag::infrastructure::observability::{init_tracing, TracingConfig};
use docrag::infrastructure::persistence::SqliteCatalog;
use docrag::infrastructure::text_processing::{
    ExtensionRouter, PdfLoader, PlainTextLoader, RecursiveCharacterSplitter,
};
use docrag::presentation::{create_router, AppState, Settings};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let settings = Settings::from_env()?;

    init_tracing(
        TracingConfig::new(
            std::env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
            settings.logging.json_format,
        ),
        settings.server.port,
    );

    // The server still starts without a credential; handlers surface the
    // configuration error on first use of a remote-backed action.
    if let Err(e) = settings.validate() {
        tracing::warn!(error = %e, "starting without a usable API credential");
    }

    let pdf_loader: Arc<dyn DocumentLoader> = Arc::new(PdfLoader::new());
    let text_loader: Arc<dyn DocumentLoader> = Arc::new(PlainTextLoader::new());
    let loader: Arc<dyn DocumentLoader> = Arc::new(ExtensionRouter::new(vec![
        (SourceFormat::Pdf, pdf_loader),
        (SourceFormat::Text, text_loader),
    ]));

    let splitter = Arc::new(RecursiveCharacterSplitter::new(
        settings.chunking.chunk_size,
        settings.chunking.chunk_overlap,
    ));

    let embedder: Arc<dyn Embedder> = Arc::new(OpenAiEmbedder::new(
        settings.openai.api_key.clone(),
        settings.openai.embedding_model.clone(),
    ));

    let chat_model: Arc<dyn ChatModel> = Arc::new(OpenAiChatModel::new(
        settings.openai.api_key.clone(),
        settings.openai.chat_model.clone(),
        settings.openai.max_tokens,
        settings.openai.temperature,
    ));

    let catalog: Arc<dyn VectorStoreCatalog> =
        Arc::new(SqliteCatalog::new(settings.storage.root_path.clone()));

    let ingestion_service = Arc::new(IngestionService::new(
        loader,
        splitter,
        Arc::clone(&embedder),
    ));

    let chat_service = Arc::new(ChatService::new(embedder, chat_model));

    let state = AppState {
        ingestion_service,
        chat_service,
        catalog,
        session: Arc::new(RwLock::new(ChatSession::new())),
        settings: settings.clone(),
    };

    let router = create_router(state);

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port).parse()?;
    tracing::info!("listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
