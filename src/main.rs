use anyhow::Context as _;
use chat::ChatService;
use config::load_user_config;
use std::sync::Arc;

mod ai;
mod chat;
mod config;
mod faq;
mod web;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let cfg = load_user_config().context("Failed to load configuration")?;

    let log_level: log::Level = cfg.log_level.clone().into();
    simple_logger::init_with_level(log_level).unwrap();

    let kb = faq::store::load_knowledge_base(&cfg.knowledge.faq_json_path);
    let resolver = faq::FaqResolver::with_threshold(kb, cfg.similarity.threshold);

    let responder = ai::AiResponder::new(cfg.ai.clone());
    if !responder.has_credential() {
        log::warn!("No OpenAI API key configured. AI fallback answers will be limited.");
    }

    let chat = Arc::new(ChatService::new(resolver, responder));
    log::info!(
        "Chat service ready with {} FAQ entries (threshold {:.2}, model {})",
        chat.faq_entry_count(),
        cfg.similarity.threshold,
        cfg.ai.model
    );

    let app = web::build_router(web::AppState { chat });

    let addr = format!("{}:{}", cfg.server.host, cfg.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;
    log::info!("Listening on http://{}", addr);
    axum::serve(listener, app).await?;

    log::info!("Server stopped.");
    Ok(())
}
