use blogengine::{
    AppState,
    config::Config,
    markup::RemoteMarkdown,
    routes,
    store::MemoryPostStore,
    templates::TemplateRenderer,
};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("blogengine=info,tower_http=info")),
        )
        .with_target(false)
        .compact()
        .init();

    let config = Config::from_env()?;

    let client = RemoteMarkdown::client(config.markdown_api_timeout)?;
    let converter = RemoteMarkdown::new(client, config.markdown_api_url.clone());

    let state = AppState::new(
        Arc::new(MemoryPostStore::new()),
        Arc::new(converter),
        TemplateRenderer::new()?,
        &config.blog_title,
    );

    let app = routes::router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;

    info!("Server running on http://{}", config.bind_addr);
    info!("Markdown API: {}", config.markdown_api_url);
    info!("Endpoints:");
    info!("  GET    /                 - Post listing (HTML)");
    info!("  GET    /health           - Health check");
    info!("  POST   /posts            - Create post");
    info!("  GET    /posts            - List posts");
    info!("  GET    /posts/:id        - Get specific post");
    info!("  GET    /posts/:id/html   - Rendered post body");
    info!("  DELETE /posts/:id        - Delete post");

    axum::serve(listener, app).await?;

    Ok(())
}
