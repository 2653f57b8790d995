use std::net::SocketAddr;

use dotenv::dotenv;
use neuroread_adapter::ai::client::GeminiClient;
use neuroread_adapter::server;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    env_logger::builder().filter_level(log::LevelFilter::Info).init();

    // Missing credential is fatal: refuse to start rather than fail per request.
    let api_key = std::env::var("GEMINI_API_KEY")
        .map_err(|_| "GEMINI_API_KEY is missing. Did you set it in .env?")?;

    let port: u16 = match std::env::var("PORT") {
        Ok(v) => v.parse().map_err(|_| format!("PORT is not a valid port number: {v}"))?,
        Err(_) => 8000,
    };

    let router = server::build_router(GeminiClient::new(api_key));

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    log::info!("neuroread-adapter listening on {}", listener.local_addr()?);

    axum::serve(listener, router).await?;
    Ok(())
}
