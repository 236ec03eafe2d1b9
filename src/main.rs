use image_generation_service::{
    config::{self, ServiceConfig},
    routes::create_router,
    utils::{credential::EnvCredential, openai::OpenAIImageClient},
    ServiceState,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{error, info, warn};

#[tokio::main]
async fn main() {
    config::tracing::init();

    let mut service_config = ServiceConfig::default();
    if let Err(e) = service_config.init_from_env() {
        error!("Failed to load configuration: {}", e);
        std::process::exit(1);
    }

    let addr = match service_config.server.get_socket_addr() {
        Ok(addr) => addr,
        Err(e) => {
            error!(
                "Invalid server address '{}': {}",
                service_config.server.get_addr(),
                e
            );
            std::process::exit(1);
        }
    };

    let provider = Arc::new(OpenAIImageClient::new(&service_config.openai));
    let state = Arc::new(ServiceState::new(Arc::new(EnvCredential), provider));
    if state.credentials.api_key().is_none() {
        warn!("OPENAI_API_KEY is not set yet; requests will fail until it is.");
    }

    let listener = match TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!("Failed to bind {}: {}", addr, e);
            std::process::exit(1);
        }
    };
    info!("Image generation service listening on {}", addr);

    if let Err(e) = axum::serve(listener, create_router(state)).await {
        error!("Server error: {}", e);
        std::process::exit(1);
    }
}
