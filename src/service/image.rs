use base64::{prelude::BASE64_STANDARD, Engine};
use tracing::{error, info};

use crate::{
    dto::response::GeneratedImage,
    utils::error::{format_error, AppError, AppResult},
    ServiceState,
};

/// Resolves the API key, asks the provider for one image and decodes it.
pub async fn generate_image(state: &ServiceState, prompt: &str) -> AppResult<GeneratedImage> {
    let api_key = state.credentials.api_key().ok_or_else(|| {
        error!("Image generation requested but no OpenAI API key is configured");
        AppError::MissingCredential
    })?;

    let response = state
        .provider
        .generate(&api_key, prompt)
        .await
        .map_err(|e| format_error("Image provider request failed", e))?;

    let b64_json = response
        .data
        .into_iter()
        .next()
        .and_then(|image| image.b64_json)
        .ok_or_else(|| format_error("Image provider response", "no b64_json image data"))?;

    let bytes = BASE64_STANDARD
        .decode(b64_json.trim())
        .map_err(|e| format_error("Failed to decode base64 image", e))?;

    info!("Generated image of {} bytes", bytes.len());
    Ok(GeneratedImage::png(bytes))
}
