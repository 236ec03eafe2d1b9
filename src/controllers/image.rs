use crate::{
    dto::request::GenerateImageRequest,
    service,
    utils::error::{AppError, AppResult},
    ServiceState,
};
use axum::{
    body::{Body, Bytes},
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use garde::Validate;
use std::sync::Arc;
use tracing::{info, warn};

/// `POST /api/generate-image`
///
/// The body is parsed as JSON whatever its `Content-Type`, so callers that
/// omit the header still get through.
pub async fn generate_image(
    State(state): State<Arc<ServiceState>>,
    body: Bytes,
) -> AppResult<impl IntoResponse> {
    let req: GenerateImageRequest = serde_json::from_slice(&body).map_err(|e| {
        warn!("Rejected image request body: {}", e);
        AppError::InvalidBody(e.to_string())
    })?;

    if let Err(report) = req.validate() {
        warn!(
            "Rejected prompt of {} UTF-16 units: {}",
            req.prompt.encode_utf16().count(),
            report
        );
        return Err(AppError::PromptTooLong);
    }

    info!(
        "Generating an image for a prompt of {} UTF-16 units.",
        req.prompt.encode_utf16().count()
    );

    let image = service::image::generate_image(&state, &req.prompt).await?;

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, image.content_type)
        .body(Body::from(image.bytes))
        .map_err(|e| AppError::Provider(format!("Failed to build response: {}", e)))
}
