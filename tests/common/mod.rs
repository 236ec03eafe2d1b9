use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Request, Response},
    Router,
};
use http_body_util::BodyExt;
use image_generation_service::{
    routes::create_router,
    utils::{
        credential::StaticCredential,
        openai::{ImageGenerationResponse, ImageProvider},
    },
    ServiceState,
};
use std::sync::{Arc, Mutex};

pub const GENERATE_IMAGE_URI: &str = "/api/generate-image";

/// Returns a fixed result and records every call it receives.
pub struct MockImageProvider {
    response: Result<ImageGenerationResponse, String>,
    calls: Mutex<Vec<(String, String)>>,
}

impl MockImageProvider {
    pub fn returning(response: ImageGenerationResponse) -> Arc<Self> {
        Arc::new(Self {
            response: Ok(response),
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn failing(message: &str) -> Arc<Self> {
        Arc::new(Self {
            response: Err(message.to_string()),
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// `(api_key, prompt)` pairs in call order.
    pub fn calls(&self) -> Vec<(String, String)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ImageProvider for MockImageProvider {
    async fn generate(
        &self,
        api_key: &str,
        prompt: &str,
    ) -> Result<ImageGenerationResponse, String> {
        self.calls
            .lock()
            .unwrap()
            .push((api_key.to_string(), prompt.to_string()));
        self.response.clone()
    }
}

pub fn app(credential: StaticCredential, provider: Arc<MockImageProvider>) -> Router {
    let state = ServiceState::new(Arc::new(credential), provider);
    create_router(Arc::new(state))
}

pub fn post_json(body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(GENERATE_IMAGE_URI)
        .body(body.into())
        .unwrap()
}

pub fn prompt_body(prompt: &str) -> String {
    serde_json::json!({ "prompt": prompt }).to_string()
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}
