use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::config::openai::OpenAIConfig;

const IMAGE_GENERATIONS_PATH: &str = "/v1/images/generations";

#[derive(Debug, Serialize)]
struct ImageGenerationRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    n: u32,
    size: &'a str,
    response_format: &'a str,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct ImageGenerationResponse {
    #[serde(default)]
    pub data: Vec<ImageData>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct ImageData {
    pub b64_json: Option<String>,
    pub url: Option<String>,
}

impl ImageGenerationResponse {
    pub fn from_b64(b64_json: impl Into<String>) -> Self {
        Self {
            data: vec![ImageData {
                b64_json: Some(b64_json.into()),
                url: None,
            }],
        }
    }
}

/// Something that turns a prompt into generated image data.
#[async_trait]
pub trait ImageProvider: Send + Sync {
    async fn generate(&self, api_key: &str, prompt: &str)
        -> Result<ImageGenerationResponse, String>;
}

pub struct OpenAIImageClient {
    client: Client,
    base_url: String,
    model: String,
    size: String,
}

impl OpenAIImageClient {
    pub fn new(config: &OpenAIConfig) -> Self {
        Self {
            client: Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.image_model.clone(),
            size: config.image_size.clone(),
        }
    }
}

#[async_trait]
impl ImageProvider for OpenAIImageClient {
    async fn generate(
        &self,
        api_key: &str,
        prompt: &str,
    ) -> Result<ImageGenerationResponse, String> {
        let request_body = ImageGenerationRequest {
            model: &self.model,
            prompt,
            n: 1,
            size: &self.size,
            response_format: "b64_json",
        };
        let request_url = format!("{}{}", self.base_url, IMAGE_GENERATIONS_PATH);

        let response = self
            .client
            .post(request_url)
            .bearer_auth(api_key)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| format!("Failed to send OpenAI request: {}", e))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .map_err(|e| format!("Response parsing as text failed: {}", e))?;
            return Err(format!(
                "OpenAI API error (status {}): {}",
                status, error_text
            ));
        }

        response
            .json::<ImageGenerationResponse>()
            .await
            .map_err(|e| format!("Failed to parse OpenAI response as json: {}", e))
    }
}
