use std::env;

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com";
pub const DEFAULT_IMAGE_MODEL: &str = "dall-e-3";
pub const DEFAULT_IMAGE_SIZE: &str = "1024x1024";

/// Settings for the image generation endpoint.
///
/// The API key is not stored here. It is resolved on every request through a
/// [`CredentialSource`](crate::utils::credential::CredentialSource) so the
/// service can start without it.
#[derive(Clone, Debug)]
pub struct OpenAIConfig {
    pub base_url: String,
    pub image_model: String,
    pub image_size: String,
}

impl Default for OpenAIConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            image_model: DEFAULT_IMAGE_MODEL.to_string(),
            image_size: DEFAULT_IMAGE_SIZE.to_string(),
        }
    }
}

impl OpenAIConfig {
    pub fn init_from_env(&mut self) -> Result<(), String> {
        if let Ok(base_url) = env::var("OPENAI_BASE_URL") {
            if base_url.is_empty() {
                return Err("OPENAI_BASE_URL is set but empty".to_string());
            }
            self.base_url = base_url.trim_end_matches('/').to_string();
        }
        if let Ok(model) = env::var("OPENAI_IMAGE_MODEL") {
            self.image_model = model;
        }
        if let Ok(size) = env::var("OPENAI_IMAGE_SIZE") {
            self.image_size = size;
        }

        Ok(())
    }
}
