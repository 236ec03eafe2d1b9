use garde::Validate;
use serde::Deserialize;

/// Longest prompt accepted, counted in UTF-16 code units.
pub const MAX_PROMPT_LENGTH: usize = 4000;

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct GenerateImageRequest {
    #[garde(length(utf16, max = MAX_PROMPT_LENGTH))]
    pub prompt: String,
}
