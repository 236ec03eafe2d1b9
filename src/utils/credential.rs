use std::env;

pub const OPENAI_API_KEY_VAR: &str = "OPENAI_API_KEY";

/// Looks up the provider API key. Called once per request, never cached.
pub trait CredentialSource: Send + Sync {
    fn api_key(&self) -> Option<String>;
}

/// Reads `OPENAI_API_KEY` from the process environment at call time.
#[derive(Debug, Clone, Default)]
pub struct EnvCredential;

impl CredentialSource for EnvCredential {
    fn api_key(&self) -> Option<String> {
        env::var(OPENAI_API_KEY_VAR)
            .ok()
            .filter(|key| !key.is_empty())
    }
}

#[derive(Debug, Clone, Default)]
pub struct StaticCredential(pub Option<String>);

impl StaticCredential {
    pub fn new(key: impl Into<String>) -> Self {
        Self(Some(key.into()))
    }

    pub fn missing() -> Self {
        Self(None)
    }
}

impl CredentialSource for StaticCredential {
    fn api_key(&self) -> Option<String> {
        self.0.clone().filter(|key| !key.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_credential_treats_empty_key_as_missing() {
        assert_eq!(StaticCredential::new("").api_key(), None);
        assert_eq!(StaticCredential::missing().api_key(), None);
        assert_eq!(
            StaticCredential::new("test-key").api_key().as_deref(),
            Some("test-key")
        );
    }

    #[test]
    fn env_credential_is_read_on_every_call() {
        env::remove_var(OPENAI_API_KEY_VAR);
        let source = EnvCredential;
        assert_eq!(source.api_key(), None);

        env::set_var(OPENAI_API_KEY_VAR, "test-key");
        assert_eq!(source.api_key().as_deref(), Some("test-key"));

        env::remove_var(OPENAI_API_KEY_VAR);
        assert_eq!(source.api_key(), None);
    }
}
