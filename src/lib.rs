pub mod config;
pub mod controllers;
pub mod dto;
pub mod routes;
pub mod service;
pub mod utils;

use std::sync::Arc;
use utils::{credential::CredentialSource, openai::ImageProvider};

pub struct ServiceState {
    pub credentials: Arc<dyn CredentialSource>,
    pub provider: Arc<dyn ImageProvider>,
}

impl ServiceState {
    pub fn new(credentials: Arc<dyn CredentialSource>, provider: Arc<dyn ImageProvider>) -> Self {
        Self {
            credentials,
            provider,
        }
    }
}
