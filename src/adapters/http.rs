use crate::core::view::FALLBACK_ERROR_MESSAGE;
use crate::core::{ConfigProvider, SignUpClient, SignUpRequest, SubmissionOutcome};
use crate::domain::model::ApiErrorBody;
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// Fixed path of the user creation endpoint.
pub const USERS_PATH: &str = "/api/v1/users";

/// Real `SignUpClient` backed by reqwest.
pub struct HttpSignUpClient {
    client: Client,
    base_url: Url,
}

impl HttpSignUpClient {
    pub fn new(base_url: &str) -> Result<Self> {
        Ok(Self {
            client: Client::new(),
            base_url: Url::parse(base_url)?,
        })
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds()))
            .build()?;
        Ok(Self {
            client,
            base_url: Url::parse(config.api_base_url())?,
        })
    }
}

#[async_trait]
impl SignUpClient for HttpSignUpClient {
    async fn create_user(&self, request: &SignUpRequest) -> Result<SubmissionOutcome> {
        let url = self.base_url.join(USERS_PATH)?;

        tracing::debug!("POST {}", url);
        let response = self.client.post(url).json(request).send().await?;

        let status = response.status();
        tracing::debug!("user creation response status: {}", status);

        if status.is_success() {
            return Ok(SubmissionOutcome::Accepted);
        }

        let body = response.text().await.unwrap_or_default();
        let message = match serde_json::from_str::<ApiErrorBody>(&body) {
            Ok(parsed) => parsed.error.message,
            Err(error) => {
                tracing::warn!("unreadable error body for status {}: {}", status, error);
                FALLBACK_ERROR_MESSAGE.to_string()
            }
        };

        Ok(SubmissionOutcome::Rejected(message))
    }
}
