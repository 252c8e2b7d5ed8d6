use crate::domain::model::{SignUpRequest, SubmissionOutcome};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Network boundary for user creation. The real implementation talks to the
/// registration API; tests substitute their own.
///
/// `Ok(Rejected(_))` means the server answered with a non-2xx status and a
/// message; `Err(_)` means the request never produced a response.
#[async_trait]
pub trait SignUpClient: Send + Sync {
    async fn create_user(&self, request: &SignUpRequest) -> Result<SubmissionOutcome>;
}

pub trait ConfigProvider: Send + Sync {
    fn api_base_url(&self) -> &str;
    fn timeout_seconds(&self) -> u64;
}
