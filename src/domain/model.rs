use serde::{Deserialize, Serialize};

/// The four form fields as typed by the user, one string per labeled input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub username: String,
    pub email: String,
    pub password: String,
    pub password_confirmation: String,
}

/// JSON body POSTed to the user creation endpoint. The confirmation field
/// never leaves the client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SignUpRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl SignUpRequest {
    pub fn from_state(state: &FormState) -> Self {
        Self {
            username: state.username.clone(),
            email: state.email.clone(),
            password: state.password.clone(),
        }
    }
}

/// Shape of a non-2xx response body: `{"error":{"message":"..."}}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorBody {
    pub error: ApiErrorDetail,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorDetail {
    pub message: String,
}

/// Result of one delivered submission. A rejection is a normal outcome
/// carrying the display-ready message from the response body; transport
/// failures are errors, not outcomes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Accepted,
    Rejected(String),
}
