use crate::core::view::{derive_view, FormView, NETWORK_ERROR_MESSAGE};
use crate::core::{SignUpClient, SignUpRequest, SubmissionOutcome};
use crate::domain::model::FormState;
use crate::utils::error::Result;

/// The sign-up form component: explicit field state, a pending flag for the
/// in-flight request, and the currently displayed error text. The view is
/// never stored; it is derived from this state on demand.
pub struct SignUpForm<C: SignUpClient> {
    client: C,
    state: FormState,
    pending: bool,
    error_message: Option<String>,
}

impl<C: SignUpClient> SignUpForm<C> {
    pub fn new(client: C) -> Self {
        Self {
            client,
            state: FormState::default(),
            pending: false,
            error_message: None,
        }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub fn set_username(&mut self, value: impl Into<String>) {
        self.state.username = value.into();
    }

    pub fn set_email(&mut self, value: impl Into<String>) {
        self.state.email = value.into();
    }

    pub fn set_password(&mut self, value: impl Into<String>) {
        self.state.password = value.into();
    }

    pub fn set_password_confirmation(&mut self, value: impl Into<String>) {
        self.state.password_confirmation = value.into();
    }

    pub fn view(&self) -> FormView {
        derive_view(&self.state, self.pending, self.error_message.as_deref())
    }

    /// Activation of the submit control. Returns the request to send, or
    /// `None` when the control is disabled (incomplete fields, mismatched
    /// passwords, or a request already in flight).
    pub fn begin_submit(&mut self) -> Option<SignUpRequest> {
        if self.view().submit.disabled {
            tracing::debug!("submit ignored: control is disabled");
            return None;
        }
        self.pending = true;
        Some(SignUpRequest::from_state(&self.state))
    }

    /// Applies the result of the request started by `begin_submit`. A
    /// rejection replaces the displayed error text; an acceptance clears it;
    /// a transport failure displays the generic network message and
    /// propagates the cause.
    pub fn complete_submit(
        &mut self,
        result: Result<SubmissionOutcome>,
    ) -> Result<SubmissionOutcome> {
        self.pending = false;
        match result {
            Ok(SubmissionOutcome::Accepted) => {
                self.error_message = None;
                Ok(SubmissionOutcome::Accepted)
            }
            Ok(SubmissionOutcome::Rejected(message)) => {
                self.error_message = Some(message.clone());
                Ok(SubmissionOutcome::Rejected(message))
            }
            Err(error) => {
                self.error_message = Some(NETWORK_ERROR_MESSAGE.to_string());
                Err(error)
            }
        }
    }

    /// One full activation: at most one network call, and none at all when
    /// the control is disabled.
    pub async fn submit(&mut self) -> Result<Option<SubmissionOutcome>> {
        let Some(request) = self.begin_submit() else {
            return Ok(None);
        };
        let result = self.client.create_user(&request).await;
        self.complete_submit(result).map(Some)
    }
}
