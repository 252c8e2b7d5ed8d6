use crate::domain::model::FormState;
use crate::utils::validation::submit_enabled;

pub const HEADING: &str = "Sign Up";
pub const USERNAME_LABEL: &str = "ユーザー名";
pub const EMAIL_LABEL: &str = "メールアドレス";
pub const PASSWORD_LABEL: &str = "パスワード";
pub const PASSWORD_CONFIRMATION_LABEL: &str = "パスワード確認";
pub const SUBMIT_LABEL: &str = "登録";

/// Shown when the request never reached the server.
pub const NETWORK_ERROR_MESSAGE: &str = "ネットワークエラーが発生しました。接続を確認してください。";
/// Shown when a non-2xx response carries no readable message.
pub const FALLBACK_ERROR_MESSAGE: &str = "登録に失敗しました。時間を置いて試してください。";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldView {
    pub label: &'static str,
    pub value: String,
    /// Secret fields render masked, never their raw value.
    pub masked: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitView {
    pub label: &'static str,
    pub disabled: bool,
}

/// The rendered form: what a user would see at this instant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormView {
    pub heading: &'static str,
    pub fields: Vec<FieldView>,
    pub submit: SubmitView,
    pub error_message: Option<String>,
}

impl FormView {
    /// Look up a field the way a user would: by its visible label.
    pub fn field(&self, label: &str) -> Option<&FieldView> {
        self.fields.iter().find(|field| field.label == label)
    }

    pub fn to_text(&self) -> String {
        let mut lines = vec![self.heading.to_string(), String::new()];
        for field in &self.fields {
            let value = if field.masked {
                "*".repeat(field.value.chars().count())
            } else {
                field.value.clone()
            };
            lines.push(format!("{}: {}", field.label, value));
        }
        lines.push(String::new());
        if self.submit.disabled {
            lines.push(format!("[{}] (disabled)", self.submit.label));
        } else {
            lines.push(format!("[{}]", self.submit.label));
        }
        if let Some(message) = &self.error_message {
            lines.push(String::new());
            lines.push(message.clone());
        }
        lines.join("\n")
    }
}

/// Pure derivation from component state to the rendered view. Recomputed on
/// every mutation; the field list is always the same four, in order.
pub fn derive_view(state: &FormState, pending: bool, error_message: Option<&str>) -> FormView {
    FormView {
        heading: HEADING,
        fields: vec![
            FieldView {
                label: USERNAME_LABEL,
                value: state.username.clone(),
                masked: false,
            },
            FieldView {
                label: EMAIL_LABEL,
                value: state.email.clone(),
                masked: false,
            },
            FieldView {
                label: PASSWORD_LABEL,
                value: state.password.clone(),
                masked: true,
            },
            FieldView {
                label: PASSWORD_CONFIRMATION_LABEL,
                value: state.password_confirmation.clone(),
                masked: true,
            },
        ],
        submit: SubmitView {
            label: SUBMIT_LABEL,
            disabled: pending || !submit_enabled(state),
        },
        error_message: error_message.map(str::to_string),
    }
}
