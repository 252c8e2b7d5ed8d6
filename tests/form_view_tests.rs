use async_trait::async_trait;
use signup_form::core::view::{
    EMAIL_LABEL, PASSWORD_CONFIRMATION_LABEL, PASSWORD_LABEL, USERNAME_LABEL,
};
use signup_form::{Result, SignUpClient, SignUpForm, SignUpRequest, SubmissionOutcome};

/// Stub for tests that must never reach the network boundary.
struct NoNetworkClient;

#[async_trait]
impl SignUpClient for NoNetworkClient {
    async fn create_user(&self, _request: &SignUpRequest) -> Result<SubmissionOutcome> {
        panic!("no network call expected in a view test");
    }
}

fn fill_all(form: &mut SignUpForm<NoNetworkClient>, password: &str, confirmation: &str) {
    form.set_username("User");
    form.set_email("user@example.com");
    form.set_password(password);
    form.set_password_confirmation(confirmation);
}

#[test]
fn test_initial_render_layout() {
    let form = SignUpForm::new(NoNetworkClient);
    let view = form.view();

    assert_eq!(view.heading, "Sign Up");
    assert_eq!(view.submit.label, "登録");
    assert!(view.submit.disabled);
    assert!(view.error_message.is_none());

    let labels: Vec<&str> = view.fields.iter().map(|f| f.label).collect();
    assert_eq!(
        labels,
        ["ユーザー名", "メールアドレス", "パスワード", "パスワード確認"]
    );
}

#[test]
fn test_password_fields_are_masked() {
    let form = SignUpForm::new(NoNetworkClient);
    let view = form.view();

    assert!(!view.field(USERNAME_LABEL).unwrap().masked);
    assert!(!view.field(EMAIL_LABEL).unwrap().masked);
    assert!(view.field(PASSWORD_LABEL).unwrap().masked);
    assert!(view.field(PASSWORD_CONFIRMATION_LABEL).unwrap().masked);
}

#[test]
fn test_matching_passwords_enable_submit() {
    let mut form = SignUpForm::new(NoNetworkClient);
    fill_all(&mut form, "P4ssw0rd", "P4ssw0rd");
    assert!(!form.view().submit.disabled);
}

#[test]
fn test_mismatched_passwords_keep_submit_disabled() {
    let mut form = SignUpForm::new(NoNetworkClient);
    fill_all(&mut form, "P4ssw0rd", "password");
    assert!(form.view().submit.disabled);
}

#[test]
fn test_any_empty_field_keeps_submit_disabled() {
    let mut form = SignUpForm::new(NoNetworkClient);
    fill_all(&mut form, "P4ssw0rd", "P4ssw0rd");
    form.set_username("");
    assert!(form.view().submit.disabled);

    fill_all(&mut form, "P4ssw0rd", "P4ssw0rd");
    form.set_email("");
    assert!(form.view().submit.disabled);
}

#[test]
fn test_fields_are_stable_across_mutations() {
    let mut form = SignUpForm::new(NoNetworkClient);
    let initial_labels: Vec<&str> = form.view().fields.iter().map(|f| f.label).collect();

    for i in 0..50 {
        form.set_username(format!("user{}", i));
        form.set_email(format!("user{}@example.com", i));
        form.set_password(format!("secret{}", i));
        form.set_password_confirmation(format!("secret{}", i));

        let view = form.view();
        let labels: Vec<&str> = view.fields.iter().map(|f| f.label).collect();
        assert_eq!(labels, initial_labels);
        assert_eq!(view.fields.len(), 4);
    }
}

#[test]
fn test_rendered_text_masks_passwords() {
    let mut form = SignUpForm::new(NoNetworkClient);
    fill_all(&mut form, "P4ssw0rd", "P4ssw0rd");

    let text = form.view().to_text();
    assert!(text.contains("Sign Up"));
    assert!(text.contains("ユーザー名: User"));
    assert!(text.contains("メールアドレス: user@example.com"));
    assert!(!text.contains("P4ssw0rd"));
}
