use anyhow::Context;
use clap::Parser;
use signup_form::utils::{logger, validation::Validate};
use signup_form::{CliConfig, HttpSignUpClient, SignUpForm, SubmissionOutcome};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting signup-form CLI");
    if config.verbose {
        tracing::debug!("API base URL: {}", config.api_base_url);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let client = HttpSignUpClient::from_config(&config).context("failed to build HTTP client")?;
    let mut form = SignUpForm::new(client);
    form.set_username(config.username);
    form.set_email(config.email);
    form.set_password(config.password);
    form.set_password_confirmation(config.password_confirmation);

    println!("{}", form.view().to_text());
    println!();

    match form.submit().await {
        Ok(Some(SubmissionOutcome::Accepted)) => {
            tracing::info!("✅ Registration accepted");
            println!("✅ 登録が完了しました。");
        }
        Ok(Some(SubmissionOutcome::Rejected(message))) => {
            tracing::warn!("Registration rejected: {}", message);
            println!("{}", form.view().to_text());
            std::process::exit(2);
        }
        Ok(None) => {
            tracing::warn!("Submit control is disabled, nothing sent");
            eprintln!("❌ 入力内容を確認してください。");
            std::process::exit(1);
        }
        Err(e) => {
            tracing::error!("❌ Submission failed: {}", e);
            println!("{}", form.view().to_text());
            std::process::exit(3);
        }
    }

    Ok(())
}
