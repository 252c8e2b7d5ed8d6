pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::TomlConfig;

pub use adapters::http::HttpSignUpClient;
pub use crate::core::form::SignUpForm;
pub use crate::core::view::FormView;
pub use domain::model::{FormState, SignUpRequest, SubmissionOutcome};
pub use domain::ports::{ConfigProvider, SignUpClient};
pub use utils::error::{Result, SignUpError};
