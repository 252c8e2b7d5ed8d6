pub mod form;
pub mod view;

pub use crate::domain::model::{FormState, SignUpRequest, SubmissionOutcome};
pub use crate::domain::ports::{ConfigProvider, SignUpClient};
pub use crate::utils::error::Result;
