//! Public contact form submissions.

use serde::Deserialize;
use validator::Validate;

use crate::error::CoreError;

/// Body of `POST /api/v1/contact`.
///
/// Missing fields deserialize as empty strings so that they fail validation
/// with a readable message instead of a JSON rejection.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(default)]
pub struct ContactSubmission {
    #[validate(length(min = 1, max = 200, message = "Name is required"))]
    pub name: String,
    #[validate(email(message = "A valid email address is required"))]
    pub email: String,
    #[validate(length(min = 1, max = 5000, message = "Message is required"))]
    pub message: String,
}

impl ContactSubmission {
    /// Trim every field and validate the result.
    pub fn into_validated(self) -> Result<Self, CoreError> {
        let submission = Self {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            message: self.message.trim().to_string(),
        };
        submission
            .validate()
            .map_err(|e| CoreError::Validation(e.to_string().replace('\n', "; ")))?;
        Ok(submission)
    }
}
