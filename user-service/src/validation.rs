// Validation
// Loose email check and opt-in entity validation

use crate::error::{ServiceError, ServiceResult};
use crate::models::User;

/// Returns true if `email` contains an `@`.
///
/// This is deliberately loose: `"@"` passes and `"a@b"` passes.
pub fn validate_email(email: &str) -> bool {
    email.contains('@')
}

/// A trait for entities that can be validated
pub trait Validatable {
    fn validate(&self) -> ServiceResult<()>;

    fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}

impl Validatable for User {
    fn validate(&self) -> ServiceResult<()> {
        if self.name.is_empty() {
            return Err(ServiceError::InvalidInput(
                "Name cannot be empty".to_string(),
            ));
        }
        if !validate_email(&self.email) {
            return Err(ServiceError::InvalidInput(
                "Invalid email format".to_string(),
            ));
        }
        Ok(())
    }
}
