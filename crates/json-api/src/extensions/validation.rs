//! Request validation helpers.

use salvo::prelude::StatusError;
use validator::Validate;

/// Run `validator` rules on a decoded body, mapping failures to `400 Bad Request`.
pub(crate) trait ValidateExt: Sized {
    fn validated_or_400(self, brief: &str) -> Result<Self, StatusError>;
}

impl<T: Validate> ValidateExt for T {
    fn validated_or_400(self, brief: &str) -> Result<Self, StatusError> {
        match self.validate() {
            Ok(()) => Ok(self),
            Err(errors) => Err(StatusError::bad_request()
                .brief(brief)
                .detail(errors.to_string())),
        }
    }
}
