//! Conversion from provider errors into HTTP errors.

use webmap_inference::Error as InferenceError;

use super::{Error, ErrorKind};

impl From<InferenceError> for Error<'static> {
    /// Surfaces the raw provider error text as the response detail.
    fn from(error: InferenceError) -> Self {
        let context = format!("provider error kind: {}", error.kind());

        ErrorKind::InternalServerError
            .with_message(error.to_string())
            .with_context(context)
    }
}

#[cfg(test)]
mod tests {
    use webmap_inference::ErrorKind as InferenceErrorKind;

    use super::*;

    #[test]
    fn provider_errors_become_internal_errors() {
        let error: Error = InferenceError::new(InferenceErrorKind::RateLimited)
            .with_message("provider returned HTTP 429")
            .into();

        assert_eq!(error.kind(), ErrorKind::InternalServerError);
        assert_eq!(
            error.message(),
            Some("rate_limited: provider returned HTTP 429")
        );
    }
}
