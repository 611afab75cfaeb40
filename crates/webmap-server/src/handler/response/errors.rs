//! Error response body.

use std::borrow::Cow;

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use schemars::JsonSchema;
use serde::Serialize;

/// Body returned for every failed request.
///
/// Carries a single human-readable `detail` string, for example the raw
/// provider error text when an upstream call fails.
#[must_use]
#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct ErrorResponse<'a> {
    /// Description of what went wrong.
    pub detail: Cow<'a, str>,

    /// HTTP status code, not serialized.
    #[serde(skip)]
    #[schemars(skip)]
    pub status: StatusCode,
}

impl<'a> ErrorResponse<'a> {
    pub const BAD_REQUEST: Self = Self::new("Bad Request", StatusCode::BAD_REQUEST);
    pub const GATEWAY_TIMEOUT: Self = Self::new("Gateway Timeout", StatusCode::GATEWAY_TIMEOUT);
    pub const INTERNAL_SERVER_ERROR: Self =
        Self::new("Internal Server Error", StatusCode::INTERNAL_SERVER_ERROR);
    pub const NOT_FOUND: Self = Self::new("Not Found", StatusCode::NOT_FOUND);
    pub const UNPROCESSABLE_ENTITY: Self =
        Self::new("Unprocessable Entity", StatusCode::UNPROCESSABLE_ENTITY);

    /// Creates a new [`ErrorResponse`] with a static detail.
    #[inline]
    pub const fn new(detail: &'static str, status: StatusCode) -> Self {
        Self {
            detail: Cow::Borrowed(detail),
            status,
        }
    }

    /// Replaces the detail.
    #[inline]
    pub fn with_detail(mut self, detail: impl Into<Cow<'a, str>>) -> Self {
        self.detail = detail.into();
        self
    }

    /// Converts this response into an owned version.
    pub fn into_owned(self) -> ErrorResponse<'static> {
        ErrorResponse {
            detail: Cow::Owned(self.detail.into_owned()),
            status: self.status,
        }
    }
}

impl IntoResponse for ErrorResponse<'_> {
    fn into_response(self) -> Response {
        (self.status, Json(self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_only_detail() {
        let response = ErrorResponse::INTERNAL_SERVER_ERROR.with_detail("boom");
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json, serde_json::json!({ "detail": "boom" }));
    }

    #[test]
    fn constants_carry_status() {
        assert_eq!(ErrorResponse::NOT_FOUND.status, StatusCode::NOT_FOUND);
        assert_eq!(ErrorResponse::BAD_REQUEST.status, StatusCode::BAD_REQUEST);
        assert_eq!(
            ErrorResponse::UNPROCESSABLE_ENTITY.status,
            StatusCode::UNPROCESSABLE_ENTITY
        );
    }
}
