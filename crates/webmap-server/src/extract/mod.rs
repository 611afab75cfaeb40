//! Request extractors with gateway-specific rejections.
//!
//! - [`Json`]: JSON body extraction with `{"detail"}` rejections
//! - [`ValidateJson`]: JSON extraction followed by `validator` checks

mod json;
mod validated_json;

pub use json::Json;
pub use validated_json::ValidateJson;
