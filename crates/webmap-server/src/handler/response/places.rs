//! Place recommendation and summary response types.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::handler::utils::completion_or;

/// Returned when the model suggests nothing.
const NO_RECOMMENDATIONS: &str = "Không có gợi ý.";

/// Returned when the model describes nothing.
const NO_SUMMARY: &str = "Không có thông tin.";

/// Places worth visiting near a location.
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct PlaceRecommendations {
    /// Free-text suggestions.
    pub recommendations: String,
    /// Location echoed from the request.
    pub location: String,
}

impl PlaceRecommendations {
    /// Builds the response from a raw completion.
    pub fn from_completion(completion: &str, location: String) -> Self {
        Self {
            recommendations: completion_or(completion, NO_RECOMMENDATIONS),
            location,
        }
    }
}

/// Short description of a location.
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct PlaceSummary {
    /// Two or three sentences about the place.
    pub summary: String,
    /// Location echoed from the request.
    pub location: String,
}

impl PlaceSummary {
    /// Builds the response from a raw completion.
    pub fn from_completion(completion: &str, location: String) -> Self {
        Self {
            summary: completion_or(completion, NO_SUMMARY),
            location,
        }
    }
}
