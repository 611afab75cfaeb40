//! Sentiment analysis request types.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use validator::Validate;
use webmap_inference::ClassificationRequest;

use super::validations::validate_not_blank;
use crate::handler::utils::SENTIMENT_MODEL;

/// Request payload for classifying a travel review.
#[must_use]
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Validate)]
pub struct AnalyzeSentiment {
    /// Review text to classify. Must contain at least one non-whitespace character.
    #[validate(custom(function = "validate_not_blank"))]
    pub review: String,
}

impl AnalyzeSentiment {
    /// Builds the classification call for this review.
    pub fn to_classification(&self) -> ClassificationRequest {
        ClassificationRequest::new(SENTIMENT_MODEL, self.review.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_review_fails_validation() {
        let request = AnalyzeSentiment {
            review: "   ".to_owned(),
        };

        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("review"));
    }

    #[test]
    fn classification_uses_sentiment_model() {
        let request = AnalyzeSentiment {
            review: "Great trip!".to_owned(),
        };

        assert!(request.validate().is_ok());
        let classification = request.to_classification();
        assert_eq!(classification.model, SENTIMENT_MODEL);
        assert_eq!(classification.text, "Great trip!");
    }
}
