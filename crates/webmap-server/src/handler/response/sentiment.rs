//! Sentiment analysis response types.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use webmap_inference::Classification;

/// Maps a raw provider label to its Vietnamese display label.
///
/// Unknown labels are returned unchanged.
pub fn localize_label(label: &str) -> &str {
    match label {
        "positive" => "Tích cực 😊",
        "negative" => "Tiêu cực 😞",
        "neutral" => "Trung lập 😐",
        other => other,
    }
}

/// Scales a `[0, 1]` probability to a percentage rounded to one decimal.
pub fn percentage(score: f64) -> f64 {
    (score * 1000.0).round() / 10.0
}

/// Result of classifying a review.
#[must_use]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SentimentAnalysis {
    /// Localized label.
    pub label: String,
    /// Label exactly as the classifier returned it.
    pub original_label: String,
    /// Confidence as a percentage in `[0, 100]`.
    pub score: f64,
    /// The review that was classified.
    pub review: String,
}

impl SentimentAnalysis {
    /// Builds the response from the top classification and the original review.
    pub fn from_classification(classification: Classification, review: String) -> Self {
        Self {
            label: localize_label(&classification.label).to_owned(),
            score: percentage(classification.score),
            original_label: classification.label,
            review,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_labels_are_localized() {
        assert_eq!(localize_label("positive"), "Tích cực 😊");
        assert_eq!(localize_label("negative"), "Tiêu cực 😞");
        assert_eq!(localize_label("neutral"), "Trung lập 😐");
    }

    #[test]
    fn unknown_label_passes_through() {
        let analysis =
            SentimentAnalysis::from_classification(Classification::new("LABEL_2", 0.5), "ok".into());

        assert_eq!(analysis.label, "LABEL_2");
        assert_eq!(analysis.label, analysis.original_label);
    }

    #[test]
    fn score_is_rounded_percentage() {
        assert_eq!(percentage(0.97), 97.0);
        assert_eq!(percentage(0.123456), 12.3);
        assert_eq!(percentage(0.99999), 100.0);
        assert_eq!(percentage(0.0), 0.0);
    }

    #[test]
    fn serializes_expected_shape() {
        let analysis = SentimentAnalysis::from_classification(
            Classification::new("positive", 0.97),
            "Great trip!".into(),
        );

        assert_eq!(
            serde_json::to_value(&analysis).unwrap(),
            serde_json::json!({
                "label": "Tích cực 😊",
                "original_label": "positive",
                "score": 97.0,
                "review": "Great trip!"
            })
        );
    }
}
