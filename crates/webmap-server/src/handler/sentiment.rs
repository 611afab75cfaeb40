//! Review sentiment classification handler.

use aide::axum::ApiRouter;
use aide::transform::TransformOperation;
use axum::extract::State;
use axum::http::StatusCode;
use webmap_inference::InferenceService;

use crate::extract::{Json, ValidateJson};
use crate::handler::Result;
use crate::handler::request::AnalyzeSentiment;
use crate::handler::response::{ErrorResponse, SentimentAnalysis};
use crate::service::ServiceState;

/// Tracing target for sentiment operations.
const TRACING_TARGET: &str = "webmap_server::handler::sentiment";

/// Classifies a travel review as positive, negative or neutral.
#[tracing::instrument(skip_all, fields(review_length = request.review.chars().count()))]
async fn analyze_sentiment(
    State(inference): State<InferenceService>,
    ValidateJson(request): ValidateJson<AnalyzeSentiment>,
) -> Result<(StatusCode, Json<SentimentAnalysis>)> {
    tracing::debug!(target: TRACING_TARGET, "Analyzing review sentiment");

    let classification = inference
        .classify_sentiment(&request.to_classification())
        .await?;
    let response = SentimentAnalysis::from_classification(classification, request.review);

    tracing::info!(
        target: TRACING_TARGET,
        label = %response.original_label,
        score = response.score,
        "Review sentiment analyzed",
    );

    Ok((StatusCode::OK, Json(response)))
}

fn analyze_sentiment_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Analyze sentiment")
        .description(
            "Classifies a review with a multilingual sentiment model and returns the \
             localized label with a percentage score.",
        )
        .response::<200, Json<SentimentAnalysis>>()
        .response::<400, Json<ErrorResponse>>()
        .response::<422, Json<ErrorResponse>>()
        .response::<500, Json<ErrorResponse>>()
}

/// Returns a [`Router`] with the sentiment route.
///
/// [`Router`]: axum::routing::Router
pub fn routes() -> ApiRouter<ServiceState> {
    use aide::axum::routing::*;

    ApiRouter::new()
        .api_route(
            "/analyze/sentiment",
            post_with(analyze_sentiment, analyze_sentiment_docs),
        )
        .with_path_items(|item| item.tag("Sentiment"))
}

#[cfg(test)]
mod tests {
    use webmap_inference::ErrorKind as InferenceErrorKind;
    use webmap_inference::mock::MockProvider;

    use super::*;
    use crate::handler::test::create_test_server_with_provider;
    use crate::handler::utils::SENTIMENT_MODEL;

    #[tokio::test]
    async fn positive_review() -> anyhow::Result<()> {
        let provider = MockProvider::new().with_classification("positive", 0.97);
        let server = create_test_server_with_provider(|_| routes(), provider.clone())?;

        let response = server
            .post("/analyze/sentiment")
            .json(&serde_json::json!({ "review": "Great trip!" }))
            .await;

        response.assert_status_ok();
        response.assert_json(&serde_json::json!({
            "label": "Tích cực 😊",
            "original_label": "positive",
            "score": 97.0,
            "review": "Great trip!"
        }));

        let requests = provider.classification_requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].model, SENTIMENT_MODEL);
        assert_eq!(requests[0].text, "Great trip!");

        Ok(())
    }

    #[tokio::test]
    async fn review_is_echoed_verbatim() -> anyhow::Result<()> {
        let provider = MockProvider::new().with_classification("neutral", 0.5);
        let server = create_test_server_with_provider(|_| routes(), provider)?;

        let review = "  Bình thường thôi.\n";
        let response = server
            .post("/analyze/sentiment")
            .json(&serde_json::json!({ "review": review }))
            .await;

        let body = response.json::<SentimentAnalysis>();
        assert_eq!(body.review, review);
        assert_eq!(body.label, "Trung lập 😐");
        assert_eq!(body.score, 50.0);

        Ok(())
    }

    #[tokio::test]
    async fn blank_review_is_rejected_before_provider_call() -> anyhow::Result<()> {
        let provider = MockProvider::new();
        let server = create_test_server_with_provider(|_| routes(), provider.clone())?;

        let response = server
            .post("/analyze/sentiment")
            .json(&serde_json::json!({ "review": "   " }))
            .await;

        response.assert_status_bad_request();
        assert!(provider.classification_requests().is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn missing_review_is_unprocessable() -> anyhow::Result<()> {
        let server = create_test_server_with_provider(|_| routes(), MockProvider::new())?;

        let response = server
            .post("/analyze/sentiment")
            .json(&serde_json::json!({}))
            .await;

        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);

        Ok(())
    }

    #[tokio::test]
    async fn provider_failure_is_internal_error() -> anyhow::Result<()> {
        let provider = MockProvider::new()
            .with_classification_error(InferenceErrorKind::ServiceUnavailable, "model is loading");
        let server = create_test_server_with_provider(|_| routes(), provider)?;

        let response = server
            .post("/analyze/sentiment")
            .json(&serde_json::json!({ "review": "Great trip!" }))
            .await;

        response.assert_status_internal_server_error();
        response.assert_json(&serde_json::json!({
            "detail": "service_unavailable: model is loading"
        }));

        Ok(())
    }
}
