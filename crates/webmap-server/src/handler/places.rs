//! Place recommendation and summary handlers.

use aide::axum::ApiRouter;
use aide::transform::TransformOperation;
use axum::extract::State;
use axum::http::StatusCode;
use webmap_inference::InferenceService;

use crate::extract::{Json, ValidateJson};
use crate::handler::Result;
use crate::handler::request::PlaceQuery;
use crate::handler::response::{ErrorResponse, PlaceRecommendations, PlaceSummary};
use crate::service::ServiceState;

/// Tracing target for place operations.
const TRACING_TARGET: &str = "webmap_server::handler::places";

/// Suggests three places to visit near a location.
#[tracing::instrument(
    skip_all,
    fields(
        location = %request.location,
        has_preferences = request.preferences.is_some(),
    )
)]
async fn recommend_places(
    State(inference): State<InferenceService>,
    ValidateJson(request): ValidateJson<PlaceQuery>,
) -> Result<(StatusCode, Json<PlaceRecommendations>)> {
    tracing::debug!(target: TRACING_TARGET, "Recommending places");

    let completion = inference
        .complete_chat(&request.to_recommend_request())
        .await?;
    let response = PlaceRecommendations::from_completion(&completion, request.location);

    tracing::info!(target: TRACING_TARGET, "Places recommended");

    Ok((StatusCode::OK, Json(response)))
}

fn recommend_places_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Recommend places")
        .description("Suggests three places near a location, optionally matching preferences.")
        .response::<200, Json<PlaceRecommendations>>()
        .response::<400, Json<ErrorResponse>>()
        .response::<422, Json<ErrorResponse>>()
        .response::<500, Json<ErrorResponse>>()
}

/// Describes a location in two or three sentences.
#[tracing::instrument(skip_all, fields(location = %request.location))]
async fn summarize_place(
    State(inference): State<InferenceService>,
    ValidateJson(request): ValidateJson<PlaceQuery>,
) -> Result<(StatusCode, Json<PlaceSummary>)> {
    tracing::debug!(target: TRACING_TARGET, "Summarizing place");

    let completion = inference
        .complete_chat(&request.to_summary_request())
        .await?;
    let response = PlaceSummary::from_completion(&completion, request.location);

    tracing::info!(target: TRACING_TARGET, "Place summarized");

    Ok((StatusCode::OK, Json(response)))
}

fn summarize_place_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Summarize place")
        .description("Returns a short description of a location. Preferences are ignored.")
        .response::<200, Json<PlaceSummary>>()
        .response::<400, Json<ErrorResponse>>()
        .response::<422, Json<ErrorResponse>>()
        .response::<500, Json<ErrorResponse>>()
}

/// Returns a [`Router`] with all place routes.
///
/// [`Router`]: axum::routing::Router
pub fn routes() -> ApiRouter<ServiceState> {
    use aide::axum::routing::*;

    ApiRouter::new()
        .api_route(
            "/recommend/places",
            post_with(recommend_places, recommend_places_docs),
        )
        .api_route(
            "/summarize/place",
            post_with(summarize_place, summarize_place_docs),
        )
        .with_path_items(|item| item.tag("Places"))
}
