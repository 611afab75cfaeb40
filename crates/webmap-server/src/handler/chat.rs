//! Travel assistant chat handler.
//!
//! Unlike the other inference routes, provider failures here never produce
//! an error status. The caller always receives `200 OK` with either the
//! model's answer or an apology quoting the error.

use aide::axum::ApiRouter;
use aide::transform::TransformOperation;
use axum::extract::State;
use axum::http::StatusCode;
use webmap_inference::InferenceService;

use crate::extract::Json;
use crate::handler::request::TravelChat;
use crate::handler::response::{ErrorResponse, TravelChatReply};
use crate::handler::utils::completion_or;
use crate::service::ServiceState;

/// Tracing target for chat operations.
const TRACING_TARGET: &str = "webmap_server::handler::chat";

/// Returned when the model produced no text.
const NO_REPLY: &str = "Xin lỗi, không có phản hồi.";

/// Answers a travel question, optionally grounded in the user's location.
#[tracing::instrument(
    skip_all,
    fields(
        has_context = request.context.is_some(),
        max_tokens = request.max_tokens,
    )
)]
async fn travel_chat(
    State(inference): State<InferenceService>,
    Json(request): Json<TravelChat>,
) -> (StatusCode, Json<TravelChatReply>) {
    tracing::debug!(target: TRACING_TARGET, "Answering travel question");

    let reply = match inference.complete_chat(&request.to_chat_request()).await {
        Ok(completion) => {
            tracing::info!(target: TRACING_TARGET, "Travel question answered");
            TravelChatReply::answered(completion_or(&completion, NO_REPLY), request.context)
        }
        Err(error) => {
            tracing::warn!(
                target: TRACING_TARGET,
                error = %error,
                kind = %error.kind(),
                "Travel chat degraded",
            );
            TravelChatReply::degraded(error.to_string())
        }
    };

    (StatusCode::OK, Json(reply))
}

fn travel_chat_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Travel chat")
        .description(
            "Asks the travel assistant a question. Provider failures are reported inside \
             a 200 response with an `error` field instead of an error status.",
        )
        .response::<200, Json<TravelChatReply>>()
        .response::<400, Json<ErrorResponse>>()
        .response::<422, Json<ErrorResponse>>()
}

/// Returns a [`Router`] with the chat route.
///
/// [`Router`]: axum::routing::Router
pub fn routes() -> ApiRouter<ServiceState> {
    use aide::axum::routing::*;

    ApiRouter::new()
        .api_route("/chat/travel", post_with(travel_chat, travel_chat_docs))
        .with_path_items(|item| item.tag("Chat"))
}
