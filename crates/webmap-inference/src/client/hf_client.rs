//! HuggingFace client implementation.
//!
//! Handles authentication, endpoint resolution and status mapping for the
//! two router capabilities the gateway consumes.

use std::fmt;
use std::sync::Arc;

use reqwest::{Client as HttpClient, ClientBuilder};
use serde::Serialize;
use serde::de::DeserializeOwned;
use url::Url;

use super::HfConfig;
use super::wire::{
    ChatCompletionOutput, ChatCompletionPayload, ClassificationOutput, ClassificationPayload,
};
use crate::chat::{ChatProvider, ChatRequest};
use crate::sentiment::{Classification, ClassificationRequest, SentimentProvider};
use crate::{Error, Result, TRACING_TARGET_CLIENT};

/// Path prefix for models served by the HuggingFace inference backend.
const CLASSIFICATION_PATH: &str = "hf-inference/models/";

/// Path of the OpenAI-compatible chat completion endpoint.
const CHAT_COMPLETION_PATH: &str = "v1/chat/completions";

/// HuggingFace inference client.
///
/// Cheap to clone; clones share one connection pool. Every call is a single
/// round-trip with no retries.
///
/// # Examples
///
/// ```rust,no_run
/// use std::time::Duration;
/// use webmap_inference::{HfClient, HfConfig};
///
/// # fn example() -> webmap_inference::Result<()> {
/// let config = HfConfig::builder()
///     .with_api_token("hf_xxx")
///     .with_timeout(Duration::from_secs(20))
///     .build()?;
///
/// let client = HfClient::new(config)?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct HfClient {
    inner: Arc<HfClientInner>,
}

struct HfClientInner {
    http_client: HttpClient,
    config: HfConfig,
}

impl fmt::Debug for HfClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HfClient")
            .field("config", &self.inner.config)
            .finish_non_exhaustive()
    }
}

impl HfClient {
    /// Create a new client with the given configuration.
    ///
    /// No request is made; the credential is only checked by the provider
    /// on the first call.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the HTTP client cannot be created.
    pub fn new(config: HfConfig) -> Result<Self> {
        tracing::debug!(
            target: TRACING_TARGET_CLIENT,
            base_url = %config.base_url,
            timeout_secs = config.timeout.as_secs(),
            "Creating HuggingFace client"
        );

        let http_client = ClientBuilder::new()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .user_agent(&config.user_agent)
            .build()
            .map_err(|e| {
                Error::configuration()
                    .with_message("failed to build HTTP client")
                    .with_source(e)
            })?;

        Ok(Self {
            inner: Arc::new(HfClientInner {
                http_client,
                config,
            }),
        })
    }

    /// Get the client configuration.
    pub fn config(&self) -> &HfConfig {
        &self.inner.config
    }

    /// Resolves a path relative to the configured base URL.
    fn endpoint(&self, path: &str) -> Result<Url> {
        let mut base = self.inner.config.base_url.clone();
        if !base.path().ends_with('/') {
            let path_with_slash = format!("{}/", base.path());
            base.set_path(&path_with_slash);
        }

        base.join(path).map_err(|e| {
            Error::configuration()
                .with_message(format!("invalid request URL for '{path}': {e}"))
                .with_source(e)
        })
    }

    /// Sends an authenticated JSON POST and decodes a JSON answer.
    async fn post_json<B, R>(&self, url: Url, body: &B) -> Result<R>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        tracing::trace!(
            target: TRACING_TARGET_CLIENT,
            url = %url,
            "Sending provider request"
        );

        let response = self
            .inner
            .http_client
            .post(url)
            .bearer_auth(&self.inner.config.api_token)
            .json(body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();

            tracing::warn!(
                target: TRACING_TARGET_CLIENT,
                status = status.as_u16(),
                "Provider returned an error status"
            );

            return Err(Error::from_status(status.as_u16(), message));
        }

        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

#[async_trait::async_trait]
impl SentimentProvider for HfClient {
    async fn classify_sentiment(&self, request: &ClassificationRequest) -> Result<Classification> {
        let url = self.endpoint(&format!("{CLASSIFICATION_PATH}{}", request.model))?;
        let payload = ClassificationPayload {
            inputs: &request.text,
        };

        let output: ClassificationOutput = self.post_json(url, &payload).await?;

        Classification::top(output.into_candidates()).ok_or_else(|| {
            Error::serialization().with_message("malformed provider response: no labels returned")
        })
    }
}

#[async_trait::async_trait]
impl ChatProvider for HfClient {
    async fn complete_chat(&self, request: &ChatRequest) -> Result<String> {
        let url = self.endpoint(CHAT_COMPLETION_PATH)?;
        let payload = ChatCompletionPayload {
            model: &request.model,
            messages: &request.messages,
            max_tokens: request.max_tokens,
            temperature: request.temperature,
            stream: false,
        };

        let output: ChatCompletionOutput = self.post_json(url, &payload).await?;

        let choice = output.choices.into_iter().next().ok_or_else(|| {
            Error::serialization().with_message("malformed provider response: no choices returned")
        })?;

        Ok(choice.message.content.unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::ErrorKind;
    use crate::chat::ChatMessage;

    const SENTIMENT_MODEL: &str = "lxyuan/distilbert-base-multilingual-cased-sentiments-student";
    const CHAT_MODEL: &str = "meta-llama/Llama-3.2-3B-Instruct";

    fn client_for(server: &MockServer) -> HfClient {
        let config = HfConfig::builder()
            .with_api_token("test-key")
            .with_base_url(&server.uri())
            .unwrap()
            .with_timeout(Duration::from_secs(5))
            .build()
            .unwrap();

        HfClient::new(config).unwrap()
    }

    fn chat_request() -> ChatRequest {
        ChatRequest::new(CHAT_MODEL)
            .with_message(ChatMessage::system("Bạn là hướng dẫn viên du lịch."))
            .with_message(ChatMessage::user("Hội An"))
            .with_max_tokens(100)
            .with_temperature(0.5)
    }

    #[tokio::test]
    async fn classify_sends_bearer_and_picks_top_label() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(format!("/hf-inference/models/{SENTIMENT_MODEL}")))
            .and(header("authorization", "Bearer test-key"))
            .and(body_json(json!({ "inputs": "Great trip!" })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([[
                { "label": "neutral", "score": 0.02 },
                { "label": "positive", "score": 0.97 },
                { "label": "negative", "score": 0.01 }
            ]])))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let request = ClassificationRequest::new(SENTIMENT_MODEL, "Great trip!");
        let result = client.classify_sentiment(&request).await.unwrap();

        assert_eq!(result, Classification::new("positive", 0.97));
    }

    #[tokio::test]
    async fn classify_rejects_empty_label_list() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let request = ClassificationRequest::new(SENTIMENT_MODEL, "text");
        let error = client.classify_sentiment(&request).await.unwrap_err();

        assert_eq!(error.kind(), ErrorKind::Serialization);
    }

    #[tokio::test]
    async fn classify_maps_unauthorized_status() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(401).set_body_string(r#"{"error":"Invalid credentials"}"#),
            )
            .mount(&server)
            .await;

        let client = client_for(&server);
        let request = ClassificationRequest::new(SENTIMENT_MODEL, "text");
        let error = client.classify_sentiment(&request).await.unwrap_err();

        assert_eq!(error.kind(), ErrorKind::Authentication);
        assert!(error.to_string().contains("Invalid credentials"));
        assert!(error.to_string().contains("401"));
    }

    #[tokio::test]
    async fn chat_sends_openai_payload() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .and(header("authorization", "Bearer test-key"))
            .and(body_json(json!({
                "model": CHAT_MODEL,
                "messages": [
                    { "role": "system", "content": "Bạn là hướng dẫn viên du lịch." },
                    { "role": "user", "content": "Hội An" }
                ],
                "max_tokens": 100,
                "temperature": 0.5,
                "stream": false
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "choices": [
                    { "index": 0, "message": { "role": "assistant", "content": "  Phố cổ.  " } }
                ]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let content = client.complete_chat(&chat_request()).await.unwrap();

        assert_eq!(content, "  Phố cổ.  ");
    }

    #[tokio::test]
    async fn chat_without_content_is_empty() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "choices": [ { "message": { "role": "assistant", "content": null } } ]
            })))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let content = client.complete_chat(&chat_request()).await.unwrap();

        assert!(content.is_empty());
    }

    #[tokio::test]
    async fn chat_without_choices_is_malformed() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "choices": [] })))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let error = client.complete_chat(&chat_request()).await.unwrap_err();

        assert_eq!(error.kind(), ErrorKind::Serialization);
    }

    #[tokio::test]
    async fn chat_maps_unavailable_status() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(503).set_body_string("Model is loading"))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let error = client.complete_chat(&chat_request()).await.unwrap_err();

        assert_eq!(error.kind(), ErrorKind::ServiceUnavailable);
        assert_eq!(
            error.to_string(),
            "service_unavailable: provider returned HTTP 503: Model is loading"
        );
    }

    #[tokio::test]
    async fn malformed_json_is_serialization_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let error = client.complete_chat(&chat_request()).await.unwrap_err();

        assert_eq!(error.kind(), ErrorKind::Serialization);
    }

    #[test]
    fn endpoint_keeps_base_path() {
        let config = HfConfig::builder()
            .with_api_token("test-key")
            .with_base_url("https://proxy.example.com/hf")
            .unwrap()
            .build()
            .unwrap();
        let client = HfClient::new(config).unwrap();

        let url = client.endpoint(CHAT_COMPLETION_PATH).unwrap();
        assert_eq!(url.as_str(), "https://proxy.example.com/hf/v1/chat/completions");
    }
}
