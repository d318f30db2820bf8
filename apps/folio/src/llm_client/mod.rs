/// LLM Client: the single point of entry for all text-generation calls in Folio.
///
/// ARCHITECTURAL RULE: No other module may call the generation endpoint directly.
/// All LLM interactions MUST go through this module.
///
/// The endpoint speaks the chat-completions dialect (Perplexity, OpenAI-compatible):
/// `{model, messages, temperature, top_p, max_tokens, stream}` in,
/// `{choices: [{message: {content}}]}` out.
use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

/// Low temperature keeps the generated markup close to the style guide.
const TEMPERATURE: f32 = 0.3;
const TOP_P: f32 = 0.95;
const MAX_TOKENS: u32 = 6000;
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(120);

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("request timed out after {0:?}")]
    Timeout(Duration),

    #[error("HTTP error: {0}")]
    Http(#[source] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("response has no choices[0].message.content")]
    MissingContent,

    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
    temperature: f32,
    top_p: f32,
    max_tokens: u32,
    stream: bool,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct ChatResponse {
    #[serde(default)]
    pub choices: Vec<Choice>,
    pub usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: Option<ChoiceMessage>,
}

#[derive(Debug, Deserialize)]
pub struct ChoiceMessage {
    pub content: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Usage {
    pub prompt_tokens: Option<u32>,
    pub completion_tokens: Option<u32>,
}

impl ChatResponse {
    /// Extracts the text content of the first choice.
    pub fn text(&self) -> Option<&str> {
        self.choices
            .first()
            .and_then(|c| c.message.as_ref())
            .and_then(|m| m.content.as_deref())
    }
}

#[derive(Debug, Deserialize)]
struct ApiError {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

/// The single LLM client used by Folio.
/// Wraps a chat-completions endpoint with bearer auth and a fixed request timeout.
/// Calls are never retried; retry policy belongs to the caller.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    api_key: String,
    api_url: String,
    model: String,
    timeout: Duration,
}

impl LlmClient {
    pub fn with_timeout(
        api_key: String,
        api_url: String,
        model: String,
        timeout: Duration,
    ) -> Result<Self, LlmError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(LlmError::Client)?;

        Ok(Self {
            client,
            api_key,
            api_url,
            model,
            timeout,
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Sends one system + user exchange and returns the parsed response object.
    pub async fn call(&self, system: &str, prompt: &str) -> Result<ChatResponse, LlmError> {
        let request_body = ChatRequest {
            model: &self.model,
            messages: [
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
            temperature: TEMPERATURE,
            top_p: TOP_P,
            max_tokens: MAX_TOKENS,
            stream: false,
        };

        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .header("content-type", "application/json")
            .json(&request_body)
            .send()
            .await
            .map_err(|e| self.classify(e))?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.map_err(|e| self.classify(e))?;
            warn!("LLM API returned {}: {}", status, body);
            let message = serde_json::from_str::<ApiError>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await.map_err(|e| self.classify(e))?;
        let chat_response: ChatResponse = serde_json::from_str(&body)?;

        if let Some(usage) = &chat_response.usage {
            debug!(
                "LLM call succeeded: prompt_tokens={:?}, completion_tokens={:?}",
                usage.prompt_tokens, usage.completion_tokens
            );
        }

        Ok(chat_response)
    }

    /// Calls the LLM and returns the text of the first choice.
    pub async fn call_text(&self, system: &str, prompt: &str) -> Result<String, LlmError> {
        let response = self.call(system, prompt).await?;
        response
            .text()
            .map(str::to_owned)
            .ok_or(LlmError::MissingContent)
    }

    fn classify(&self, error: reqwest::Error) -> LlmError {
        if error.is_timeout() {
            LlmError::Timeout(self.timeout)
        } else {
            LlmError::Http(error)
        }
    }
}

/// Strips ```html ... ``` or ``` ... ``` code fences from LLM output.
pub fn strip_code_fences(text: &str) -> &str {
    let text = text.trim();
    let Some(rest) = text.strip_prefix("```") else {
        return text;
    };
    // Drop the info string (`html`, `HTML`, ...) on the opening fence line.
    let rest = rest.trim_start_matches(|c: char| c.is_ascii_alphanumeric());
    let rest = rest.trim_start();
    rest.strip_suffix("```").map(str::trim).unwrap_or(rest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> LlmClient {
        LlmClient::with_timeout(
            "test-key".to_string(),
            format!("{}/chat/completions", server.uri()),
            "sonar".to_string(),
            DEFAULT_TIMEOUT,
        )
        .unwrap()
    }

    #[test]
    fn test_strip_code_fences_with_html_tag() {
        let input = "```html\n<!DOCTYPE html><html></html>\n```";
        assert_eq!(strip_code_fences(input), "<!DOCTYPE html><html></html>");
    }

    #[test]
    fn test_strip_code_fences_without_tag() {
        let input = "```\n<p>hi</p>\n```";
        assert_eq!(strip_code_fences(input), "<p>hi</p>");
    }

    #[test]
    fn test_strip_code_fences_no_fences() {
        let input = "  <p>hi</p>  ";
        assert_eq!(strip_code_fences(input), "<p>hi</p>");
    }

    #[test]
    fn test_strip_code_fences_unterminated() {
        let input = "```html\n<p>hi</p>";
        assert_eq!(strip_code_fences(input), "<p>hi</p>");
    }

    #[tokio::test]
    async fn test_call_sends_chat_payload_with_bearer_auth() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .and(header("authorization", "Bearer test-key"))
            .and(body_partial_json(serde_json::json!({
                "model": "sonar",
                "stream": false,
                "max_tokens": 6000,
                "messages": [{"role": "system"}, {"role": "user"}]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "choices": [{"message": {"role": "assistant", "content": "hello"}}],
                "usage": {"prompt_tokens": 10, "completion_tokens": 1}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let text = client_for(&server).call_text("sys", "user").await.unwrap();
        assert_eq!(text, "hello");
    }

    #[tokio::test]
    async fn test_call_maps_error_status_to_api_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
                "error": {"message": "invalid api key"}
            })))
            .mount(&server)
            .await;

        let err = client_for(&server).call("sys", "user").await.unwrap_err();
        match err {
            LlmError::Api { status, message } => {
                assert_eq!(status, 401);
                assert_eq!(message, "invalid api key");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_call_text_without_choices_is_missing_content() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"choices": []})),
            )
            .mount(&server)
            .await;

        let err = client_for(&server).call_text("sys", "user").await.unwrap_err();
        assert!(matches!(err, LlmError::MissingContent));
    }

    #[tokio::test]
    async fn test_call_times_out() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_delay(Duration::from_secs(2))
                    .set_body_json(serde_json::json!({"choices": []})),
            )
            .mount(&server)
            .await;

        let client = LlmClient::with_timeout(
            "test-key".to_string(),
            format!("{}/chat/completions", server.uri()),
            "sonar".to_string(),
            Duration::from_millis(200),
        )
        .unwrap();

        let err = client.call("sys", "user").await.unwrap_err();
        assert!(matches!(err, LlmError::Timeout(_)), "got {err:?}");
    }

    #[tokio::test]
    async fn test_error_body_stall_is_a_timeout() {
        use tokio::io::{AsyncReadExt, AsyncWriteExt};

        // Status line and headers arrive at once, the error body never completes.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 4096];
            while !String::from_utf8_lossy(&request).contains("\"stream\":false}") {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    return;
                }
                request.extend_from_slice(&buf[..n]);
            }
            socket
                .write_all(
                    b"HTTP/1.1 503 Service Unavailable\r\n\
                      content-type: application/json\r\n\
                      content-length: 100\r\n\r\n{\"error\":",
                )
                .await
                .unwrap();
            tokio::time::sleep(Duration::from_secs(5)).await;
        });

        let client = LlmClient::with_timeout(
            "test-key".to_string(),
            format!("http://{addr}/chat/completions"),
            "sonar".to_string(),
            Duration::from_millis(300),
        )
        .unwrap();

        let err = client.call("sys", "user").await.unwrap_err();
        assert!(matches!(err, LlmError::Timeout(_)), "got {err:?}");
    }
}
