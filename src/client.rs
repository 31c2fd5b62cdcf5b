use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::{Client as ReqwestClient, StatusCode, header};

use crate::config::Config;
use crate::error::{Error, Result};
use crate::transcript::Transcript;
use crate::types::{ChatRequest, ChatResponse, Message};

/// Fixed request timeout. There is no cancellation mechanism for an
/// in-flight request; after this deadline the call surfaces as a network
/// error.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Client for an OpenAI-compatible chat completions endpoint.
///
/// Calls are strictly sequential: the interactive loop drives one request at
/// a time and the client holds no mutable state.
#[derive(Debug, Clone)]
pub struct ChatClient {
    api_url: String,
    auth_header: HeaderValue,
    model: String,
    client: ReqwestClient,
    timeout: Duration,
}

impl ChatClient {
    /// Create a new chat client from a loaded configuration.
    pub fn new(config: &Config) -> Result<Self> {
        Self::with_timeout(config, DEFAULT_TIMEOUT)
    }

    /// Create a new chat client with a custom timeout.
    pub fn with_timeout(config: &Config, timeout: Duration) -> Result<Self> {
        let auth_header = HeaderValue::from_str(&format!("Bearer {}", config.api_key))
            .map_err(|e| {
                Error::http_client(
                    format!("API key is not a valid header value: {e}"),
                    Some(Box::new(e)),
                )
            })?;

        let client = ReqwestClient::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| {
                Error::http_client(
                    format!("Failed to build HTTP client: {e}"),
                    Some(Box::new(e)),
                )
            })?;

        Ok(Self {
            api_url: config.api_url.clone(),
            auth_header,
            model: config.model.clone(),
            client,
            timeout,
        })
    }

    /// Returns the configured endpoint URL.
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Returns the configured model name.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Create and return default headers for API requests.
    fn default_headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );
        headers.insert(header::AUTHORIZATION, self.auth_header.clone());
        headers
    }

    /// Send one turn of the conversation and return the assistant's reply.
    ///
    /// The user message is appended to the transcript before the network
    /// call, so a failed call leaves the unanswered user turn in context for
    /// the next attempt. The assistant message is appended only on success.
    ///
    /// # Errors
    ///
    /// - `Error::Serialization` if the request body cannot be encoded.
    /// - `Error::Timeout` / `Error::Connection` on transport failure.
    /// - `Error::Api` with the raw body if the HTTP status is not 200.
    ///   No retry, no backoff.
    /// - `Error::Deserialization` if the body is not a chat completion.
    /// - `Error::EmptyResponse` if the choice list is empty.
    pub async fn send(&self, transcript: &mut Transcript, user_input: &str) -> Result<String> {
        transcript.push(Message::user(user_input));

        let request = ChatRequest::new(&self.model, transcript.messages().to_vec());
        let body = serde_json::to_string(&request)
            .map_err(|e| Error::serialization(format!("error encoding request: {e}"), Some(Box::new(e))))?;

        let response = self
            .client
            .post(&self.api_url)
            .headers(self.default_headers())
            .body(body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    Error::timeout(
                        format!("Request timed out: {e}"),
                        Some(self.timeout.as_secs_f64()),
                    )
                } else if e.is_connect() {
                    Error::connection(format!("Connection error: {e}"), Some(Box::new(e)))
                } else {
                    Error::http_client(format!("Request failed: {e}"), Some(Box::new(e)))
                }
            })?;

        let status = response.status();
        let text = response.text().await.map_err(|e| {
            Error::http_client(
                format!("Failed to read response body: {e}"),
                Some(Box::new(e)),
            )
        })?;

        if status != StatusCode::OK {
            return Err(Error::api(status.as_u16(), text));
        }

        let parsed: ChatResponse = serde_json::from_str(&text).map_err(|e| {
            Error::deserialization(format!("Failed to parse response: {e}"), Some(Box::new(e)))
        })?;

        let Some(choice) = parsed.choices.into_iter().next() else {
            return Err(Error::empty_response());
        };

        let content = choice.message.content;
        transcript.push(Message::assistant(content.clone()));
        Ok(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> Config {
        Config {
            api_url: "https://api.example.com/v1/chat/completions".to_string(),
            api_key: "sk-test".to_string(),
            model: "gpt-4".to_string(),
        }
    }

    #[test]
    fn client_creation() {
        let client = ChatClient::new(&test_config()).unwrap();
        assert_eq!(client.api_url(), "https://api.example.com/v1/chat/completions");
        assert_eq!(client.model(), "gpt-4");
        assert_eq!(client.timeout, DEFAULT_TIMEOUT);

        let client = ChatClient::with_timeout(&test_config(), Duration::from_secs(5)).unwrap();
        assert_eq!(client.timeout, Duration::from_secs(5));
    }

    #[test]
    fn bearer_header_from_config() {
        let client = ChatClient::new(&test_config()).unwrap();
        let headers = client.default_headers();
        assert_eq!(
            headers.get(header::AUTHORIZATION).unwrap(),
            "Bearer sk-test"
        );
        assert_eq!(
            headers.get(header::CONTENT_TYPE).unwrap(),
            "application/json"
        );
    }

    #[test]
    fn invalid_key_rejected_at_construction() {
        let mut config = test_config();
        config.api_key = "bad\nkey".to_string();
        let err = ChatClient::new(&config).unwrap_err();
        assert!(matches!(err, Error::HttpClient { .. }));
    }
}
