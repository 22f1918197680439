//! HttpResponder - REST client for the avatar chat service.
//!
//! Configuration priority: explicit base URL > `KAIWA_RESPONDER_URL`
//! environment variable.

use std::env;
use std::time::Duration;

use async_trait::async_trait;
use kaiwa_core::error::{ChatError, Result};
use kaiwa_core::responder::{ReplyEnvelope, ReplyRequest, Responder};
use reqwest::Client;
use reqwest::multipart::Form;

const ENV_BASE_URL: &str = "KAIWA_RESPONDER_URL";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Responder implementation that talks to the avatar chat HTTP API.
///
/// The service expects a multipart form with `user_name` and `message`
/// fields posted to `/avatar/{actor_id}/chat` and answers with a JSON body
/// in one of the [`ReplyEnvelope`] shapes. Every transport failure, non-2xx
/// status, or unparseable body maps to [`ChatError::Responder`]; no retry
/// logic lives here.
#[derive(Debug, Clone)]
pub struct HttpResponder {
    client: Client,
    base_url: String,
    timeout: Duration,
}

impl HttpResponder {
    /// Creates a client for the service at `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Loads the base URL from the `KAIWA_RESPONDER_URL` environment
    /// variable.
    ///
    /// # Errors
    ///
    /// Returns an error if the variable is not set.
    pub fn try_from_env() -> Result<Self> {
        let base_url = env::var(ENV_BASE_URL)
            .map_err(|_| ChatError::responder(format!("{ENV_BASE_URL} is not set")))?;
        Ok(Self::new(base_url))
    }

    /// Overrides the per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn chat_url(&self, actor_id: &str) -> String {
        format!(
            "{}/avatar/{}/chat",
            self.base_url.trim_end_matches('/'),
            actor_id
        )
    }
}

#[async_trait]
impl Responder for HttpResponder {
    async fn respond(&self, request: ReplyRequest) -> Result<ReplyEnvelope> {
        let url = self.chat_url(&request.actor_id);
        let form = Form::new()
            .text("user_name", request.actor_id.clone())
            .text("message", request.message.clone());

        tracing::debug!("posting chat message to {}", url);
        let response = self
            .client
            .post(&url)
            .timeout(self.timeout)
            .multipart(form)
            .send()
            .await
            .map_err(|err| ChatError::responder(format!("request failed: {err}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(ChatError::responder(format!(
                "responder returned {status}: {body}"
            )));
        }

        response
            .json::<ReplyEnvelope>()
            .await
            .map_err(|err| ChatError::responder(format!("malformed reply body: {err}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chat_url_joins_cleanly() {
        let responder = HttpResponder::new("https://api.example.com");
        assert_eq!(
            responder.chat_url("taro"),
            "https://api.example.com/avatar/taro/chat"
        );

        let trailing = HttpResponder::new("https://api.example.com/");
        assert_eq!(
            trailing.chat_url("taro"),
            "https://api.example.com/avatar/taro/chat"
        );
    }

    #[test]
    fn try_from_env_requires_the_variable() {
        // Scoped to a name no other test uses.
        unsafe { env::remove_var(ENV_BASE_URL) };
        let err = HttpResponder::try_from_env().unwrap_err();
        assert!(err.is_responder());
    }
}
