//! JSON-over-HTTP client that every page loader and mutation goes through.
//!
//! The actual I/O lives behind [`Transport`] so the same client runs on top of
//! browser `fetch`, `reqwest`, or the in-memory [`crate::testing::ScriptedTransport`].

use crate::config::ConsoleConfig;
use crate::error::ApiError;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::rc::Rc;

pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Body fields tried, in order, for a human-readable error message.
const ERROR_MESSAGE_FIELDS: [&str; 3] = ["detail", "message", "error"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(&'static str, String)>,
    pub body: Option<String>,
    /// Send the session cookie along with the request.
    pub include_credentials: bool,
    pub timeout_ms: Option<u32>,
}

impl ApiRequest {
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub status_text: String,
    pub body: String,
}

impl RawResponse {
    #[must_use]
    pub fn new(status: u16, status_text: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            status,
            status_text: status_text.into(),
            body: body.into(),
        }
    }

    /// Response with a JSON body and the canonical reason phrase for `status`.
    #[must_use]
    pub fn json(status: u16, body: &Value) -> Self {
        Self::new(status, canonical_reason(status), body.to_string())
    }

    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}

#[must_use]
pub const fn canonical_reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        201 => "Created",
        204 => "No Content",
        400 => "Bad Request",
        401 => "Unauthorized",
        403 => "Forbidden",
        404 => "Not Found",
        409 => "Conflict",
        422 => "Unprocessable Entity",
        500 => "Internal Server Error",
        502 => "Bad Gateway",
        503 => "Service Unavailable",
        504 => "Gateway Timeout",
        _ => "",
    }
}

/// Platform I/O seam. Implementations perform exactly one network round trip
/// per call and never retry.
#[allow(async_fn_in_trait)]
pub trait Transport {
    /// Send `request` and return whatever status the server answered with.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Transport`] or [`ApiError::Timeout`] when no HTTP
    /// response was received.
    async fn send(&self, request: ApiRequest) -> Result<RawResponse, ApiError>;
}

/// Message shown to the operator for a failed response.
#[must_use]
pub fn error_message(response: &RawResponse) -> String {
    let from_body = serde_json::from_str::<Value>(&response.body)
        .ok()
        .and_then(|body| {
            ERROR_MESSAGE_FIELDS
                .iter()
                .find_map(|field| body.get(field).and_then(Value::as_str).map(str::to_string))
        })
        .filter(|message| !message.trim().is_empty());
    from_body.unwrap_or_else(|| {
        if response.status_text.trim().is_empty() {
            format!("HTTP {}", response.status)
        } else {
            response.status_text.clone()
        }
    })
}

/// Decode a successful body into its canonical schema. An empty body decodes
/// as `{}` so acknowledgement-only endpoints still parse.
///
/// # Errors
///
/// Returns [`ApiError::UnexpectedShape`] when the body does not match `R`.
pub fn decode_body<R: DeserializeOwned>(endpoint: &str, body: &str) -> Result<R, ApiError> {
    let text = if body.trim().is_empty() { "{}" } else { body };
    serde_json::from_str(text).map_err(|err| ApiError::shape(endpoint, err))
}

pub struct HttpClient<T> {
    transport: Rc<T>,
    base: String,
    timeout_ms: Option<u32>,
}

impl<T> Clone for HttpClient<T> {
    fn clone(&self) -> Self {
        Self {
            transport: Rc::clone(&self.transport),
            base: self.base.clone(),
            timeout_ms: self.timeout_ms,
        }
    }
}

impl<T: Transport> HttpClient<T> {
    #[must_use]
    pub fn new(transport: T, config: &ConsoleConfig) -> Self {
        Self {
            transport: Rc::new(transport),
            base: config.api_base.clone(),
            timeout_ms: config.request_timeout_ms,
        }
    }

    #[must_use]
    pub fn transport(&self) -> &T {
        &self.transport
    }

    #[must_use]
    pub fn url_for(&self, path: &str) -> String {
        let base = self.base.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{base}/{path}")
    }

    /// # Errors
    ///
    /// See [`HttpClient::request`].
    pub async fn get<R: DeserializeOwned>(&self, path: &str) -> Result<R, ApiError> {
        self.request(Method::Get, path, None).await
    }

    /// # Errors
    ///
    /// See [`HttpClient::request`].
    pub async fn post<B, R>(&self, path: &str, body: &B) -> Result<R, ApiError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let body = encode(body)?;
        self.request(Method::Post, path, Some(body)).await
    }

    /// POST without a request body.
    ///
    /// # Errors
    ///
    /// See [`HttpClient::request`].
    pub async fn post_empty<R: DeserializeOwned>(&self, path: &str) -> Result<R, ApiError> {
        self.request(Method::Post, path, None).await
    }

    /// # Errors
    ///
    /// See [`HttpClient::request`].
    pub async fn put<B, R>(&self, path: &str, body: &B) -> Result<R, ApiError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let body = encode(body)?;
        self.request(Method::Put, path, Some(body)).await
    }

    /// # Errors
    ///
    /// See [`HttpClient::request`].
    pub async fn delete<R: DeserializeOwned>(&self, path: &str) -> Result<R, ApiError> {
        self.request(Method::Delete, path, None).await
    }

    /// Issue one request and decode the JSON answer.
    ///
    /// # Errors
    ///
    /// * [`ApiError::Transport`] / [`ApiError::Timeout`] when no response arrived.
    /// * [`ApiError::Status`] for any non-2xx status, carrying the body's
    ///   `detail`/`message`/`error` field or the status text.
    /// * [`ApiError::UnexpectedShape`] when a 2xx body does not decode into `R`.
    pub async fn request<R: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<String>,
    ) -> Result<R, ApiError> {
        let url = self.url_for(path);
        let request = ApiRequest {
            method,
            url: url.clone(),
            headers: vec![
                ("Content-Type", JSON_CONTENT_TYPE.to_string()),
                ("Accept", JSON_CONTENT_TYPE.to_string()),
            ],
            body,
            include_credentials: true,
            timeout_ms: self.timeout_ms,
        };
        log::debug!("{} {url}", method.as_str());
        let response = self
            .transport
            .send(request)
            .await
            .inspect_err(|err| log::warn!("{} {url} failed: {err}", method.as_str()))?;
        if !response.is_success() {
            let message = error_message(&response);
            log::warn!(
                "{} {url} answered {}: {message}",
                method.as_str(),
                response.status
            );
            return Err(ApiError::Status {
                status: response.status,
                message,
            });
        }
        decode_body(path, &response.body)
    }
}

fn encode<B: Serialize + ?Sized>(body: &B) -> Result<String, ApiError> {
    serde_json::to_string(body).map_err(|err| ApiError::Encode(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::ScriptedTransport;
    use futures::executor::block_on;
    use serde_json::json;

    fn client(transport: &ScriptedTransport) -> HttpClient<ScriptedTransport> {
        HttpClient::new(transport.clone(), &ConsoleConfig::default())
    }

    #[test]
    fn requests_carry_json_headers_and_credentials() {
        let transport = ScriptedTransport::new();
        transport.respond(Method::Get, "/api/stats/health", 200, json!({"status": "ok"}));
        let value: Value = block_on(client(&transport).get("/stats/health")).unwrap();
        assert_eq!(value["status"], "ok");

        let calls = transport.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].header("content-type"), Some(JSON_CONTENT_TYPE));
        assert!(calls[0].include_credentials);
    }

    #[test]
    fn error_body_detail_becomes_message() {
        let transport = ScriptedTransport::new();
        transport.respond(
            Method::Delete,
            "/api/dice/d1",
            404,
            json!({"detail": "Dice event not found"}),
        );
        let err = block_on(client(&transport).delete::<Value>("dice/d1")).unwrap_err();
        assert_eq!(
            err,
            ApiError::Status {
                status: 404,
                message: "Dice event not found".into()
            }
        );
    }

    #[test]
    fn message_and_error_fields_are_also_read() {
        let with_message = RawResponse::json(400, &json!({"message": "bad input"}));
        assert_eq!(error_message(&with_message), "bad input");
        let with_error = RawResponse::json(400, &json!({"error": "nope"}));
        assert_eq!(error_message(&with_error), "nope");
    }

    #[test]
    fn unparseable_error_body_falls_back_to_status_text() {
        let html = RawResponse::new(502, "Bad Gateway", "<html>upstream down</html>");
        assert_eq!(error_message(&html), "Bad Gateway");
        let bare = RawResponse::new(520, "", "");
        assert_eq!(error_message(&bare), "HTTP 520");
    }

    #[test]
    fn transport_failures_are_surfaced_once() {
        let transport = ScriptedTransport::new();
        transport.fail(
            Method::Get,
            "/api/quiz/list",
            ApiError::Transport("connection refused".into()),
        );
        let err = block_on(client(&transport).get::<Value>("quiz/list")).unwrap_err();
        assert!(matches!(err, ApiError::Transport(_)));
        assert_eq!(transport.call_count(), 1);
    }

    #[test]
    fn mismatched_success_body_is_a_shape_error() {
        #[derive(Debug, serde::Deserialize)]
        struct Needs {
            #[allow(dead_code)]
            count: u32,
        }
        let transport = ScriptedTransport::new();
        transport.respond(Method::Get, "/api/x", 200, json!({"total": 3}));
        let err = block_on(client(&transport).get::<Needs>("x")).unwrap_err();
        assert!(matches!(err, ApiError::UnexpectedShape { ref endpoint, .. } if endpoint == "x"));
    }

    #[test]
    fn url_join_tolerates_slashes() {
        let transport = ScriptedTransport::new();
        let config = ConsoleConfig::default().with_api_base("https://bot.example/api/");
        let client = HttpClient::new(transport, &config);
        assert_eq!(client.url_for("/users/42"), "https://bot.example/api/users/42");
        assert_eq!(client.url_for("users/42"), "https://bot.example/api/users/42");
    }

    #[test]
    fn empty_success_body_decodes_as_object() {
        let ack: crate::schema::MutationAck = decode_body("quiz/x", "").unwrap();
        assert!(ack.success);
    }
}
