//! `reqwest` implementation of the console transport.

use std::time::Duration;

use reqwest::Client;
use zodiac_core::{ApiError, ApiRequest, Method, RawResponse, Transport};

#[derive(Debug, Clone)]
pub struct Credentials {
    pub user: String,
    pub password: String,
}

/// Talks to the admin API over HTTP. The session cookie jar is kept for the
/// lifetime of the client; basic auth is attached when credentials are set.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
    credentials: Option<Credentials>,
}

impl ReqwestTransport {
    /// # Errors
    ///
    /// Fails when the TLS backend cannot be initialised.
    pub fn new(credentials: Option<Credentials>) -> reqwest::Result<Self> {
        let client = Client::builder().cookie_store(true).build()?;
        Ok(Self {
            client,
            credentials,
        })
    }
}

fn http_method(method: Method) -> reqwest::Method {
    match method {
        Method::Get => reqwest::Method::GET,
        Method::Post => reqwest::Method::POST,
        Method::Put => reqwest::Method::PUT,
        Method::Delete => reqwest::Method::DELETE,
    }
}

fn classify(url: &str, err: &reqwest::Error) -> ApiError {
    if err.is_timeout() {
        log::warn!("{url} timed out");
        ApiError::Timeout {
            endpoint: url.to_string(),
        }
    } else {
        ApiError::Transport(err.to_string())
    }
}

impl Transport for ReqwestTransport {
    async fn send(&self, request: ApiRequest) -> Result<RawResponse, ApiError> {
        log::debug!("{} {}", request.method.as_str(), request.url);
        let mut builder = self
            .client
            .request(http_method(request.method), &request.url);
        for (name, value) in &request.headers {
            builder = builder.header(*name, value);
        }
        if let Some(creds) = &self.credentials {
            builder = builder.basic_auth(&creds.user, Some(&creds.password));
        }
        if let Some(ms) = request.timeout_ms {
            builder = builder.timeout(Duration::from_millis(u64::from(ms)));
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|err| classify(&request.url, &err))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|err| classify(&request.url, &err))?;
        Ok(RawResponse::new(
            status.as_u16(),
            status.canonical_reason().unwrap_or_default(),
            body,
        ))
    }
}
