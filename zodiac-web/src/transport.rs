//! Fetch-backed [`Transport`] for the browser.

use futures::future::{Either, select};
use gloo::timers::future::TimeoutFuture;
use gloo_net::http::{Request, RequestBuilder};
use std::pin::pin;
use web_sys::RequestCredentials;
use zodiac_core::{ApiError, ApiRequest, Method, RawResponse, Transport};

/// Sends requests with `fetch`, carrying the session cookie when asked.
#[derive(Debug, Clone, Copy, Default)]
pub struct FetchTransport;

fn builder(request: &ApiRequest) -> RequestBuilder {
    let mut builder = match request.method {
        Method::Get => Request::get(&request.url),
        Method::Post => Request::post(&request.url),
        Method::Put => Request::put(&request.url),
        Method::Delete => Request::delete(&request.url),
    };
    if request.include_credentials {
        builder = builder.credentials(RequestCredentials::Include);
    }
    for (name, value) in &request.headers {
        builder = builder.header(name, value);
    }
    builder
}

async fn round_trip(request: ApiRequest) -> Result<RawResponse, ApiError> {
    let builder = builder(&request);
    let response = match request.body {
        Some(body) => builder
            .body(body)
            .map_err(|err| ApiError::Transport(err.to_string()))?
            .send()
            .await,
        None => builder.send().await,
    }
    .map_err(|err| ApiError::Transport(err.to_string()))?;

    let status = response.status();
    let status_text = response.status_text();
    let body = response
        .text()
        .await
        .map_err(|err| ApiError::Transport(err.to_string()))?;
    Ok(RawResponse::new(status, status_text, body))
}

impl Transport for FetchTransport {
    async fn send(&self, request: ApiRequest) -> Result<RawResponse, ApiError> {
        let endpoint = request.url.clone();
        log::debug!("{} {endpoint}", request.method.as_str());
        let Some(timeout_ms) = request.timeout_ms else {
            return round_trip(request).await;
        };
        let exchange = pin!(round_trip(request));
        let deadline = pin!(TimeoutFuture::new(timeout_ms));
        match select(exchange, deadline).await {
            Either::Left((outcome, _)) => outcome,
            Either::Right(((), _)) => {
                log::warn!("{endpoint} timed out after {timeout_ms} ms");
                Err(ApiError::Timeout { endpoint })
            }
        }
    }
}
