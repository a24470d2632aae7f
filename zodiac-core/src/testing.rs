//! In-memory [`Transport`] used by tests and offline demos.
//!
//! Responses are scripted per `(method, url)`. When several responses are queued
//! for one route they are served in order and the last one repeats.

use crate::error::ApiError;
use crate::http::{ApiRequest, Method, RawResponse, Transport};
use serde_json::Value;
use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::rc::Rc;

type Reply = Result<RawResponse, ApiError>;

#[derive(Default)]
struct Script {
    routes: HashMap<(Method, String), VecDeque<Reply>>,
    calls: Vec<ApiRequest>,
}

#[derive(Clone, Default)]
pub struct ScriptedTransport {
    inner: Rc<RefCell<Script>>,
}

impl ScriptedTransport {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, method: Method, url: &str, status: u16, body: Value) -> &Self {
        self.push(method, url, Ok(RawResponse::json(status, &body)))
    }

    pub fn respond_raw(&self, method: Method, url: &str, response: RawResponse) -> &Self {
        self.push(method, url, Ok(response))
    }

    pub fn fail(&self, method: Method, url: &str, error: ApiError) -> &Self {
        self.push(method, url, Err(error))
    }

    /// Drop everything scripted for a route so the next script starts fresh.
    pub fn clear_route(&self, method: Method, url: &str) {
        self.inner
            .borrow_mut()
            .routes
            .remove(&(method, url.to_string()));
    }

    fn push(&self, method: Method, url: &str, reply: Reply) -> &Self {
        self.inner
            .borrow_mut()
            .routes
            .entry((method, url.to_string()))
            .or_default()
            .push_back(reply);
        self
    }

    #[must_use]
    pub fn calls(&self) -> Vec<ApiRequest> {
        self.inner.borrow().calls.clone()
    }

    #[must_use]
    pub fn call_count(&self) -> usize {
        self.inner.borrow().calls.len()
    }

    #[must_use]
    pub fn calls_to(&self, method: Method, url: &str) -> usize {
        self.inner
            .borrow()
            .calls
            .iter()
            .filter(|call| call.method == method && call.url == url)
            .count()
    }

    /// Forget recorded calls while keeping scripted routes.
    pub fn reset_calls(&self) {
        self.inner.borrow_mut().calls.clear();
    }
}

impl Transport for ScriptedTransport {
    async fn send(&self, request: ApiRequest) -> Result<RawResponse, ApiError> {
        let mut script = self.inner.borrow_mut();
        script.calls.push(request.clone());
        let key = (request.method, request.url.clone());
        let reply = script.routes.get_mut(&key).and_then(|queue| {
            if queue.len() > 1 {
                queue.pop_front()
            } else {
                queue.front().cloned()
            }
        });
        reply.unwrap_or_else(|| {
            let detail = format!(
                "no scripted route for {} {}",
                request.method.as_str(),
                request.url
            );
            Ok(RawResponse::json(404, &serde_json::json!({ "detail": detail })))
        })
    }
}
