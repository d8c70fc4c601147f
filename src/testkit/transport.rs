//! In-memory [`HttpTransport`] for exercising the fetcher and client.
//!
//! Responses are looked up by request path. Queued responses are served
//! first in FIFO order; once a path's queue is empty, a registered pager
//! (see [`ScriptedTransport::serve_pages`]) answers by slicing its records
//! with the request's `page` and `pageSize`. Anything else is a 404.

use std::collections::{HashMap, VecDeque};

use async_trait::async_trait;
use parking_lot::Mutex;
use serde_json::Value;

use super::fixtures::page_json;
use crate::error::{Error, Result};
use crate::port::{HttpRequest, HttpResponse, HttpTransport};

enum Scripted {
    Response(HttpResponse),
    Error(Error),
}

struct Pager {
    records: Vec<Value>,
    total: Option<u64>,
}

impl Pager {
    fn respond(&self, request: &HttpRequest) -> HttpResponse {
        let page: usize = request.param("page").and_then(|p| p.parse().ok()).unwrap_or(1);
        let size: usize = request
            .param("pageSize")
            .and_then(|p| p.parse().ok())
            .unwrap_or(100);
        let start = page.saturating_sub(1).saturating_mul(size).min(self.records.len());
        let end = start.saturating_add(size).min(self.records.len());
        let total = self.total.unwrap_or(self.records.len() as u64);

        HttpResponse::new(200, page_json(&self.records[start..end], total).to_string())
    }
}

#[derive(Default)]
struct State {
    queued: HashMap<String, VecDeque<Scripted>>,
    pagers: HashMap<String, Pager>,
    requests: Vec<HttpRequest>,
}

/// Scripted transport. Share it as `Arc<ScriptedTransport>` and hand a
/// clone to the code under test as `Arc<dyn HttpTransport>`.
#[derive(Default)]
pub struct ScriptedTransport {
    state: Mutex<State>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a raw response for `path`.
    pub fn push_response(&self, path: &str, status: u16, body: impl Into<String>) {
        self.push(path, Scripted::Response(HttpResponse::new(status, body)));
    }

    /// Queue a 200 response with a JSON body.
    pub fn push_json(&self, path: &str, body: Value) {
        self.push_response(path, 200, body.to_string());
    }

    /// Queue an empty response with `status`.
    pub fn push_status(&self, path: &str, status: u16) {
        self.push_response(path, status, "");
    }

    /// Queue a transport-level failure.
    pub fn push_error(&self, path: &str, error: Error) {
        self.push(path, Scripted::Error(error));
    }

    /// Serve `records` on `path` as a paginated endpoint, replacing any
    /// previous pager. `total` overrides the advertised `totalItems`.
    pub fn serve_pages(&self, path: &str, records: Vec<Value>, total: Option<u64>) {
        self.state
            .lock()
            .pagers
            .insert(path.to_string(), Pager { records, total });
    }

    /// Drop queued responses and the pager for `path`.
    pub fn clear(&self, path: &str) {
        let mut state = self.state.lock();
        state.queued.remove(path);
        state.pagers.remove(path);
    }

    /// Every request received so far, in order.
    pub fn requests(&self) -> Vec<HttpRequest> {
        self.state.lock().requests.clone()
    }

    pub fn request_count(&self, path: &str) -> usize {
        self.state
            .lock()
            .requests
            .iter()
            .filter(|r| r.path == path)
            .count()
    }

    fn push(&self, path: &str, scripted: Scripted) {
        self.state
            .lock()
            .queued
            .entry(path.to_string())
            .or_default()
            .push_back(scripted);
    }
}

#[async_trait]
impl HttpTransport for ScriptedTransport {
    async fn get(&self, request: &HttpRequest) -> Result<HttpResponse> {
        let mut state = self.state.lock();
        state.requests.push(request.clone());

        if let Some(scripted) = state
            .queued
            .get_mut(&request.path)
            .and_then(VecDeque::pop_front)
        {
            return match scripted {
                Scripted::Response(response) => Ok(response),
                Scripted::Error(error) => Err(error),
            };
        }

        Ok(match state.pagers.get(&request.path) {
            Some(pager) => pager.respond(request),
            None => HttpResponse::new(404, ""),
        })
    }
}
