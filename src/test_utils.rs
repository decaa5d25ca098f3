// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Test utilities: a mock Kubernetes API service and a recording transport
//! for the tracker client.

use crate::error::{Result, WitError};
use crate::notify::ErrorNotifier;
use crate::transport::HttpTransport;
use async_trait::async_trait;
use http::{Request, Response};
use kube::client::Body;
use kube::Client;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::task::{Context, Poll};
use tower::Service;

/// A mock HTTP service that returns predefined responses based on request
/// method and path, recording every request it sees.
#[derive(Clone)]
pub struct MockService {
    responses: Arc<Mutex<HashMap<(String, String), (u16, String)>>>,
    requests: Arc<Mutex<Vec<(String, String)>>>,
}

impl MockService {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(HashMap::new())),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Add a response for GET requests matching the exact path
    pub fn on_get(self, path: &str, status: u16, body: &str) -> Self {
        self.on("GET", path, status, body)
    }

    /// Add a response for POST requests matching the exact path
    pub fn on_post(self, path: &str, status: u16, body: &str) -> Self {
        self.on("POST", path, status, body)
    }

    /// Add a response for DELETE requests matching the exact path
    pub fn on_delete(self, path: &str, status: u16, body: &str) -> Self {
        self.on("DELETE", path, status, body)
    }

    fn on(self, method: &str, path: &str, status: u16, body: &str) -> Self {
        self.responses
            .lock()
            .unwrap()
            .insert((method.to_string(), path.to_string()), (status, body.to_string()));
        self
    }

    /// Build a kube Client from this mock service
    pub fn into_client(self) -> Client {
        Client::new(self, "default")
    }

    /// All (method, path) pairs received so far, in order
    pub fn requests(&self) -> Vec<(String, String)> {
        self.requests.lock().unwrap().clone()
    }

    fn find_response(&self, method: &str, path: &str) -> Option<(u16, String)> {
        let responses = self.responses.lock().unwrap();
        responses.get(&(method.to_string(), path.to_string())).cloned()
    }
}

impl Default for MockService {
    fn default() -> Self {
        Self::new()
    }
}

impl Service<Request<Body>> for MockService {
    type Response = Response<Body>;
    type Error = tower::BoxError;
    type Future = std::pin::Pin<
        Box<dyn std::future::Future<Output = std::result::Result<Self::Response, Self::Error>> + Send>,
    >;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<std::result::Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: Request<Body>) -> Self::Future {
        let method = req.method().to_string();
        let path = req.uri().path().to_string();

        self.requests.lock().unwrap().push((method.clone(), path.clone()));
        let response = self.find_response(&method, &path);

        Box::pin(async move {
            match response {
                Some((status, body)) => Ok(Response::builder()
                    .status(status)
                    .header("content-type", "application/json")
                    .body(Body::from(body.into_bytes()))
                    .unwrap()),
                None => {
                    // Default 404 for unmatched requests
                    let body = r#"{"kind":"Status","apiVersion":"v1","status":"Failure","message":"not found","reason":"NotFound","code":404}"#;
                    Ok(Response::builder()
                        .status(404)
                        .header("content-type", "application/json")
                        .body(Body::from(body.as_bytes().to_vec()))
                        .unwrap())
                }
            }
        })
    }
}

/// Create a mock namespace JSON response
pub fn namespace_json(name: &str) -> String {
    serde_json::json!({
        "apiVersion": "v1",
        "kind": "Namespace",
        "metadata": {
            "name": name,
            "uid": "test-uid"
        }
    })
    .to_string()
}

/// Create a mock namespace list JSON response
pub fn namespace_list_json(names: &[&str]) -> String {
    list_json("v1", "NamespaceList", names)
}

/// Create a mock OpenShift project list JSON response
pub fn project_list_json(names: &[&str]) -> String {
    list_json("project.openshift.io/v1", "ProjectList", names)
}

fn list_json(api_version: &str, kind: &str, names: &[&str]) -> String {
    let items: Vec<Value> = names
        .iter()
        .map(|name| {
            serde_json::json!({
                "metadata": { "name": name, "uid": "test-uid" },
                "status": { "phase": "Active" }
            })
        })
        .collect();

    serde_json::json!({
        "apiVersion": api_version,
        "kind": kind,
        "metadata": {},
        "items": items
    })
    .to_string()
}

/// One call seen by a [`RecordingTransport`]
#[derive(Clone, Debug)]
pub struct RecordedCall {
    pub method: String,
    pub url: String,
    pub body: Option<Value>,
}

/// An [`HttpTransport`] that answers every call with one canned reply (or
/// failure) and records what it was asked.
pub struct RecordingTransport {
    calls: Mutex<Vec<RecordedCall>>,
    reply: Option<Value>,
    failure: Option<(u16, String)>,
}

impl RecordingTransport {
    pub fn replying(reply: Value) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            reply: Some(reply),
            failure: None,
        }
    }

    pub fn failing(status: u16, message: &str) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            reply: None,
            failure: Some((status, message.to_string())),
        }
    }

    /// For transports the test expects to stay untouched
    pub fn unused() -> Self {
        Self::replying(Value::Null)
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn urls(&self) -> Vec<String> {
        self.calls().into_iter().map(|c| c.url).collect()
    }

    fn record(&self, method: &str, url: &str, body: Option<Value>) {
        self.calls.lock().unwrap().push(RecordedCall {
            method: method.to_string(),
            url: url.to_string(),
            body,
        });
    }

    fn respond(&self) -> Result<Value> {
        match &self.failure {
            Some((status, message)) => Err(WitError::Api {
                status: *status,
                message: message.clone(),
            }),
            None => Ok(self.reply.clone().unwrap_or(Value::Null)),
        }
    }
}

#[async_trait]
impl HttpTransport for RecordingTransport {
    async fn get(&self, url: &str) -> Result<Value> {
        self.record("GET", url, None);
        self.respond()
    }

    async fn post(&self, url: &str, body: Value) -> Result<Value> {
        self.record("POST", url, Some(body));
        self.respond()
    }

    async fn patch(&self, url: &str, body: Value) -> Result<Value> {
        self.record("PATCH", url, Some(body));
        self.respond()
    }

    async fn delete(&self, url: &str) -> Result<()> {
        self.record("DELETE", url, None);
        self.respond().map(|_| ())
    }
}

/// Notifier that counts invocations, for notify-exactly-once assertions
pub struct CountingNotifier {
    count: AtomicUsize,
}

impl CountingNotifier {
    pub fn new() -> Self {
        Self {
            count: AtomicUsize::new(0),
        }
    }

    pub fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }
}

impl Default for CountingNotifier {
    fn default() -> Self {
        Self::new()
    }
}

impl ErrorNotifier for CountingNotifier {
    fn notify(&self, _message: &str, _error: &WitError) {
        self.count.fetch_add(1, Ordering::SeqCst);
    }
}
