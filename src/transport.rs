// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! HTTP transport seam for the tracker API.

use crate::error::{Result, WitError};
use async_trait::async_trait;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

/// One HTTP verb per call, JSON in and out. The service layer owns URL
/// construction and envelope handling; implementations own auth and wire I/O.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn get(&self, url: &str) -> Result<Value>;
    async fn post(&self, url: &str, body: Value) -> Result<Value>;
    async fn patch(&self, url: &str, body: Value) -> Result<Value>;
    async fn delete(&self, url: &str) -> Result<()>;
}

/// Transport over a reqwest client, optionally sending a bearer token.
/// Services hold two of these: the authenticated one and a bare one for
/// routes that must not carry user credentials.
pub struct ReqwestTransport {
    client: reqwest::Client,
    bearer_token: Option<String>,
}

impl ReqwestTransport {
    pub fn new(bearer_token: Option<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self {
            client,
            bearer_token,
        })
    }

    fn apply_auth(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.bearer_token {
            Some(token) => req.bearer_auth(token),
            None => req,
        }
    }

    async fn send(&self, req: reqwest::RequestBuilder) -> Result<Value> {
        let resp = self.apply_auth(req).send().await?;
        let status = resp.status();

        if !status.is_success() {
            let message = resp.text().await.unwrap_or_default();
            return Err(WitError::Api {
                status: status.as_u16(),
                message,
            });
        }

        if status == reqwest::StatusCode::NO_CONTENT {
            return Ok(Value::Null);
        }

        let body = resp.json().await?;
        Ok(body)
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn get(&self, url: &str) -> Result<Value> {
        debug!("GET {}", url);
        self.send(self.client.get(url)).await
    }

    async fn post(&self, url: &str, body: Value) -> Result<Value> {
        debug!("POST {}", url);
        self.send(self.client.post(url).json(&body)).await
    }

    async fn patch(&self, url: &str, body: Value) -> Result<Value> {
        debug!("PATCH {}", url);
        self.send(self.client.patch(url).json(&body)).await
    }

    async fn delete(&self, url: &str) -> Result<()> {
        debug!("DELETE {}", url);
        self.send(self.client.delete(url)).await?;
        Ok(())
    }
}
