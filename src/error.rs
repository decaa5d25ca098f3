// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WitError {
    #[error("Kubernetes API error: {0}")]
    Kube(#[from] kube::Error),

    #[error("HTTP transport error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API request failed with status {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Failed to build request: {0}")]
    Request(#[from] http::Error),

    #[error("No more item found")]
    NoMoreItems,

    #[error("Record has no self link: {0}")]
    MissingSelfLink(String),
}

pub type Result<T> = std::result::Result<T, WitError>;
