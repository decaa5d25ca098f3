// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::{Context, Result};
use std::env;
use url::Url;

/// Client configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the work item tracker API, always ends with '/'
    pub api_url: String,
    /// Bearer token for authenticated tracker requests
    pub auth_token: Option<String>,
    /// Whether the cluster is OpenShift (namespaces are exposed as projects)
    pub openshift: bool,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let api_url = env::var("WIT_API_URL").context("WIT_API_URL environment variable not set")?;
        let api_url: Url = api_url.parse().context("WIT_API_URL is not a valid URL")?;
        let auth_token = env::var("WIT_AUTH_TOKEN").ok();
        let openshift: bool = env::var("OPENSHIFT")
            .unwrap_or("false".to_string())
            .parse()
            .unwrap_or(false);

        Ok(Config {
            api_url: normalize_base_url(api_url.into()),
            auth_token,
            openshift,
        })
    }
}

/// Ensure the base URL ends with a single trailing slash
pub fn normalize_base_url(mut url: String) -> String {
    while url.ends_with('/') {
        url.pop();
    }
    url.push('/');
    url
}
