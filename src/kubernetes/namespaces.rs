// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Namespace access: one service over two fixed collection endpoints,
//! chosen by whether the cluster is OpenShift.

use crate::error::Result;
use http::header::CONTENT_TYPE;
use http::Request;
use k8s_openapi::api::core::v1::Namespace;
use kube::api::ObjectMeta;
use kube::Client;
use serde::Deserialize;
use tracing::{debug, instrument};

pub const NAMESPACES_URL: &str = "/api/v1/namespaces";
pub const PROJECTS_URL: &str = "/oapi/v1/projects";

/// Collection envelope for both namespace and project lists
#[derive(Deserialize)]
struct NamespaceList {
    #[serde(default)]
    items: Vec<Namespace>,
}

/// CRUD over cluster namespaces. On OpenShift the same records are served
/// from the projects endpoint; the records themselves are shape-compatible,
/// so everything past the URL choice is identical.
pub struct NamespaceService {
    client: Client,
    openshift: bool,
}

impl NamespaceService {
    pub fn new(client: Client, openshift: bool) -> Self {
        Self { client, openshift }
    }

    /// The collection endpoint this service talks to
    pub fn collection_url(&self) -> &'static str {
        if self.openshift {
            PROJECTS_URL
        } else {
            NAMESPACES_URL
        }
    }

    fn item_url(&self, name: &str) -> String {
        format!("{}/{}", self.collection_url(), name)
    }

    /// List all namespaces (or projects) in the cluster
    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<Namespace>> {
        let req = Request::get(self.collection_url()).body(Vec::new())?;
        let list: NamespaceList = self.client.request(req).await?;

        debug!("Listed {} namespaces", list.items.len());
        Ok(list.items)
    }

    /// Fetch a single namespace by name
    #[instrument(skip(self))]
    pub async fn get(&self, name: &str) -> Result<Namespace> {
        let req = Request::get(self.item_url(name)).body(Vec::new())?;
        let namespace = self.client.request(req).await?;
        Ok(namespace)
    }

    /// Create a namespace with the given name
    #[instrument(skip(self))]
    pub async fn create(&self, name: &str) -> Result<Namespace> {
        let namespace = Namespace {
            metadata: ObjectMeta {
                name: Some(name.to_string()),
                ..Default::default()
            },
            ..Default::default()
        };

        let req = Request::post(self.collection_url())
            .header(CONTENT_TYPE, "application/json")
            .body(serde_json::to_vec(&namespace)?)?;
        let created = self.client.request(req).await?;
        Ok(created)
    }

    /// Delete a namespace by name
    #[instrument(skip(self))]
    pub async fn delete(&self, name: &str) -> Result<()> {
        let req = Request::delete(self.item_url(name)).body(Vec::new())?;
        // The API answers with a Status object; nothing in it is of use here
        let _: serde_json::Value = self.client.request(req).await?;
        Ok(())
    }
}
