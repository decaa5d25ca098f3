// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Work item REST client: one HTTP call per operation, envelope unwrap,
//! notify-then-propagate on failure.

use crate::config::{normalize_base_url, Config};
use crate::error::{Result, WitError};
use crate::notify::{ErrorNotifier, LogNotifier};
use crate::transport::{HttpTransport, ReqwestTransport};
use crate::types::{
    Comment, CommentPage, Document, LinkPage, WorkItem, WorkItemEvent, WorkItemLink, WorkItemPage,
    WorkItemType,
};
use serde_json::json;
use std::sync::Arc;
use tracing::{debug, instrument};

/// Client for the work item tracker API.
///
/// Holds two transports: the authenticated one for everything, and a bare
/// "backend" one for the public named-spaces route, which must not carry
/// user credentials.
pub struct WorkItemService {
    http: Arc<dyn HttpTransport>,
    backend: Arc<dyn HttpTransport>,
    notifier: Arc<dyn ErrorNotifier>,
    base_api_url: String,
}

impl WorkItemService {
    pub fn new(
        http: Arc<dyn HttpTransport>,
        backend: Arc<dyn HttpTransport>,
        notifier: Arc<dyn ErrorNotifier>,
        base_api_url: String,
    ) -> Self {
        Self {
            http,
            backend,
            notifier,
            base_api_url: normalize_base_url(base_api_url),
        }
    }

    /// Build a service with reqwest transports from the environment config
    pub fn from_config(config: &Config) -> Result<Self> {
        let http = Arc::new(ReqwestTransport::new(config.auth_token.clone())?);
        let backend = Arc::new(ReqwestTransport::new(None)?);

        Ok(Self::new(
            http,
            backend,
            Arc::new(LogNotifier),
            config.api_url.clone(),
        ))
    }

    /// Report a failed call through the shared notifier and hand the error back
    fn fail(&self, message: &str, error: WitError) -> WitError {
        self.notifier.notify(message, &error);
        error
    }

    /// List work items through the search endpoint. Filters are appended
    /// verbatim as `&key=value` pairs; the server owns the query grammar.
    #[instrument(skip(self, filters))]
    pub async fn work_items(
        &self,
        page_size: usize,
        filters: &[(&str, &str)],
    ) -> Result<WorkItemPage> {
        let mut url = format!("{}search?page[limit]={}", self.base_api_url, page_size);
        for (key, value) in filters {
            url.push_str(&format!("&{}={}", key, value));
        }

        let body = self
            .http
            .get(&url)
            .await
            .map_err(|e| self.fail("Fetching work items failed", e))?;
        let doc: Document<Vec<WorkItem>> = serde_json::from_value(body)?;

        debug!("Fetched {} work items", doc.data.len());
        Ok(WorkItemPage::from_document(doc))
    }

    /// Follow an opaque `next` link from a previous page. An empty link
    /// means the previous page was the last one; no request is made.
    #[instrument(skip(self))]
    pub async fn more_work_items(&self, url: &str) -> Result<WorkItemPage> {
        if url.trim().is_empty() {
            return Err(WitError::NoMoreItems);
        }

        let body = self
            .http
            .get(url)
            .await
            .map_err(|e| self.fail("Fetching more work items failed", e))?;
        let doc: Document<Vec<WorkItem>> = serde_json::from_value(body)?;
        Ok(WorkItemPage::from_document(doc))
    }

    /// Fetch one work item by its id
    #[instrument(skip(self))]
    pub async fn work_item_by_id(&self, id: &str) -> Result<WorkItem> {
        let url = format!("{}workitems/{}", self.base_api_url, id);
        let body = self
            .http
            .get(&url)
            .await
            .map_err(|e| self.fail("Fetching work item failed", e))?;
        let doc: Document<WorkItem> = serde_json::from_value(body)?;
        Ok(doc.data)
    }

    /// Fetch one work item by its number within a space. Without both owner
    /// and space the number route cannot be formed, so this falls back to a
    /// fetch by id on the authenticated client.
    #[instrument(skip(self))]
    pub async fn work_item_by_number(
        &self,
        number: &str,
        owner: &str,
        space: &str,
    ) -> Result<WorkItem> {
        if owner.is_empty() || space.is_empty() {
            return self.work_item_by_id(number).await;
        }

        let url = format!(
            "{}namedspaces/{}/{}/workitems/{}",
            self.base_api_url, owner, space, number
        );
        let body = self
            .backend
            .get(&url)
            .await
            .map_err(|e| self.fail("Fetching work item failed", e))?;
        let doc: Document<WorkItem> = serde_json::from_value(body)?;
        Ok(doc.data)
    }

    /// Fetch the children of a work item via its children link
    #[instrument(skip(self))]
    pub async fn children(&self, url: &str) -> Result<Vec<WorkItem>> {
        let body = self
            .http
            .get(url)
            .await
            .map_err(|e| self.fail("Fetching child work items failed", e))?;
        let doc: Document<Vec<WorkItem>> = serde_json::from_value(body)?;
        Ok(doc.data)
    }

    /// Fetch the audit events of a work item via its events link
    #[instrument(skip(self))]
    pub async fn events(&self, url: &str) -> Result<Vec<WorkItemEvent>> {
        let body = self
            .http
            .get(url)
            .await
            .map_err(|e| self.fail("Fetching work item events failed", e))?;
        let doc: Document<Vec<WorkItemEvent>> = serde_json::from_value(body)?;
        Ok(doc.data)
    }

    /// Fetch the comments of a work item, with the total count
    #[instrument(skip(self))]
    pub async fn comments(&self, url: &str) -> Result<CommentPage> {
        let body = self
            .http
            .get(url)
            .await
            .map_err(|e| self.fail("Fetching comments failed", e))?;
        let doc: Document<Vec<Comment>> = serde_json::from_value(body)?;
        Ok(CommentPage::from_document(doc))
    }

    /// Fetch the links of a work item together with the included records
    #[instrument(skip(self))]
    pub async fn links(&self, url: &str) -> Result<LinkPage> {
        let body = self
            .http
            .get(url)
            .await
            .map_err(|e| self.fail("Fetching work item links failed", e))?;
        let doc: Document<Vec<WorkItemLink>> = serde_json::from_value(body)?;
        Ok(LinkPage::from_document(doc))
    }

    /// Fetch the work item types of a space via its types link
    #[instrument(skip(self))]
    pub async fn work_item_types(&self, url: &str) -> Result<Vec<WorkItemType>> {
        let body = self
            .http
            .get(url)
            .await
            .map_err(|e| self.fail("Fetching work item types failed", e))?;
        let doc: Document<Vec<WorkItemType>> = serde_json::from_value(body)?;
        Ok(doc.data)
    }

    /// Create a work item under the given collection URL
    #[instrument(skip(self, item))]
    pub async fn create(&self, url: &str, item: &WorkItem) -> Result<WorkItem> {
        let body = self
            .http
            .post(url, json!({ "data": item }))
            .await
            .map_err(|e| self.fail("Creating work item failed", e))?;
        let doc: Document<WorkItem> = serde_json::from_value(body)?;
        Ok(doc.data)
    }

    /// Update a work item in place through its self link
    #[instrument(skip(self, item))]
    pub async fn update(&self, item: &WorkItem) -> Result<WorkItem> {
        let url = self.self_link_of(item)?;
        let body = self
            .http
            .patch(&url, json!({ "data": item }))
            .await
            .map_err(|e| self.fail("Updating work item failed", e))?;
        let doc: Document<WorkItem> = serde_json::from_value(body)?;
        Ok(doc.data)
    }

    /// Delete a work item through its self link
    #[instrument(skip(self, item))]
    pub async fn delete(&self, item: &WorkItem) -> Result<()> {
        let url = self.self_link_of(item)?;
        self.http
            .delete(&url)
            .await
            .map_err(|e| self.fail("Deleting work item failed", e))
    }

    /// Attach a comment to a work item via its comments link
    #[instrument(skip(self, comment))]
    pub async fn create_comment(&self, url: &str, comment: &Comment) -> Result<Comment> {
        let body = self
            .http
            .post(url, json!({ "data": comment }))
            .await
            .map_err(|e| self.fail("Creating comment failed", e))?;
        let doc: Document<Comment> = serde_json::from_value(body)?;
        Ok(doc.data)
    }

    fn self_link_of(&self, item: &WorkItem) -> Result<String> {
        item.self_link().map(str::to_string).ok_or_else(|| {
            WitError::MissingSelfLink(item.id.clone().unwrap_or_else(|| "<no id>".to_string()))
        })
    }
}
