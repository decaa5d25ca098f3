// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Work item records and the mapped list page returned by search calls.

use crate::types::envelope::{Document, RecordLinks};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// A tracked unit of work. Attributes are server-defined and keyed by
/// dotted names such as `system.title` and `system.number`.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct WorkItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "type", default = "work_item_record_type")]
    pub record_type: String,
    #[serde(default)]
    pub attributes: BTreeMap<String, Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relationships: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<RecordLinks>,
}

fn work_item_record_type() -> String {
    "workitems".to_string()
}

impl Default for WorkItem {
    fn default() -> Self {
        WorkItem {
            id: None,
            record_type: work_item_record_type(),
            attributes: BTreeMap::new(),
            relationships: None,
            links: None,
        }
    }
}

impl WorkItem {
    /// The canonical URL of this record, if the server provided one
    pub fn self_link(&self) -> Option<&str> {
        self.links.as_ref().and_then(|l| l.self_link.as_deref())
    }

    /// Human-facing work item number within its space
    pub fn number(&self) -> Option<u64> {
        self.attributes.get("system.number").and_then(Value::as_u64)
    }

    pub fn title(&self) -> Option<&str> {
        self.attributes.get("system.title").and_then(Value::as_str)
    }
}

/// A work item type record (`workitemtypes`)
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct WorkItemType {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "type")]
    pub record_type: String,
    #[serde(default)]
    pub attributes: BTreeMap<String, Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<RecordLinks>,
}

/// One page of work items as returned by the search endpoint, with the
/// envelope sections the UI consumes carried alongside the records.
#[derive(Clone, Debug)]
pub struct WorkItemPage {
    pub work_items: Vec<WorkItem>,
    pub next_link: Option<String>,
    pub total_count: Option<u64>,
    pub included: Vec<Value>,
}

impl WorkItemPage {
    pub fn from_document(doc: Document<Vec<WorkItem>>) -> Self {
        WorkItemPage {
            work_items: doc.data,
            next_link: doc.links.and_then(|l| l.next),
            total_count: doc.meta.and_then(|m| m.total_count),
            included: doc.included,
        }
    }
}
