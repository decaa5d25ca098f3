// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Work item comment records.

use crate::types::envelope::{Document, RecordLinks};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// A comment attached to a work item (`comments`)
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Comment {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "type", default = "comment_record_type")]
    pub record_type: String,
    #[serde(default)]
    pub attributes: BTreeMap<String, Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relationships: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<RecordLinks>,
}

fn comment_record_type() -> String {
    "comments".to_string()
}

impl Default for Comment {
    fn default() -> Self {
        Comment {
            id: None,
            record_type: comment_record_type(),
            attributes: BTreeMap::new(),
            relationships: None,
            links: None,
        }
    }
}

impl Comment {
    pub fn body(&self) -> Option<&str> {
        self.attributes.get("body").and_then(Value::as_str)
    }
}

/// A comment collection with its total count, as the comments endpoint
/// reports more comments than one page carries.
#[derive(Clone, Debug)]
pub struct CommentPage {
    pub comments: Vec<Comment>,
    pub total_count: Option<u64>,
}

impl CommentPage {
    pub fn from_document(doc: Document<Vec<Comment>>) -> Self {
        CommentPage {
            comments: doc.data,
            total_count: doc.meta.and_then(|m| m.total_count),
        }
    }
}
