// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! JSON:API envelope shapes shared by all tracker resources.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Top-level JSON:API document: `{ data, included, links, meta }`
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Document<T> {
    pub data: T,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub included: Vec<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<PageLinks>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<PageMeta>,
}

/// Pagination links attached to collection documents
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct PageLinks {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prev: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last: Option<String>,
}

/// Collection metadata
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct PageMeta {
    #[serde(rename = "totalCount", default, skip_serializing_if = "Option::is_none")]
    pub total_count: Option<u64>,
}

/// Per-record links, of which only `self` is used by the client
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct RecordLinks {
    #[serde(rename = "self", default, skip_serializing_if = "Option::is_none")]
    pub self_link: Option<String>,
    #[serde(rename = "sourceLinkTypes", default, skip_serializing_if = "Option::is_none")]
    pub source_link_types: Option<String>,
    #[serde(rename = "targetLinkTypes", default, skip_serializing_if = "Option::is_none")]
    pub target_link_types: Option<String>,
}
