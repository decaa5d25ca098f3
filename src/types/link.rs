// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Work item link records (typed relations between work items).

use crate::types::envelope::{Document, RecordLinks};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A relation between two work items (`workitemlinks`). The source, target
/// and link type live in `relationships`; `included` carries the resolved
/// records.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct WorkItemLink {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "type")]
    pub record_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relationships: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<RecordLinks>,
}

/// The link collection together with its `included` sidecar, which the
/// caller needs to resolve link endpoints.
#[derive(Clone, Debug)]
pub struct LinkPage {
    pub links: Vec<WorkItemLink>,
    pub included: Vec<Value>,
}

impl LinkPage {
    pub fn from_document(doc: Document<Vec<WorkItemLink>>) -> Self {
        LinkPage {
            links: doc.data,
            included: doc.included,
        }
    }
}
