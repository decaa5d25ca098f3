// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Serde records for the JSON:API envelope and tracker resources.

pub mod comment;
pub mod envelope;
pub mod event;
pub mod link;
pub mod work_item;

pub use comment::{Comment, CommentPage};
pub use envelope::{Document, PageLinks, PageMeta, RecordLinks};
pub use event::WorkItemEvent;
pub use link::{LinkPage, WorkItemLink};
pub use work_item::{WorkItem, WorkItemPage, WorkItemType};
