// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Work item tracker data access.

pub mod work_items;

pub use work_items::WorkItemService;
