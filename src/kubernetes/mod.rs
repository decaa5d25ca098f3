// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Kubernetes-side data access.

pub mod namespaces;

pub use namespaces::NamespaceService;
