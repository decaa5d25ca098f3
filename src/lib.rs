// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
pub mod config;
pub mod error;
pub mod kubernetes;
pub mod notify;
pub mod tracker;
pub mod transport;
pub mod types;

#[cfg(test)]
pub(crate) mod test_utils;
