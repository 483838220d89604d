// SPDX-FileCopyrightText: 2026 Plughub Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Plugin registry client, metadata cache, and plugin queries.
//!
//! [`RegistryClient`] talks to remote registries: it resolves the default
//! registry from workspace settings, fetches plugin indexes, and locates each
//! plugin's metadata document. [`CacheBuilder`] drives the client across all
//! registries to rebuild the in-memory [`PluginCache`], reporting progress to
//! a [`plughub_core::CacheObserver`]. [`PluginQuery`] serves filtered views of
//! the cache. [`PluginService`] bundles all three behind one handle.

pub mod builder;
pub mod cache;
pub mod client;
pub mod document;
pub mod filter;
pub mod http;
pub mod location;
pub mod observer;
pub mod query;
pub mod service;

pub use builder::CacheBuilder;
pub use cache::PluginCache;
pub use client::{RegistryClient, RegistryIndex, DEFAULT_REGISTRY_NAME};
pub use document::PluginDocument;
pub use filter::KeywordFilter;
pub use http::HttpTransport;
pub use location::{base_directory, DocumentLocation};
pub use observer::{CacheEvent, ChannelObserver};
pub use query::PluginQuery;
pub use service::PluginService;
