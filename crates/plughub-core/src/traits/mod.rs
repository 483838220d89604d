// SPDX-FileCopyrightText: 2026 Plughub Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Collaborator trait definitions.
//!
//! Host-provided capabilities (transport, workspace settings, document
//! store, plugin filter) are injected as trait objects so that test doubles
//! can stand in for them. Async collaborators use `#[async_trait]` for
//! dynamic dispatch compatibility.

pub mod filter;
pub mod observer;
pub mod settings;
pub mod store;
pub mod transport;

pub use filter::PluginFilter;
pub use observer::CacheObserver;
pub use settings::SettingsProvider;
pub use store::DocumentStore;
pub use transport::Transport;
