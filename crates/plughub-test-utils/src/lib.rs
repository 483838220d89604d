// SPDX-FileCopyrightText: 2026 Plughub Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test doubles for plughub.
//!
//! Each double implements one collaborator trait from `plughub-core` with
//! deterministic, in-memory behavior so registry and devfile tests run
//! without network or disk access.

pub mod mock_settings;
pub mod mock_store;
pub mod mock_transport;
pub mod recording_observer;

pub use mock_settings::StaticSettings;
pub use mock_store::InMemoryDocumentStore;
pub use mock_transport::MockTransport;
pub use recording_observer::{ObservedEvent, RecordingObserver};
