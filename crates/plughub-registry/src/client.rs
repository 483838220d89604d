// SPDX-FileCopyrightText: 2026 Plughub Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Registry client.
//!
//! Resolves the default registry from workspace settings, fetches registry
//! indexes, and locates and loads plugin metadata documents.

use std::sync::Arc;

use plughub_core::key::META_YAML;
use plughub_core::types::strip_trailing_slashes;
use plughub_core::{
    PluginRegistry, PlughubError, RawPluginSummary, SettingsProvider, Transport,
};
use tokio::sync::OnceCell;
use tracing::{debug, info};

use crate::document::PluginDocument;
use crate::location::DocumentLocation;

/// Name given to the registry resolved from workspace settings.
pub const DEFAULT_REGISTRY_NAME: &str = "default";

/// Result of fetching a registry index.
#[derive(Debug, Clone, PartialEq)]
pub enum RegistryIndex {
    /// The index is a list of plugin summaries.
    Plugins(Vec<RawPluginSummary>),
    /// The index parsed as JSON but is not a list. Callers treat this as an
    /// invalid registry, distinct from a transport failure.
    NotAList(serde_json::Value),
}

/// Client for remote plugin registries.
pub struct RegistryClient {
    transport: Arc<dyn Transport>,
    settings: Arc<dyn SettingsProvider>,
    default_registry: OnceCell<PluginRegistry>,
}

impl std::fmt::Debug for RegistryClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegistryClient")
            .field("default_registry", &self.default_registry.get())
            .finish()
    }
}

impl RegistryClient {
    /// Create a client over the given transport and settings provider.
    pub fn new(transport: Arc<dyn Transport>, settings: Arc<dyn SettingsProvider>) -> Self {
        Self {
            transport,
            settings,
            default_registry: OnceCell::new(),
        }
    }

    /// Returns the default registry, resolving it from workspace settings on
    /// first use.
    ///
    /// The internal registry URL is preferred for fetching; the public URL is
    /// always the externally reachable base. Fails with
    /// [`PlughubError::Configuration`] if settings are unavailable or carry
    /// no public registry URL. Failures are not cached.
    pub async fn resolve_default_registry(&self) -> Result<&PluginRegistry, PlughubError> {
        self.default_registry
            .get_or_try_init(|| async {
                let settings = self.settings.workspace_settings().await.map_err(|e| {
                    PlughubError::Configuration(format!(
                        "workspace settings are unavailable: {e}"
                    ))
                })?;

                let public = settings
                    .public_registry_url
                    .as_deref()
                    .map(strip_trailing_slashes)
                    .filter(|url| !url.is_empty())
                    .ok_or_else(|| {
                        PlughubError::Configuration(
                            "workspace settings do not define a public plugin registry URL"
                                .to_string(),
                        )
                    })?;
                let internal = settings
                    .internal_registry_url
                    .as_deref()
                    .map(strip_trailing_slashes)
                    .filter(|url| !url.is_empty());

                let registry = PluginRegistry {
                    name: DEFAULT_REGISTRY_NAME.to_string(),
                    uri: internal.unwrap_or_else(|| public.clone()),
                    public_uri: public,
                };
                info!(uri = %registry.uri, public_uri = %registry.public_uri, "resolved default plugin registry");
                Ok::<_, PlughubError>(registry)
            })
            .await
    }

    /// Fetch `{uri}/plugins/` and parse it as a list of plugin summaries.
    ///
    /// An empty body is read as `{}`, which yields [`RegistryIndex::NotAList`].
    /// Transport failures map to [`PlughubError::RegistryUnreachable`]; a
    /// body that is not JSON, or a list whose entries are not summaries,
    /// maps to [`PlughubError::InvalidIndex`].
    pub async fn fetch_index(
        &self,
        registry: &PluginRegistry,
    ) -> Result<RegistryIndex, PlughubError> {
        let uri = format!("{}/plugins/", registry.uri);
        debug!(registry = %registry.name, uri = %uri, "fetching registry index");

        let body = self.transport.get(&uri).await.map_err(|e| {
            PlughubError::RegistryUnreachable {
                uri: uri.clone(),
                message: e.to_string(),
                source: Some(Box::new(e)),
            }
        })?;
        let body = if body.trim().is_empty() { "{}" } else { body.as_str() };

        let value: serde_json::Value =
            serde_json::from_str(body).map_err(|e| PlughubError::InvalidIndex {
                uri: uri.clone(),
                message: format!("index is not JSON: {e}"),
            })?;

        match value {
            serde_json::Value::Array(_) => serde_json::from_value(value)
                .map(RegistryIndex::Plugins)
                .map_err(|e| PlughubError::InvalidIndex {
                    uri,
                    message: format!("index entries are not plugin summaries: {e}"),
                }),
            other => Ok(RegistryIndex::NotAList(other)),
        }
    }

    /// Absolute location of a plugin's metadata document.
    ///
    /// See [`DocumentLocation`] for the precedence between the cases.
    pub fn resolve_plugin_document_uri(
        &self,
        registry: &PluginRegistry,
        summary: &RawPluginSummary,
        is_default_registry: bool,
    ) -> Result<String, PlughubError> {
        DocumentLocation::classify(summary, is_default_registry).resolve(registry)
    }

    /// Fetch and parse the metadata document at `uri`.
    ///
    /// If that fails, retries once at `uri` with `meta.yaml` appended. If both
    /// attempts fail the error carries the first attempt's message.
    pub async fn fetch_plugin_document(&self, uri: &str) -> Result<PluginDocument, PlughubError> {
        let first = match self.load_document(uri).await {
            Ok(document) => return Ok(document),
            Err(e) => e,
        };

        let fallback = if uri.ends_with('/') {
            format!("{uri}{META_YAML}")
        } else {
            format!("{uri}/{META_YAML}")
        };
        debug!(uri = %uri, fallback = %fallback, error = %first, "retrying plugin document");

        self.load_document(&fallback)
            .await
            .map_err(|_| PlughubError::PluginDocument {
                uri: uri.to_string(),
                message: first.to_string(),
            })
    }

    async fn load_document(&self, uri: &str) -> Result<PluginDocument, PlughubError> {
        let body = self.transport.get(uri).await?;
        PluginDocument::from_yaml(&body).map_err(|message| PlughubError::PluginDocument {
            uri: uri.to_string(),
            message,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use plughub_core::PluginLinks;
    use plughub_test_utils::{MockTransport, StaticSettings};

    const META: &str = "publisher: pub\nname: pl\nversion: 1.0.0\ntype: VS Code extension\n";

    fn client(transport: MockTransport, settings: StaticSettings) -> RegistryClient {
        RegistryClient::new(Arc::new(transport), Arc::new(settings))
    }

    #[tokio::test]
    async fn default_registry_prefers_internal_url() {
        let settings = StaticSettings::new("https://public/reg/", Some("http://internal/reg//"));
        let client = client(MockTransport::new(), settings);
        let registry = client.resolve_default_registry().await.unwrap();
        assert_eq!(registry.name, DEFAULT_REGISTRY_NAME);
        assert_eq!(registry.uri, "http://internal/reg");
        assert_eq!(registry.public_uri, "https://public/reg");
    }

    #[tokio::test]
    async fn default_registry_falls_back_to_public_url() {
        let client = client(MockTransport::new(), StaticSettings::new("https://public/reg", None));
        let registry = client.resolve_default_registry().await.unwrap();
        assert_eq!(registry.uri, "https://public/reg");
    }

    #[tokio::test]
    async fn default_registry_is_resolved_once() {
        let settings = Arc::new(StaticSettings::new("https://public/reg", None));
        let client = RegistryClient::new(Arc::new(MockTransport::new()), settings.clone());
        client.resolve_default_registry().await.unwrap();
        client.resolve_default_registry().await.unwrap();
        assert_eq!(settings.reads(), 1);
    }

    #[tokio::test]
    async fn default_registry_requires_settings() {
        let client = client(MockTransport::new(), StaticSettings::unavailable());
        let err = client.resolve_default_registry().await.unwrap_err();
        assert!(matches!(err, PlughubError::Configuration(_)), "got: {err}");
    }

    #[tokio::test]
    async fn default_registry_requires_public_url() {
        let settings = StaticSettings::from_settings(plughub_core::WorkspaceSettings {
            public_registry_url: None,
            internal_registry_url: Some("http://internal".into()),
        });
        let client = client(MockTransport::new(), settings);
        let err = client.resolve_default_registry().await.unwrap_err();
        assert!(err.to_string().contains("public plugin registry URL"), "got: {err}");
    }

    #[tokio::test]
    async fn fetch_index_parses_summaries() {
        let transport = MockTransport::new().with_json(
            "http://reg/a/plugins/",
            &serde_json::json!([{"id": "pub/pl/1.0", "links": {"self": "/pub/pl/1.0"}}]),
        );
        let client = client(transport, StaticSettings::new("http://reg/a", None));
        let registry = PluginRegistry::new("a", "http://reg/a", None);
        let RegistryIndex::Plugins(summaries) = client.fetch_index(&registry).await.unwrap() else {
            panic!("expected a plugin list");
        };
        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].self_link(), Some("/pub/pl/1.0"));
    }

    #[tokio::test]
    async fn fetch_index_empty_body_is_not_a_list() {
        let transport = MockTransport::new().with_body("http://reg/a/plugins/", "");
        let client = client(transport, StaticSettings::new("http://reg/a", None));
        let registry = PluginRegistry::new("a", "http://reg/a", None);
        assert_eq!(
            client.fetch_index(&registry).await.unwrap(),
            RegistryIndex::NotAList(serde_json::json!({}))
        );
    }

    #[tokio::test]
    async fn fetch_index_transport_failure_is_unreachable() {
        let transport =
            MockTransport::new().with_failure("http://reg/a/plugins/", "connection refused");
        let client = client(transport, StaticSettings::new("http://reg/a", None));
        let registry = PluginRegistry::new("a", "http://reg/a", None);
        let err = client.fetch_index(&registry).await.unwrap_err();
        assert!(matches!(err, PlughubError::RegistryUnreachable { .. }));
        assert!(err.to_string().contains("connection refused"), "got: {err}");
    }

    #[tokio::test]
    async fn fetch_index_garbage_is_invalid() {
        let transport = MockTransport::new().with_body("http://reg/a/plugins/", "<html>");
        let client = client(transport, StaticSettings::new("http://reg/a", None));
        let registry = PluginRegistry::new("a", "http://reg/a", None);
        let err = client.fetch_index(&registry).await.unwrap_err();
        assert!(matches!(err, PlughubError::InvalidIndex { .. }));
    }

    #[tokio::test]
    async fn resolve_uri_ignores_self_path_on_default() {
        let client = client(MockTransport::new(), StaticSettings::new("http://reg/a", None));
        let registry = PluginRegistry::new("a", "http://reg/a", None);
        let summary = RawPluginSummary {
            id: "pub.pl/1.0".into(),
            links: Some(PluginLinks {
                self_link: Some("/v3/plugins/pub.pl/1.0".into()),
                ..PluginLinks::default()
            }),
            ..RawPluginSummary::default()
        };
        assert_eq!(
            client
                .resolve_plugin_document_uri(&registry, &summary, true)
                .unwrap(),
            "http://reg/a/plugins/pub.pl/1.0/"
        );
    }

    #[tokio::test]
    async fn fetch_document_retries_with_meta_yaml() {
        let transport = MockTransport::new().with_body("http://reg/a/plugins/pl/meta.yaml", META);
        let client = client(transport, StaticSettings::new("http://reg/a", None));
        let document = client
            .fetch_plugin_document("http://reg/a/plugins/pl/")
            .await
            .unwrap();
        assert_eq!(document.name, "pl");
    }

    #[tokio::test]
    async fn fetch_document_inserts_slash_before_meta_yaml() {
        let transport = MockTransport::new().with_body("http://reg/a/pl/meta.yaml", META);
        let client = client(transport, StaticSettings::new("http://reg/a", None));
        assert!(client.fetch_plugin_document("http://reg/a/pl").await.is_ok());
    }

    #[tokio::test]
    async fn fetch_document_reports_first_error() {
        let transport = MockTransport::new()
            .with_failure("http://reg/a/pl/", "first failure")
            .with_failure("http://reg/a/pl/meta.yaml", "second failure");
        let client = client(transport, StaticSettings::new("http://reg/a", None));
        let err = client
            .fetch_plugin_document("http://reg/a/pl/")
            .await
            .unwrap_err();
        assert!(matches!(err, PlughubError::PluginDocument { .. }));
        let rendered = err.to_string();
        assert!(rendered.contains("first failure"), "got: {rendered}");
        assert!(!rendered.contains("second failure"), "got: {rendered}");
    }

    #[tokio::test]
    async fn fetch_document_does_not_retry_on_success() {
        let transport = Arc::new(MockTransport::new().with_body("http://reg/a/pl/", META));
        let client = RegistryClient::new(
            transport.clone(),
            Arc::new(StaticSettings::new("http://reg/a", None)),
        );
        client.fetch_plugin_document("http://reg/a/pl/").await.unwrap();
        assert_eq!(transport.requests().await, vec!["http://reg/a/pl/"]);
    }
}
