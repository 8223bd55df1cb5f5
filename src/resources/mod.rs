// Resources module for the MCP server
//
// Read-only snapshots of upstream collections, addressed by fixed URIs.
// The descriptor table and the read dispatch derive from the same entries,
// mirroring the tool registry. Every snapshot is the raw upstream payload,
// fetched fresh per read.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use crate::defaults;
use crate::errors::ResourceError;
use crate::protocol::{ResourceContents, ResourceDescriptor};
use crate::tools::ToolContext;

const MIME_JSON: &str = "application/json";

/// A read-only resource: a descriptor plus its upstream snapshot fetch
#[async_trait]
pub trait Resource: Send + Sync {
    /// Get the resource descriptor
    fn descriptor(&self) -> ResourceDescriptor;

    /// Fetch the snapshot this resource exposes
    async fn read(&self, context: ToolContext) -> Result<Value, ResourceError>;
}

/// ResourceRegistry maps each URI to its descriptor and reader
pub struct ResourceRegistry {
    resources: BTreeMap<String, Arc<dyn Resource>>,
}

impl ResourceRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            resources: BTreeMap::new(),
        }
    }

    /// Register a resource with the registry
    pub fn register(&mut self, resource: Arc<dyn Resource>) -> Result<(), ResourceError> {
        let uri = resource.descriptor().uri;

        if self.resources.contains_key(&uri) {
            return Err(ResourceError::Registration(format!(
                "Resource with uri '{}' already registered",
                uri
            )));
        }

        self.resources.insert(uri, resource);
        Ok(())
    }

    /// Get a resource by URI
    pub fn get(&self, uri: &str) -> Option<Arc<dyn Resource>> {
        self.resources.get(uri).cloned()
    }

    /// List all registered resource descriptors, in URI order
    pub fn list(&self) -> Vec<ResourceDescriptor> {
        self.resources
            .values()
            .map(|resource| resource.descriptor())
            .collect()
    }
}

impl Default for ResourceRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the fixed resource table.
pub fn init_registry() -> Arc<ResourceRegistry> {
    let mut registry = ResourceRegistry::new();

    if let Err(err) = registry.register(Arc::new(RepositoryResource)) {
        log::error!("Failed to register repository resource: {}", err);
    }
    if let Err(err) = registry.register(Arc::new(CommitsResource)) {
        log::error!("Failed to register commits resource: {}", err);
    }
    if let Err(err) = registry.register(Arc::new(IssuesResource)) {
        log::error!("Failed to register issues resource: {}", err);
    }

    Arc::new(registry)
}

/// Read a resource by URI, serializing the snapshot as pretty-printed JSON.
pub async fn read_resource(
    registry: &ResourceRegistry,
    uri: &str,
    context: ToolContext,
) -> Result<ResourceContents, ResourceError> {
    let resource = registry
        .get(uri)
        .ok_or_else(|| ResourceError::Unknown(uri.to_string()))?;

    let descriptor = resource.descriptor();
    let snapshot = resource.read(context).await?;
    let text = serde_json::to_string_pretty(&snapshot)
        .map_err(|e| ResourceError::Serialize(e.to_string()))?;

    Ok(ResourceContents {
        uri: descriptor.uri,
        mime_type: descriptor.mime_type,
        text,
    })
}

/// Repository metadata snapshot (`github://repository`)
struct RepositoryResource;

#[async_trait]
impl Resource for RepositoryResource {
    fn descriptor(&self) -> ResourceDescriptor {
        ResourceDescriptor {
            uri: "github://repository".to_string(),
            name: "Repository Information".to_string(),
            description: "Information about the GitHub repository".to_string(),
            mime_type: MIME_JSON.to_string(),
        }
    }

    async fn read(&self, context: ToolContext) -> Result<Value, ResourceError> {
        let repo = &context.repository;
        Ok(context
            .github
            .get_repository(&repo.owner, &repo.name)
            .await?)
    }
}

/// Recent commit list snapshot (`github://commits`)
struct CommitsResource;

#[async_trait]
impl Resource for CommitsResource {
    fn descriptor(&self) -> ResourceDescriptor {
        ResourceDescriptor {
            uri: "github://commits".to_string(),
            name: "Recent Commits".to_string(),
            description: "List of recent commits".to_string(),
            mime_type: MIME_JSON.to_string(),
        }
    }

    async fn read(&self, context: ToolContext) -> Result<Value, ResourceError> {
        let repo = &context.repository;
        Ok(context
            .github
            .recent_commits(&repo.owner, &repo.name, defaults::LIMIT)
            .await?)
    }
}

/// Open issue list snapshot (`github://issues`)
struct IssuesResource;

#[async_trait]
impl Resource for IssuesResource {
    fn descriptor(&self) -> ResourceDescriptor {
        ResourceDescriptor {
            uri: "github://issues".to_string(),
            name: "Open Issues".to_string(),
            description: "List of open issues".to_string(),
            mime_type: MIME_JSON.to_string(),
        }
    }

    async fn read(&self, context: ToolContext) -> Result<Value, ResourceError> {
        let repo = &context.repository;
        Ok(context
            .github
            .open_issues(&repo.owner, &repo.name, defaults::LIMIT)
            .await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{GithubSettings, RepositorySettings};
    use crate::github::GithubClient;
    use pretty_assertions::assert_eq;

    fn context_for(server: &mockito::ServerGuard) -> ToolContext {
        let settings = GithubSettings {
            api_url: server.url(),
            user_agent: "github-mcp-tests".to_string(),
        };
        ToolContext {
            repository: RepositorySettings {
                owner: "octocat".to_string(),
                name: "Hello-World".to_string(),
            },
            github: Arc::new(GithubClient::new(&settings, "test-token".to_string())),
        }
    }

    #[test]
    fn registry_lists_the_fixed_uris() {
        let registry = init_registry();
        let uris: Vec<String> = registry.list().into_iter().map(|r| r.uri).collect();
        assert_eq!(
            uris,
            vec![
                "github://commits".to_string(),
                "github://issues".to_string(),
                "github://repository".to_string(),
            ]
        );
    }

    #[test]
    fn duplicate_registration_is_rejected() {
        let mut registry = ResourceRegistry::new();
        registry.register(Arc::new(RepositoryResource)).unwrap();
        let err = registry.register(Arc::new(RepositoryResource)).unwrap_err();
        assert!(matches!(err, ResourceError::Registration(_)));
    }

    #[tokio::test]
    async fn unknown_uri_fails_with_its_name() {
        let registry = init_registry();
        let server = mockito::Server::new_async().await;
        let err = read_resource(&registry, "github://nope", context_for(&server))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Unknown resource: github://nope");
    }

    #[tokio::test]
    async fn repository_snapshot_passes_payload_through() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/repos/octocat/Hello-World")
            .with_status(200)
            .with_body(r#"{"full_name": "octocat/Hello-World", "stargazers_count": 80}"#)
            .create_async()
            .await;

        let registry = init_registry();
        let contents = read_resource(&registry, "github://repository", context_for(&server))
            .await
            .unwrap();

        assert_eq!(contents.uri, "github://repository");
        assert_eq!(contents.mime_type, "application/json");
        let parsed: Value = serde_json::from_str(&contents.text).unwrap();
        assert_eq!(parsed["stargazers_count"], 80);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn issues_snapshot_requests_open_state() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/repos/octocat/Hello-World/issues")
            .match_query(mockito::Matcher::AllOf(vec![
                mockito::Matcher::UrlEncoded("state".to_string(), "open".to_string()),
                mockito::Matcher::UrlEncoded("per_page".to_string(), "10".to_string()),
            ]))
            .with_status(200)
            .with_body("[]")
            .create_async()
            .await;

        let registry = init_registry();
        read_resource(&registry, "github://issues", context_for(&server))
            .await
            .unwrap();
        mock.assert_async().await;
    }
}
