// GitHub API client for the MCP server
//
// One method per upstream endpoint used by the catalog. Failures are
// classified into the closed `GithubError` kinds so every handler can apply
// the same policy instead of inspecting status codes.

mod types;

pub use types::{
    Branch, Commit, CommitAuthor, CommitFile, CommitMeta, FileContent, FileWrite,
    FileWriteResponse, GitRef, Issue, Label, NewIssue, PullRequest, WriteCommit, WrittenFile,
};

pub use types::encode_content;

use reqwest::{header, Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::config::GithubSettings;
use crate::errors::GithubError;

/// Client for the GitHub REST API, bound to one base URL and token.
///
/// The client carries no repository identity; callers pass the owner/name
/// pair from their context on every call.
pub struct GithubClient {
    http: Client,
    api_url: String,
    token: String,
    user_agent: String,
}

impl GithubClient {
    pub fn new(settings: &GithubSettings, token: String) -> Self {
        Self {
            http: Client::new(),
            api_url: settings.api_url.trim_end_matches('/').to_string(),
            token,
            user_agent: settings.user_agent.clone(),
        }
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.http
            .request(method, format!("{}{}", self.api_url, path))
            .bearer_auth(&self.token)
            .header(header::ACCEPT, "application/vnd.github+json")
            .header(header::USER_AGENT, &self.user_agent)
    }

    async fn send<T: DeserializeOwned>(builder: RequestBuilder) -> Result<T, GithubError> {
        let response = builder.send().await?;
        let response = Self::check_status(response).await?;
        response
            .json::<T>()
            .await
            .map_err(|e| GithubError::Decode(format!("Unexpected GitHub response: {}", e)))
    }

    /// Map a non-success response onto the closed error classification,
    /// preferring the API's own `message` field as the error text.
    async fn check_status(response: Response) -> Result<Response, GithubError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<Value>(&body)
            .ok()
            .and_then(|v| v.get("message").and_then(Value::as_str).map(str::to_string))
            .unwrap_or_else(|| {
                if body.is_empty() {
                    status.to_string()
                } else {
                    body.clone()
                }
            });
        Err(match status.as_u16() {
            404 => GithubError::NotFound(message),
            401 => GithubError::Unauthorized(message),
            429 => GithubError::RateLimited(message),
            403 if message.to_ascii_lowercase().contains("rate limit") => {
                GithubError::RateLimited(message)
            }
            code => GithubError::Api {
                status: code,
                message,
            },
        })
    }

    /// GET /repos/{owner}/{repo} (raw repository metadata)
    pub async fn get_repository(&self, owner: &str, repo: &str) -> Result<Value, GithubError> {
        Self::send(self.request(Method::GET, &format!("/repos/{}/{}", owner, repo))).await
    }

    /// GET /repos/{owner}/{repo}/contents/{path} (raw listing or file entry)
    pub async fn get_contents(
        &self,
        owner: &str,
        repo: &str,
        path: &str,
        git_ref: Option<&str>,
    ) -> Result<Value, GithubError> {
        let mut builder = self.request(
            Method::GET,
            &format!("/repos/{}/{}/contents/{}", owner, repo, path),
        );
        if let Some(git_ref) = git_ref {
            builder = builder.query(&[("ref", git_ref)]);
        }
        Self::send(builder).await
    }

    /// GET a single file with its content and blob sha
    pub async fn get_file(
        &self,
        owner: &str,
        repo: &str,
        path: &str,
        git_ref: Option<&str>,
    ) -> Result<FileContent, GithubError> {
        let mut builder = self.request(
            Method::GET,
            &format!("/repos/{}/{}/contents/{}", owner, repo, path),
        );
        if let Some(git_ref) = git_ref {
            builder = builder.query(&[("ref", git_ref)]);
        }
        Self::send(builder).await
    }

    /// PUT /repos/{owner}/{repo}/contents/{path} (create or update a file)
    pub async fn put_file(
        &self,
        owner: &str,
        repo: &str,
        path: &str,
        write: &FileWrite,
    ) -> Result<FileWriteResponse, GithubError> {
        Self::send(
            self.request(
                Method::PUT,
                &format!("/repos/{}/{}/contents/{}", owner, repo, path),
            )
            .json(write),
        )
        .await
    }

    /// GET /repos/{owner}/{repo}/commits on a branch
    pub async fn list_commits(
        &self,
        owner: &str,
        repo: &str,
        branch: &str,
        limit: u32,
    ) -> Result<Vec<Commit>, GithubError> {
        Self::send(
            self.request(Method::GET, &format!("/repos/{}/{}/commits", owner, repo))
                .query(&[("sha", branch), ("per_page", &limit.to_string())]),
        )
        .await
    }

    /// GET /repos/{owner}/{repo}/commits/{sha} (one commit with file stats)
    pub async fn get_commit(
        &self,
        owner: &str,
        repo: &str,
        sha: &str,
    ) -> Result<Commit, GithubError> {
        Self::send(self.request(
            Method::GET,
            &format!("/repos/{}/{}/commits/{}", owner, repo, sha),
        ))
        .await
    }

    /// GET /repos/{owner}/{repo}/issues filtered by state
    pub async fn list_issues(
        &self,
        owner: &str,
        repo: &str,
        state: &str,
        limit: u32,
    ) -> Result<Vec<Issue>, GithubError> {
        Self::send(
            self.request(Method::GET, &format!("/repos/{}/{}/issues", owner, repo))
                .query(&[("state", state), ("per_page", &limit.to_string())]),
        )
        .await
    }

    /// POST /repos/{owner}/{repo}/issues
    pub async fn create_issue(
        &self,
        owner: &str,
        repo: &str,
        issue: &NewIssue,
    ) -> Result<Issue, GithubError> {
        Self::send(
            self.request(Method::POST, &format!("/repos/{}/{}/issues", owner, repo))
                .json(issue),
        )
        .await
    }

    /// GET /repos/{owner}/{repo}/pulls filtered by state
    pub async fn list_pulls(
        &self,
        owner: &str,
        repo: &str,
        state: &str,
        limit: u32,
    ) -> Result<Vec<PullRequest>, GithubError> {
        Self::send(
            self.request(Method::GET, &format!("/repos/{}/{}/pulls", owner, repo))
                .query(&[("state", state), ("per_page", &limit.to_string())]),
        )
        .await
    }

    /// GET /repos/{owner}/{repo}/branches/{branch}
    pub async fn get_branch(
        &self,
        owner: &str,
        repo: &str,
        branch: &str,
    ) -> Result<Branch, GithubError> {
        Self::send(self.request(
            Method::GET,
            &format!("/repos/{}/{}/branches/{}", owner, repo, branch),
        ))
        .await
    }

    /// Raw snapshot of the most recent commits, for the resource reader
    pub async fn recent_commits(
        &self,
        owner: &str,
        repo: &str,
        limit: u32,
    ) -> Result<Value, GithubError> {
        Self::send(
            self.request(Method::GET, &format!("/repos/{}/{}/commits", owner, repo))
                .query(&[("per_page", &limit.to_string())]),
        )
        .await
    }

    /// Raw snapshot of the open issues, for the resource reader
    pub async fn open_issues(
        &self,
        owner: &str,
        repo: &str,
        limit: u32,
    ) -> Result<Value, GithubError> {
        Self::send(
            self.request(Method::GET, &format!("/repos/{}/{}/issues", owner, repo))
                .query(&[("state", "open"), ("per_page", &limit.to_string())]),
        )
        .await
    }
}
