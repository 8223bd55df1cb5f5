// Typed slices of GitHub API payloads
//
// Only the fields the tool projections need are modeled; everything else in
// the upstream payload is ignored during deserialization. Operations that
// pass the payload through unmodified skip these types entirely.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::GithubError;

/// A single file fetched from the contents endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct FileContent {
    /// Blob sha identifying the current version of the file
    pub sha: String,
    pub content: Option<String>,
    pub encoding: Option<String>,
}

impl FileContent {
    /// Decode the transport-encoded file body into text.
    pub fn decoded_text(&self) -> Result<String, GithubError> {
        let content = self
            .content
            .as_deref()
            .ok_or_else(|| GithubError::Decode("File content not available".to_string()))?;
        match self.encoding.as_deref() {
            Some("base64") => {
                // The API wraps base64 bodies at 60 columns.
                let compact: String = content.chars().filter(|c| !c.is_whitespace()).collect();
                let bytes = STANDARD
                    .decode(compact.as_bytes())
                    .map_err(|e| GithubError::Decode(format!("Invalid base64 content: {}", e)))?;
                String::from_utf8(bytes)
                    .map_err(|e| GithubError::Decode(format!("File is not valid UTF-8: {}", e)))
            }
            _ => Ok(content.to_string()),
        }
    }
}

/// Encode file content for transport.
pub fn encode_content(content: &str) -> String {
    STANDARD.encode(content.as_bytes())
}

/// Body of a contents write; `sha` is present only when updating an
/// existing file, and its absence tells the API to create one.
#[derive(Debug, Clone, Serialize)]
pub struct FileWrite {
    pub message: String,
    pub content: String,
    pub branch: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sha: Option<String>,
}

/// Response to a contents write
#[derive(Debug, Clone, Deserialize)]
pub struct FileWriteResponse {
    pub content: Option<WrittenFile>,
    pub commit: WriteCommit,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WrittenFile {
    pub path: String,
    pub sha: String,
    pub html_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WriteCommit {
    pub sha: String,
    pub message: Option<String>,
}

/// A commit as returned by the commits endpoints; `files` and `stats`
/// are only present on the single-commit endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct Commit {
    pub sha: String,
    pub commit: CommitMeta,
    pub html_url: Option<String>,
    #[serde(default)]
    pub files: Option<Vec<CommitFile>>,
    #[serde(default)]
    pub stats: Option<Value>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CommitMeta {
    pub message: String,
    pub author: Option<CommitAuthor>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CommitAuthor {
    pub name: Option<String>,
    pub date: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CommitFile {
    pub filename: String,
    pub status: String,
    pub additions: u64,
    pub deletions: u64,
}

/// Issue label, returned by the API either as an object or a bare string
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Label {
    Named { name: String },
    Plain(String),
}

impl Label {
    pub fn name(&self) -> &str {
        match self {
            Label::Named { name } => name,
            Label::Plain(name) => name,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Issue {
    pub number: u64,
    pub title: String,
    pub state: String,
    pub body: Option<String>,
    #[serde(default)]
    pub labels: Vec<Label>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    pub html_url: Option<String>,
}

/// Body of an issue creation request
#[derive(Debug, Clone, Serialize)]
pub struct NewIssue {
    pub title: String,
    pub body: String,
    pub labels: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PullRequest {
    pub number: u64,
    pub title: String,
    pub state: String,
    pub body: Option<String>,
    pub head: GitRef,
    pub base: GitRef,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    pub html_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GitRef {
    #[serde(rename = "ref")]
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Branch {
    pub name: String,
    pub commit: Commit,
    #[serde(default)]
    pub protected: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn encode_then_decode_is_identity() {
        let original = "fn main() {\n    println!(\"héllo wörld\");\n}\n";
        let file = FileContent {
            sha: "abc123".to_string(),
            content: Some(encode_content(original)),
            encoding: Some("base64".to_string()),
        };
        assert_eq!(file.decoded_text().unwrap(), original);
    }

    #[test]
    fn decode_handles_wrapped_base64() {
        let encoded = encode_content("line one\nline two\n");
        // Re-wrap the body the way the API does.
        let wrapped: String = encoded
            .as_bytes()
            .chunks(8)
            .map(|chunk| std::str::from_utf8(chunk).unwrap())
            .collect::<Vec<_>>()
            .join("\n");
        let file = FileContent {
            sha: "abc123".to_string(),
            content: Some(wrapped),
            encoding: Some("base64".to_string()),
        };
        assert_eq!(file.decoded_text().unwrap(), "line one\nline two\n");
    }

    #[test]
    fn plain_encoding_passes_through() {
        let file = FileContent {
            sha: "abc123".to_string(),
            content: Some("already text".to_string()),
            encoding: None,
        };
        assert_eq!(file.decoded_text().unwrap(), "already text");
    }

    #[test]
    fn missing_content_is_an_error() {
        let file = FileContent {
            sha: "abc123".to_string(),
            content: None,
            encoding: None,
        };
        let err = file.decoded_text().unwrap_err();
        assert_eq!(err.to_string(), "File content not available");
    }

    #[test]
    fn labels_deserialize_from_objects_and_strings() {
        let issue: Issue = serde_json::from_str(
            r#"{
                "number": 7,
                "title": "Bug",
                "state": "open",
                "body": null,
                "labels": [{"name": "bug", "color": "red"}, "triage"]
            }"#,
        )
        .unwrap();
        let names: Vec<&str> = issue.labels.iter().map(Label::name).collect();
        assert_eq!(names, vec!["bug", "triage"]);
    }

    #[test]
    fn file_write_omits_sha_when_absent() {
        let write = FileWrite {
            message: "Update notes.md".to_string(),
            content: encode_content("notes"),
            branch: "main".to_string(),
            sha: None,
        };
        let rendered = serde_json::to_value(&write).unwrap();
        assert!(rendered.get("sha").is_none());

        let update = FileWrite {
            sha: Some("v1".to_string()),
            ..write
        };
        let rendered = serde_json::to_value(&update).unwrap();
        assert_eq!(rendered["sha"], "v1");
    }
}
