//! Types for ufile.io API requests and responses.

use serde::{Deserialize, Serialize};

/// Default base URL of the ufile.io API.
pub const DEFAULT_BASE_URL: &str = "https://up.ufile.io/v1";

/// Configuration for connecting to the ufile.io API.
///
/// Immutable once the client is built; construct a new client to swap keys.
#[derive(Debug, Clone)]
pub struct UfileConfig {
    /// Base URL of the API. Overridable for tests or proxies.
    pub base_url: String,
    /// API key, sent as the `X-API-KEY` header. Anonymous uploads work
    /// without one; every other operation requires it.
    pub api_key: Option<String>,
}

impl UfileConfig {
    /// Create an anonymous config against the public API.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: None,
        }
    }

    /// Create a config with an API key.
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: Some(api_key.into()),
        }
    }

    /// Override the base URL.
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }
}

impl Default for UfileConfig {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Upload Types
// =============================================================================

/// Server-issued session scoping one upload's chunk and finalise calls.
///
/// Obtained from `upload/create_session` and threaded through the rest of
/// the upload; never reused across uploads.
#[derive(Debug, Clone, Deserialize)]
pub struct UploadSession {
    pub fuid: String,
}

// =============================================================================
// File Types
// =============================================================================

/// A file as returned by the server.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FileMetadata {
    pub id: u64,
    pub name: String,
    #[serde(rename = "type")]
    pub file_type: Option<String>,
    pub size: Option<i64>,
    pub url: Option<String>,
    pub slug: Option<String>,
    /// Parent folder, if the file lives in one.
    pub folder_id: Option<u64>,
    #[serde(default)]
    pub archived: bool,
    #[serde(default)]
    pub deleted: bool,
    #[serde(default)]
    pub expired: bool,
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub banned: bool,
    pub date_created: Option<String>,
    pub date_expires: Option<String>,
}

/// Filters for listing files.
///
/// Empty strings, unset flags, and `None` values are omitted from the
/// request entirely; the API treats an absent parameter differently from an
/// explicit zero or empty string. Numeric parameters where an explicit zero
/// is meaningful (`days`, `offset`, `folder_id`) are `Option`-wrapped so
/// present-and-zero stays expressible.
#[derive(Debug, Clone)]
pub struct ListFilesQuery {
    /// Search the file name, e.g. "my-file".
    pub query: String,
    /// Filter the file type, e.g. "video".
    pub filter: String,
    /// Response limit; the server caps this at 100.
    pub limit: u32,
    /// Sort field, e.g. "id", "datecreated", "size".
    pub sort: String,
    /// Sort direction, "ASC" or "DESC".
    pub order: String,
    /// Include archived files.
    pub archived: bool,
    /// Include deleted files.
    pub deleted: bool,
    /// Include expired files.
    pub expired: bool,
    /// Only return active files.
    pub active: bool,
    /// Include banned files.
    pub banned: bool,
    /// Limit by file age in days.
    pub days: Option<u32>,
    /// Response offset for pagination.
    pub offset: Option<u32>,
    /// Restrict the listing to one folder.
    pub folder_id: Option<u64>,
}

impl Default for ListFilesQuery {
    fn default() -> Self {
        Self {
            query: String::new(),
            filter: String::new(),
            limit: 100,
            sort: "datecreated".to_string(),
            order: "DESC".to_string(),
            archived: false,
            deleted: false,
            expired: false,
            active: false,
            banned: false,
            days: None,
            offset: None,
            folder_id: None,
        }
    }
}

impl ListFilesQuery {
    /// Serialize to query parameters, omitting every falsy value.
    pub(crate) fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if !self.query.is_empty() {
            params.push(("query", self.query.clone()));
        }
        if !self.filter.is_empty() {
            params.push(("filter", self.filter.clone()));
        }
        if self.limit != 0 {
            params.push(("limit", self.limit.to_string()));
        }
        if !self.sort.is_empty() {
            params.push(("sort", self.sort.clone()));
        }
        if !self.order.is_empty() {
            params.push(("order", self.order.clone()));
        }
        if self.archived {
            params.push(("archived", "1".to_string()));
        }
        if self.deleted {
            params.push(("deleted", "1".to_string()));
        }
        if let Some(days) = self.days {
            params.push(("days", days.to_string()));
        }
        if self.expired {
            params.push(("expired", "1".to_string()));
        }
        if let Some(offset) = self.offset {
            params.push(("offset", offset.to_string()));
        }
        if self.active {
            params.push(("active", "1".to_string()));
        }
        if self.banned {
            params.push(("banned", "1".to_string()));
        }
        if let Some(folder_id) = self.folder_id {
            params.push(("folder_id", folder_id.to_string()));
        }
        params
    }
}

// =============================================================================
// Folder Types
// =============================================================================

/// A folder as returned by the server.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FolderMetadata {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub public: bool,
    /// Parent folder, if nested.
    pub folder_id: Option<u64>,
    /// Files contained in the folder, when the endpoint includes them.
    #[serde(default)]
    pub files: Vec<FileMetadata>,
}
