//! Main ufile.io client.

use crate::error::{Result, UfileError};
use crate::files::FileClient;
use crate::folders::FolderClient;
use crate::types::{FileMetadata, FolderMetadata, ListFilesQuery, UfileConfig};
use reqwest::Client;
use std::path::Path;
use std::time::Duration;

/// Header carrying the API key on authenticated requests.
pub(crate) const API_KEY_HEADER: &str = "X-API-KEY";

/// Main client for the ufile.io API.
///
/// Holds the API key and the HTTP client, and exposes one method per
/// capability. File and folder operations live on the [`FileClient`] and
/// [`FolderClient`] sub-clients, reachable through [`files`](Self::files)
/// and [`folders`](Self::folders); the methods here delegate to them.
///
/// Configuration is immutable after construction, and the upload session id
/// is threaded through each call rather than stored, so a single client can
/// be shared across concurrent calls.
///
/// # Example
///
/// ```ignore
/// use ufile_client::{UfileClient, UfileConfig};
///
/// let client = UfileClient::new(UfileConfig::with_api_key("my-key"))?;
///
/// // Upload into the root folder under the file's own name
/// let file = client.upload_file(Path::new("report.pdf"), None, None).await?;
/// println!("Uploaded as {} (id {})", file.name, file.id);
///
/// // Resolve a share link into a direct download URL
/// let link = client.download_file("https://ufile.io/abc123").await?;
/// println!("Direct link: {}", link);
/// ```
#[derive(Debug)]
pub struct UfileClient {
    http: Client,
    config: UfileConfig,
}

impl UfileClient {
    /// Create a new client with the given configuration.
    pub fn new(config: UfileConfig) -> Result<Self> {
        if config.base_url.is_empty() {
            return Err(UfileError::InvalidUrl("URL cannot be empty".into()));
        }

        let base_url = config.base_url.trim_end_matches('/').to_string();
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(UfileError::InvalidUrl(
                "URL must start with http:// or https://".into(),
            ));
        }

        let http = Client::builder()
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(format!("ufile-client/{}", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            config: UfileConfig {
                base_url,
                api_key: config.api_key,
            },
        })
    }

    /// Get the API base URL.
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Check whether the client has an API key configured.
    pub fn is_authenticated(&self) -> bool {
        self.config.api_key.is_some()
    }

    /// Get a client for file operations.
    pub fn files(&self) -> FileClient<'_> {
        FileClient::new(
            &self.http,
            &self.config.base_url,
            self.config.api_key.as_deref(),
        )
    }

    /// Get a client for folder operations.
    pub fn folders(&self) -> FolderClient<'_> {
        FolderClient::new(
            &self.http,
            &self.config.base_url,
            self.config.api_key.as_deref(),
        )
    }

    /// Upload a file, optionally under a different name or into a folder.
    pub async fn upload_file(
        &self,
        path: &Path,
        file_name: Option<&str>,
        folder_id: Option<u64>,
    ) -> Result<FileMetadata> {
        self.files().upload(path, file_name, folder_id).await
    }

    /// Resolve a public `https://ufile.io/<slug>` link into a direct
    /// download URL.
    pub async fn download_file(&self, public_url: &str) -> Result<String> {
        self.files().download_url(public_url).await
    }

    /// Get a file's metadata by id.
    pub async fn get_file(&self, file_id: u64) -> Result<FileMetadata> {
        self.files().get(file_id).await
    }

    /// Delete a file by id.
    pub async fn delete_file(&self, file_id: u64) -> Result<serde_json::Value> {
        self.files().delete(file_id).await
    }

    /// List files matching the given filters.
    pub async fn list_files(&self, query: &ListFilesQuery) -> Result<Vec<FileMetadata>> {
        self.files().list(query).await
    }

    /// Create a folder.
    pub async fn create_folder(
        &self,
        name: Option<&str>,
        folder_id: Option<u64>,
        public: bool,
    ) -> Result<FolderMetadata> {
        self.folders().create(name, folder_id, public).await
    }

    /// Get a folder's metadata by id.
    pub async fn get_folder(&self, folder_id: u64) -> Result<FolderMetadata> {
        self.folders().get(folder_id).await
    }

    /// Delete a folder by id.
    pub async fn delete_folder(&self, folder_id: u64) -> Result<serde_json::Value> {
        self.folders().delete(folder_id).await
    }

    /// List folders, optionally scoped to a parent folder.
    pub async fn list_folders(&self, folder_id: Option<u64>) -> Result<Vec<FolderMetadata>> {
        self.folders().list(folder_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_validation() {
        // Valid URLs
        assert!(UfileClient::new(UfileConfig::new()).is_ok());
        assert!(UfileClient::new(UfileConfig::new().base_url("http://localhost:8080")).is_ok());

        // Invalid URLs
        assert!(UfileClient::new(UfileConfig::new().base_url("")).is_err());
        assert!(UfileClient::new(UfileConfig::new().base_url("not-a-url")).is_err());
        assert!(UfileClient::new(UfileConfig::new().base_url("ftp://example.com")).is_err());
    }

    #[test]
    fn test_url_normalization() {
        let client = UfileClient::new(UfileConfig::new().base_url("https://example.com/"))
            .expect("valid url");
        assert_eq!(client.base_url(), "https://example.com");
    }

    #[test]
    fn test_authentication_flag() {
        let client = UfileClient::new(UfileConfig::new()).unwrap();
        assert!(!client.is_authenticated());

        let client = UfileClient::new(UfileConfig::with_api_key("key")).unwrap();
        assert!(client.is_authenticated());
    }
}
