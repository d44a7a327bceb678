//! File operations for the ufile.io API.

use crate::client::API_KEY_HEADER;
use crate::error::{Result, UfileError};
use crate::response;
use crate::types::{FileMetadata, ListFilesQuery, UploadSession};
use reqwest::multipart::{Form, Part};
use reqwest::{Client, RequestBuilder};
use std::path::Path;
use tokio::fs;
use tracing::{debug, info};

/// Client for file operations.
///
/// Obtained from [`UfileClient::files`](crate::UfileClient::files).
pub struct FileClient<'a> {
    http: &'a Client,
    base_url: &'a str,
    api_key: Option<&'a str>,
}

impl<'a> FileClient<'a> {
    pub(crate) fn new(http: &'a Client, base_url: &'a str, api_key: Option<&'a str>) -> Self {
        Self {
            http,
            base_url,
            api_key,
        }
    }

    fn require_api_key(&self) -> Result<&'a str> {
        self.api_key.ok_or(UfileError::NotAuthenticated)
    }

    fn with_key_if_present(&self, request: RequestBuilder) -> RequestBuilder {
        match self.api_key {
            Some(key) => request.header(API_KEY_HEADER, key),
            None => request,
        }
    }

    /// Upload a file.
    ///
    /// Runs the full session flow: create a session sized to the file, send
    /// the content as a single chunk, then finalise with the resolved name.
    /// Works without an API key (anonymous upload).
    ///
    /// # Arguments
    /// * `path` - Path to the file to upload
    /// * `file_name` - Name to give the file on the server; defaults to the
    ///   path's base name
    /// * `folder_id` - Folder to upload into; defaults to the root folder
    pub async fn upload(
        &self,
        path: &Path,
        file_name: Option<&str>,
        folder_id: Option<u64>,
    ) -> Result<FileMetadata> {
        let metadata = fs::metadata(path)
            .await
            .map_err(|_| UfileError::InvalidInput(format!("not a file: {}", path.display())))?;
        if !metadata.is_file() {
            return Err(UfileError::InvalidInput(format!(
                "not a file: {}",
                path.display()
            )));
        }

        let resolved_name = match file_name {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => path
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or("file")
                .to_string(),
        };

        debug!(file = %path.display(), name = %resolved_name, "Uploading file");

        // The session id is a local value threaded through the calls, so
        // concurrent uploads on one client cannot cross-contaminate.
        let session = self.create_session(metadata.len()).await?;
        self.upload_chunk(&session, path, &resolved_name).await?;
        self.finalise(&session, &resolved_name, folder_id).await
    }

    /// Request an upload session sized to the file.
    async fn create_session(&self, file_size: u64) -> Result<UploadSession> {
        let url = format!("{}/upload/create_session", self.base_url);
        debug!(url = %url, file_size, "Creating upload session");

        let response = self
            .with_key_if_present(self.http.post(&url))
            .form(&[("file_size", file_size.to_string())])
            .send()
            .await?;

        response::json(response).await
    }

    /// Send the file content as chunk 1 of the session.
    async fn upload_chunk(
        &self,
        session: &UploadSession,
        path: &Path,
        file_name: &str,
    ) -> Result<()> {
        let url = format!("{}/upload/chunk", self.base_url);
        let contents = fs::read(path).await?;
        debug!(url = %url, fuid = %session.fuid, size = contents.len(), "Uploading chunk");

        let file_part = Part::bytes(contents)
            .file_name(file_name.to_string())
            .mime_str("application/octet-stream")?;
        let form = Form::new()
            .text("chunk_index", "1")
            .text("fuid", session.fuid.clone())
            .part("file", file_part);

        let response = self
            .with_key_if_present(self.http.post(&url))
            .multipart(form)
            .send()
            .await?;

        response::text(response).await?;
        Ok(())
    }

    /// Close the session and obtain the file's metadata.
    async fn finalise(
        &self,
        session: &UploadSession,
        file_name: &str,
        folder_id: Option<u64>,
    ) -> Result<FileMetadata> {
        let url = format!("{}/upload/finalise", self.base_url);

        let mut form = vec![
            ("fuid", session.fuid.clone()),
            ("file_name", file_name.to_string()),
            ("file_type", file_type_for(file_name).to_string()),
            ("total_chunks", "1".to_string()),
        ];
        if let Some(folder_id) = folder_id {
            form.push(("folder_id", folder_id.to_string()));
        }

        debug!(url = %url, fuid = %session.fuid, file_name, "Finalising upload");

        let response = self
            .with_key_if_present(self.http.post(&url))
            .form(&form)
            .send()
            .await?;

        let file: FileMetadata = response::json(response).await?;
        info!(id = file.id, name = %file.name, "File uploaded");
        Ok(file)
    }

    /// Resolve a public `https://ufile.io/<slug>` link into a signed direct
    /// download URL.
    ///
    /// Generated links are valid for 1 hour and only available to the
    /// requesting IP address.
    pub async fn download_url(&self, public_url: &str) -> Result<String> {
        let api_key = self.require_api_key()?;
        let slug = parse_slug(public_url)?;

        let url = format!("{}/download/{}", self.base_url, slug);
        debug!(url = %url, slug = %slug, "Resolving download link");

        let response = self
            .http
            .get(&url)
            .header(API_KEY_HEADER, api_key)
            .send()
            .await?;

        let body = response::text(response).await?;
        // The server wraps the URL in a quoted, escaped JSON string.
        Ok(body.replace(['\\', '"'], ""))
    }

    /// Get a file's metadata by id.
    pub async fn get(&self, file_id: u64) -> Result<FileMetadata> {
        let api_key = self.require_api_key()?;
        let url = format!("{}/files/{}", self.base_url, file_id);
        debug!(url = %url, file_id, "Fetching file");

        let response = self
            .http
            .get(&url)
            .header(API_KEY_HEADER, api_key)
            .send()
            .await?;

        response::json(response).await
    }

    /// Delete a file by id.
    pub async fn delete(&self, file_id: u64) -> Result<serde_json::Value> {
        let api_key = self.require_api_key()?;
        let url = format!("{}/files/{}", self.base_url, file_id);
        debug!(url = %url, file_id, "Deleting file");

        let response = self
            .http
            .delete(&url)
            .header(API_KEY_HEADER, api_key)
            .send()
            .await?;

        let result = response::json(response).await?;
        info!(file_id, "File deleted");
        Ok(result)
    }

    /// List files matching the given filters.
    pub async fn list(&self, query: &ListFilesQuery) -> Result<Vec<FileMetadata>> {
        let api_key = self.require_api_key()?;
        let url = format!("{}/files/", self.base_url);
        let params = query.to_params();
        debug!(url = %url, params = ?params, "Listing files");

        let response = self
            .http
            .get(&url)
            .header(API_KEY_HEADER, api_key)
            .query(&params)
            .send()
            .await?;

        let files: Vec<FileMetadata> = response::json(response).await?;
        debug!(results = files.len(), "Listed files");
        Ok(files)
    }
}

/// Extract the slug from a public `https://ufile.io/<slug>` link.
fn parse_slug(public_url: &str) -> Result<String> {
    let invalid = || UfileError::InvalidInput(format!("not a valid ufile link: {}", public_url));

    let parsed = url::Url::parse(public_url).map_err(|_| invalid())?;
    if parsed.scheme() != "https"
        || parsed.host_str() != Some("ufile.io")
        || parsed.port().is_some()
    {
        return Err(invalid());
    }

    let slug = parsed.path().trim_start_matches('/');
    if slug.is_empty() {
        return Err(invalid());
    }
    Ok(slug.to_string())
}

/// File type sent at finalise time, derived from the resolved name.
fn file_type_for(file_name: &str) -> &str {
    Path::new(file_name)
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("txt")
}
