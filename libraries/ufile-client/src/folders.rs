//! Folder operations for the ufile.io API.

use crate::client::API_KEY_HEADER;
use crate::error::{Result, UfileError};
use crate::response;
use crate::types::FolderMetadata;
use reqwest::Client;
use tracing::{debug, info};

/// Client for folder operations.
///
/// Obtained from [`UfileClient::folders`](crate::UfileClient::folders).
/// Every operation requires a configured API key.
pub struct FolderClient<'a> {
    http: &'a Client,
    base_url: &'a str,
    api_key: Option<&'a str>,
}

impl<'a> FolderClient<'a> {
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

    /// Create a folder.
    ///
    /// # Arguments
    /// * `name` - Name of the folder
    /// * `folder_id` - Parent folder; defaults to the root folder
    /// * `public` - Whether the folder is publicly visible
    pub async fn create(
        &self,
        name: Option<&str>,
        folder_id: Option<u64>,
        public: bool,
    ) -> Result<FolderMetadata> {
        let api_key = self.require_api_key()?;
        let url = format!("{}/folders/", self.base_url);

        let mut form: Vec<(&str, String)> = Vec::new();
        if let Some(name) = name {
            if !name.is_empty() {
                form.push(("name", name.to_string()));
            }
        }
        if let Some(folder_id) = folder_id {
            form.push(("folder_id", folder_id.to_string()));
        }
        if public {
            form.push(("public", "1".to_string()));
        }

        debug!(url = %url, "Creating folder");

        let response = self
            .http
            .post(&url)
            .header(API_KEY_HEADER, api_key)
            .form(&form)
            .send()
            .await?;

        let folder: FolderMetadata = response::json(response).await?;
        info!(id = folder.id, name = %folder.name, "Folder created");
        Ok(folder)
    }

    /// Get a folder's metadata by id.
    pub async fn get(&self, folder_id: u64) -> Result<FolderMetadata> {
        let api_key = self.require_api_key()?;
        let url = format!("{}/folders/{}", self.base_url, folder_id);
        debug!(url = %url, folder_id, "Fetching folder");

        let response = self
            .http
            .get(&url)
            .header(API_KEY_HEADER, api_key)
            .send()
            .await?;

        response::json(response).await
    }

    /// Delete a folder by id.
    pub async fn delete(&self, folder_id: u64) -> Result<serde_json::Value> {
        let api_key = self.require_api_key()?;
        let url = format!("{}/folders/{}", self.base_url, folder_id);
        debug!(url = %url, folder_id, "Deleting folder");

        let response = self
            .http
            .delete(&url)
            .header(API_KEY_HEADER, api_key)
            .send()
            .await?;

        let result = response::json(response).await?;
        info!(folder_id, "Folder deleted");
        Ok(result)
    }

    /// List folders, optionally scoped to a parent folder.
    pub async fn list(&self, folder_id: Option<u64>) -> Result<Vec<FolderMetadata>> {
        let api_key = self.require_api_key()?;
        let url = format!("{}/folders/", self.base_url);

        let mut params: Vec<(&str, String)> = Vec::new();
        if let Some(folder_id) = folder_id {
            params.push(("folder_id", folder_id.to_string()));
        }

        debug!(url = %url, parent = ?folder_id, "Listing folders");

        let response = self
            .http
            .get(&url)
            .header(API_KEY_HEADER, api_key)
            .query(&params)
            .send()
            .await?;

        let folders: Vec<FolderMetadata> = response::json(response).await?;
        debug!(results = folders.len(), "Listed folders");
        Ok(folders)
    }
}
