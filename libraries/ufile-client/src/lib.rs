//! ufile.io API Client
//!
//! HTTP client library for the [ufile.io](https://ufile.io) file-hosting
//! API.
//!
//! # Features
//!
//! - **Upload**: session-based upload of local files, anonymous or keyed
//! - **Download links**: resolve public share links into signed direct URLs
//! - **Files**: metadata fetch, filtered listing, deletion
//! - **Folders**: create, fetch, list, delete
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use ufile_client::{ListFilesQuery, UfileClient, UfileConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = UfileClient::new(UfileConfig::with_api_key("my-key"))?;
//!
//!     let file = client.upload_file(Path::new("notes.txt"), None, None).await?;
//!     println!("Uploaded {} (id {})", file.name, file.id);
//!
//!     let files = client.list_files(&ListFilesQuery::default()).await?;
//!     println!("Found {} files", files.len());
//!
//!     Ok(())
//! }
//! ```

mod client;
mod error;
mod files;
mod folders;
mod response;
mod types;

// Re-export main types
pub use client::UfileClient;
pub use error::{Result, UfileError};
pub use types::{
    FileMetadata, FolderMetadata, ListFilesQuery, UfileConfig, UploadSession, DEFAULT_BASE_URL,
};

// Re-export sub-clients; constructed through `UfileClient`
pub use files::FileClient;
pub use folders::FolderClient;
