//! Corpus download from Zenodo records.

use std::io::Cursor;
use std::time::Duration;

use polars::prelude::DataFrame;
use reqwest::blocking::Client;
use tracing::{debug, info};

use crate::corpus::read_corpus_zip;
use crate::error::{IngestError, Result};

/// Zenodo base URL.
const ZENODO_URL: &str = "https://zenodo.org";

/// HTTP request timeout.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Download URL of a file attached to a Zenodo record.
///
/// # Examples
///
/// ```
/// use tm_ingest::zenodo_file_url;
///
/// assert_eq!(
///     zenodo_file_url("4596345", "ChroniclItaly_3.0_original.zip"),
///     "https://zenodo.org/record/4596345/files/ChroniclItaly_3.0_original.zip"
/// );
/// ```
pub fn zenodo_file_url(doi: &str, file_name: &str) -> String {
    format!("{ZENODO_URL}/record/{doi}/files/{file_name}")
}

/// Client for downloading corpus archives from Zenodo.
pub struct ZenodoClient {
    client: Client,
}

impl ZenodoClient {
    /// Create a client with the default request timeout.
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| IngestError::Download {
                url: ZENODO_URL.to_string(),
                message: e.to_string(),
            })?;
        Ok(Self { client })
    }

    /// Download a zip archive from a Zenodo record and onboard its `.txt` files.
    pub fn fetch_corpus(&self, doi: &str, file_name: &str) -> Result<DataFrame> {
        let url = zenodo_file_url(doi, file_name);
        debug!(url = %url, "downloading corpus archive");

        let download_error = |message: String| IngestError::Download {
            url: url.clone(),
            message,
        };
        let response = self
            .client
            .get(&url)
            .send()
            .map_err(|e| download_error(e.to_string()))?;
        if !response.status().is_success() {
            return Err(download_error(format!("HTTP status {}", response.status())));
        }
        let bytes = response
            .bytes()
            .map_err(|e| download_error(e.to_string()))?;

        info!(url = %url, bytes = bytes.len(), "downloaded corpus archive");
        read_corpus_zip(Cursor::new(bytes))
    }
}

/// Download and onboard a Zenodo corpus with a fresh client.
pub fn fetch_zenodo_corpus(doi: &str, file_name: &str) -> Result<DataFrame> {
    ZenodoClient::new()?.fetch_corpus(doi, file_name)
}
