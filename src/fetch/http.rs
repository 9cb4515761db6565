//! Binary distribution downloads over HTTP/HTTPS.
//!
//! A download is two steps: [`HttpDownloader::open`] sends the request and
//! exposes the announced size, then [`PendingDownload::save_to`] streams the
//! body to disk, reporting progress as it goes.

use reqwest::blocking::{Client, Response};
use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::Path;
use std::time::Duration;

use crate::error::{CopasError, Result};

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(300);

const BLOCK_SIZE: usize = 8192;

/// Downloads binary distributions.
pub struct HttpDownloader {
    client: Client,
    timeout: Option<Duration>,
}

/// A response whose body has not been read yet.
pub struct PendingDownload {
    url: String,
    response: Response,
}

impl HttpDownloader {
    /// Create a downloader with the default timeout.
    pub fn new() -> Result<Self> {
        Self::with_timeout(Some(DEFAULT_TIMEOUT))
    }

    /// Create a downloader with a custom timeout; `None` waits forever.
    pub fn with_timeout(timeout: Option<Duration>) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("copas/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to build HTTP client: {}", e))?;

        Ok(Self { client, timeout })
    }

    /// Get the configured timeout.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Send the request and check the status.
    pub fn open(&self, url: &str) -> Result<PendingDownload> {
        tracing::debug!("GET {}", url);
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| download_failed(url, e))?;

        if !response.status().is_success() {
            return Err(CopasError::DownloadFailed {
                url: url.to_string(),
                message: format!("HTTP {}", response.status()),
            });
        }

        Ok(PendingDownload {
            url: url.to_string(),
            response,
        })
    }
}

impl PendingDownload {
    /// Size announced by the server, if any.
    pub fn content_length(&self) -> Option<u64> {
        self.response.content_length()
    }

    /// Stream the body to `path`, calling `on_progress` with the running
    /// byte count. Returns the number of bytes written.
    pub fn save_to<F>(mut self, path: &Path, mut on_progress: F) -> Result<u64>
    where
        F: FnMut(u64),
    {
        let mut file = BufWriter::new(File::create(path)?);
        let mut buffer = [0u8; BLOCK_SIZE];
        let mut written: u64 = 0;

        loop {
            let n = self
                .response
                .read(&mut buffer)
                .map_err(|e| download_failed(&self.url, e))?;
            if n == 0 {
                break;
            }
            file.write_all(&buffer[..n])?;
            written += n as u64;
            on_progress(written);
        }

        file.flush()?;
        tracing::debug!("Saved {} bytes to {}", written, path.display());
        Ok(written)
    }
}

fn download_failed(url: &str, err: impl std::fmt::Display) -> CopasError {
    CopasError::DownloadFailed {
        url: url.to_string(),
        message: err.to_string(),
    }
}
