mod fetcher;

use std::fs;
use std::path::PathBuf;

use tracing::{error, info, warn};
use url::Url;

use crate::config::Config;
use crate::error::{AssetFetchError, RunError};
use crate::registry::Registry;

pub use fetcher::UReqFetcher;

#[derive(Debug, Clone, PartialEq)]
pub enum Response {
    /// HTTP 200 with its body.
    Ok(Vec<u8>),
    /// Any status other than 200.
    Status(u16),
    InvalidBody(String),
    NetworkError(String),
}

impl Response {
    pub fn ok(body: Vec<u8>) -> Self {
        Self::Ok(body)
    }

    pub fn status(code: u16) -> Self {
        Self::Status(code)
    }

    pub fn invalid_body(reason: impl Into<String>) -> Self {
        Self::InvalidBody(reason.into())
    }

    pub fn network_error(reason: impl Into<String>) -> Self {
        Self::NetworkError(reason.into())
    }
}

pub trait FileDownloader {
    fn fetch(&self, url: &str) -> Response;
}

/// A logo saved to disk.
#[derive(Debug, PartialEq)]
pub struct Asset {
    pub code: String,
    pub source: Url,
    pub file: PathBuf,
    pub content: Vec<u8>,
}

pub struct Downloader<T: FileDownloader> {
    fetcher: T,
    registry: PathBuf,
    output: PathBuf,
    base_url: Url,
}

impl<T> Downloader<T>
where
    T: FileDownloader,
{
    pub fn with_fetcher(config: &Config, fetcher: T) -> Self {
        Downloader {
            fetcher,
            registry: config.registry.clone(),
            output: config.output.clone(),
            base_url: config.base_url(),
        }
    }

    /// Prepare the output directory, load the registry, then fetch every code
    /// in order. Only a directory failure is returned; a registry failure is
    /// logged and ends the run early, and per-asset failures are logged and
    /// skipped.
    pub fn run(&self) -> Result<(), RunError> {
        self.prepare_output()?;

        let registry = match Registry::load(&self.registry) {
            Ok(registry) => {
                info!(codes = registry.len(), "Airline codes loaded successfully.");
                registry
            }
            Err(err) => {
                error!("Error loading airline codes: {err}");
                return Ok(());
            }
        };

        for (code, name) in registry.iter() {
            match self.fetch_asset(code, name) {
                Ok(asset) => {
                    info!(path = %asset.file.display(), "Downloaded logo for {name} - {code}");
                }
                Err(err @ AssetFetchError::Status(_)) => {
                    warn!("Failed to download logo for {name} - {code}. {err}");
                }
                Err(err) => {
                    warn!("Error downloading logo for {name} ({code}). Error: {err}");
                }
            }
        }

        Ok(())
    }

    /// Create the output directory and any missing parents.
    pub fn prepare_output(&self) -> Result<(), RunError> {
        fs::create_dir_all(&self.output).map_err(|source| RunError::PrepareOutput {
            path: self.output.clone(),
            source,
        })?;

        info!("Output directory '{}' is ready.", self.output.display());

        Ok(())
    }

    /// Fetch one logo and, on HTTP 200, overwrite `<output>/<code>.png` with it.
    pub fn fetch_asset(&self, code: &str, name: &str) -> Result<Asset, AssetFetchError> {
        check_code(code).map_err(|reason| AssetFetchError::InvalidCode {
            code: code.to_string(),
            reason,
        })?;

        let url = self.asset_url(code)?;

        info!(%url, "Attempting to download logo for {name} ({code})");

        match self.fetcher.fetch(url.as_str()) {
            Response::Status(status) => Err(AssetFetchError::Status(status)),
            Response::InvalidBody(reason) | Response::NetworkError(reason) => {
                Err(AssetFetchError::Transport(reason))
            }

            Response::Ok(body) => {
                let file = self.asset_path(code);

                fs::write(&file, &body).map_err(|err| AssetFetchError::Write {
                    path: file.clone(),
                    reason: err.to_string(),
                })?;

                Ok(Asset {
                    code: code.to_string(),
                    source: url,
                    file,
                    content: body,
                })
            }
        }
    }

    pub fn asset_url(&self, code: &str) -> Result<Url, AssetFetchError> {
        self.base_url
            .join(&format!("{code}.png"))
            .map_err(|err| AssetFetchError::InvalidUrl {
                code: code.to_string(),
                reason: err.to_string(),
            })
    }

    pub fn asset_path(&self, code: &str) -> PathBuf {
        self.output.join(format!("{code}.png"))
    }
}

// A code becomes both a URL segment and a file stem in the output directory.
fn check_code(code: &str) -> Result<(), &'static str> {
    if code.is_empty() {
        return Err("code is empty");
    }

    if code == "." || code == ".." {
        return Err("code is a relative path component");
    }

    if code.contains(['/', '\\', '\0']) {
        return Err("code contains a path separator");
    }

    if code.contains(['?', '#', ':']) {
        return Err("code contains a URL delimiter");
    }

    Ok(())
}

impl Downloader<UReqFetcher> {
    pub fn new(config: &Config) -> Self {
        Downloader::with_fetcher(config, UReqFetcher::new())
    }
}

#[cfg(test)]
use fetcher::MockFetcher;
