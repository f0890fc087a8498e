pub mod config;
pub mod downloader;
pub mod error;
pub mod logging;
pub mod registry;

pub use config::Config;
pub use downloader::{Asset, Downloader, FileDownloader, Response, UReqFetcher};
pub use error::{AssetFetchError, RegistryLoadError, RunError};
pub use registry::Registry;
