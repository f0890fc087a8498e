use std::path::PathBuf;

use clap::Parser;
use url::Url;

pub const DEFAULT_REGISTRY: &str = "airlines.json";
pub const DEFAULT_OUTPUT: &str = "70px";
pub const DEFAULT_BASE_URL: &str = "https://www.gstatic.com/flights/airline_logos/70px/";
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Download airline logos listed in a JSON registry.
#[derive(Debug, Clone, Parser)]
#[command(name = "logo-fetcher", version)]
#[command(about = "Download airline logos listed in a JSON registry", long_about = None)]
pub struct Config {
    /// JSON object mapping airline codes to display names.
    #[arg(long, env = "LOGO_FETCHER_REGISTRY", default_value = DEFAULT_REGISTRY)]
    pub registry: PathBuf,

    /// Directory receiving one `<code>.png` per downloaded logo.
    #[arg(long, env = "LOGO_FETCHER_OUTPUT", default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Base URL each `<code>.png` is resolved against.
    #[arg(long, env = "LOGO_FETCHER_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: Url,

    /// Log filter used when RUST_LOG is unset.
    #[arg(long, env = "LOGO_FETCHER_LOG", default_value = DEFAULT_LOG_LEVEL)]
    pub log_level: String,
}

impl Config {
    /// Base URL with a trailing slash, so joining `<code>.png` appends a segment
    /// instead of replacing the last one.
    pub fn base_url(&self) -> Url {
        with_trailing_slash(self.base_url.clone())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            registry: PathBuf::from(DEFAULT_REGISTRY),
            output: PathBuf::from(DEFAULT_OUTPUT),
            // constant is a valid URL
            base_url: Url::parse(DEFAULT_BASE_URL).unwrap(),
            log_level: String::from(DEFAULT_LOG_LEVEL),
        }
    }
}

fn with_trailing_slash(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }

    url
}
