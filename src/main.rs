use anyhow::Result;
use clap::Parser;
use logo_fetcher::{logging, Config, Downloader};

fn main() -> Result<()> {
    let config = Config::parse();

    logging::init_logging(&config.log_level)?;

    let downloader = Downloader::new(&config);

    downloader.run()?;

    Ok(())
}
