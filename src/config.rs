// config.rs
use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, Parser)]
#[command(
    name = "property_finder",
    about = "Web form for searching property listings and exporting them as CSV",
    version
)]
pub struct Config {
    /// Address the HTTP server listens on.
    #[arg(long, env = "PROPERTY_FINDER_ADDR", default_value = "127.0.0.1:3000")]
    pub addr: SocketAddr,

    /// Directory exported CSV files are written to and served from.
    #[arg(long, env = "PROPERTY_FINDER_EXPORT_DIR", default_value = "static")]
    pub export_dir: PathBuf,

    /// Maximum number of blocking worker threads.
    #[arg(long, env = "PROPERTY_FINDER_WORKERS", default_value_t = 8)]
    pub workers: usize,

    /// Per-scrape HTTP timeout in seconds. Unset means no timeout.
    #[arg(long, env = "PROPERTY_FINDER_SCRAPE_TIMEOUT")]
    pub scrape_timeout_secs: Option<u64>,

    /// Route listing fetches through ZenRows when set.
    #[arg(long, env = "ZENROWS_API_KEY", hide_env_values = true)]
    pub zenrows_api_key: Option<String>,
}

impl Config {
    pub fn scrape_timeout(&self) -> Option<Duration> {
        self.scrape_timeout_secs.map(Duration::from_secs)
    }
}
