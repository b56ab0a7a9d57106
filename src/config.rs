use clap::Parser;
use tokio::sync::Semaphore;

/// Runtime configuration, parsed from CLI flags with environment fallbacks.
#[derive(Debug, Clone, Parser)]
#[command(name = "depot", version, about = "Minimal HTTP/1.1 echo and file server")]
pub struct Config {
    /// Port to bind to
    #[arg(long, default_value_t = 4221, env = "DEPOT_PORT")]
    pub port: u16,

    /// Directory for file hosting (download and upload)
    #[arg(long, default_value = "", env = "DEPOT_DIRECTORY")]
    pub directory: String,

    /// Maximum number of concurrently served connections; accepts beyond
    /// this bound wait for a free slot
    #[arg(
        long,
        default_value_t = 256,
        env = "DEPOT_MAX_CONNECTIONS",
        value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..=Semaphore::MAX_PERMITS as u64)
    )]
    pub max_connections: usize,
}

impl Config {
    pub fn load() -> Self {
        Self::parse()
    }

    /// The listen address: all interfaces on the configured port.
    pub fn bind_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}
