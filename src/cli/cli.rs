use clap::Parser;
use std::path::PathBuf;

/// Status Gateway - HTTP status endpoint for host services
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// Listen port
    #[arg(short, long, env = "PORT", default_value_t = 88)]
    pub port: u16,

    /// Listen address
    #[arg(short = 'a', long, env = "ADDRESS", default_value = "0.0.0.0")]
    pub address: String,

    /// Directory served as the site's static content
    #[arg(long, env = "PUBLIC_DIR", default_value = "public")]
    pub public_dir: PathBuf,

    /// JSON config file holding the known service list
    #[arg(short, long, env = "CONFIG")]
    pub config: Option<PathBuf>,

    /// Comma-separated service list, takes precedence over the config file
    #[arg(long, env = "SERVICES", value_delimiter = ',')]
    pub services: Vec<String>,

    /// Supervisor query timeout in seconds
    #[arg(long, env = "QUERY_TIMEOUT", default_value_t = 5)]
    pub query_timeout: u64,
}
