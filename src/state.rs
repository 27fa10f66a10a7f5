use crate::cli::CommandArgs;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::sync::Arc;
use std::time::Duration;

/// Units the gateway reports by default when no config is supplied.
const DEFAULT_SERVICES: &[&str] = &[
    "subvideo.service",
    "subimu.service",
    "subcontrol.service",
    "subsensor.service",
    "subhealth.service",
    "subweb.service",
];

#[derive(Debug, Deserialize)]
struct ConfigFile {
    services: Vec<String>,
}

#[derive(Debug)]
pub struct AppStateInner {
    /// Pre-formatted `"<unit> is running"` labels for /get-running-list.
    pub running_list: Vec<String>,
    /// Upper bound on a single supervisor query.
    pub query_timeout: Duration,
}

pub type AppState = Arc<AppStateInner>;

/// Builds the shared state from the CLI arguments. Read-only after
/// startup, so the handlers share it behind a plain Arc.
///
/// Service list precedence: `--services` > `--config` file > built-in
/// defaults. A missing or malformed config file is a startup error.
pub fn new_state(args: &CommandArgs) -> Result<AppState> {
    let services = if !args.services.is_empty() {
        args.services.clone()
    } else if let Some(path) = &args.config {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let parsed: ConfigFile = serde_json::from_str(&raw)
            .with_context(|| format!("Malformed config file {}", path.display()))?;
        parsed.services
    } else {
        DEFAULT_SERVICES.iter().map(|s| s.to_string()).collect()
    };

    let running_list = services
        .iter()
        .map(|unit| format!("{} is running", unit))
        .collect();

    Ok(Arc::new(AppStateInner {
        running_list,
        query_timeout: Duration::from_secs(args.query_timeout),
    }))
}
