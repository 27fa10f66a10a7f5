use serde::{Deserialize, Serialize};

/// Query parameters for `/check-process`.
///
/// `name` is optional on purpose: a missing or empty value is answered
/// with `isRunning: false` instead of a 400, so the endpoint never
/// surfaces a non-200 status.
#[derive(Debug, Deserialize)]
pub struct CheckProcessQuery {
    pub name: Option<String>,
}

/// Response body for `/check-process`.
#[derive(Debug, Serialize)]
pub struct ProcessStatus {
    #[serde(rename = "isRunning")]
    pub is_running: bool,
}

/// Response body for `/get-running-list`.
///
/// The entries are configuration data fixed at startup, not the result
/// of a live supervisor check.
#[derive(Debug, Serialize)]
pub struct RunningList {
    #[serde(rename = "runningList")]
    pub running_list: Vec<String>,
}
