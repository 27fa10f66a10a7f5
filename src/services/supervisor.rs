use anyhow::{Context, Result};
use lazy_static::lazy_static;
use regex::Regex;
use std::time::Duration;
use tokio::process::Command;
use tokio::time::timeout;

const MAX_UNIT_NAME_LEN: usize = 256;

lazy_static! {
    // systemd unit names: identifier characters plus '.', '@', ':', '-'.
    static ref UNIT_NAME: Regex = Regex::new(r"^[A-Za-z0-9_.@:\-]+$").unwrap();
}

/// Whether a caller-supplied unit name is safe to hand to the
/// supervisor. Anything containing whitespace or shell metacharacters
/// is rejected before it reaches the process boundary.
pub fn is_valid_unit_name(name: &str) -> bool {
    !name.is_empty() && name.len() <= MAX_UNIT_NAME_LEN && UNIT_NAME.is_match(name)
}

/// Asks systemd whether a unit is currently active.
///
/// Runs `systemctl is-active <name>` with the name passed as a single
/// argv element; no shell is involved. The call is bounded by `limit`
/// so an unresponsive supervisor cannot hold a request open.
pub async fn query_unit_active(name: &str, limit: Duration) -> Result<bool> {
    let invocation = Command::new("systemctl").arg("is-active").arg(name).output();

    let output = timeout(limit, invocation)
        .await
        .with_context(|| format!("systemctl is-active timed out after {:?}", limit))?
        .context("Failed to execute systemctl")?;

    let stdout = String::from_utf8_lossy(&output.stdout);
    Ok(interpret_is_active(output.status.success(), &stdout))
}

/// Maps the supervisor's exit status and stdout to the boolean the API
/// reports. Only a clean exit whose trimmed output is exactly "active"
/// counts as running; "inactive", "failed", "unknown" and non-zero
/// exits all collapse to false.
pub fn interpret_is_active(exit_ok: bool, stdout: &str) -> bool {
    exit_ok && stdout.trim() == "active"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_ordinary_unit_names() {
        assert!(is_valid_unit_name("subvideo.service"));
        assert!(is_valid_unit_name("getty@tty1.service"));
        assert!(is_valid_unit_name("dbus-org.freedesktop.login1"));
        assert!(is_valid_unit_name("systemd-journald"));
    }

    #[test]
    fn rejects_shell_metacharacters() {
        assert!(!is_valid_unit_name("x; rm -rf /"));
        assert!(!is_valid_unit_name("$(reboot)"));
        assert!(!is_valid_unit_name("a|b"));
        assert!(!is_valid_unit_name("a b"));
        assert!(!is_valid_unit_name("`id`"));
        assert!(!is_valid_unit_name("a&&b"));
    }

    #[test]
    fn rejects_empty_and_oversized_names() {
        assert!(!is_valid_unit_name(""));
        assert!(!is_valid_unit_name(&"a".repeat(MAX_UNIT_NAME_LEN + 1)));
        assert!(is_valid_unit_name(&"a".repeat(MAX_UNIT_NAME_LEN)));
    }

    #[test]
    fn only_exact_active_counts_as_running() {
        assert!(interpret_is_active(true, "active\n"));
        assert!(interpret_is_active(true, "  active  "));
        assert!(!interpret_is_active(true, "activating"));
        assert!(!interpret_is_active(true, "inactive\n"));
        assert!(!interpret_is_active(false, "active\n"));
        assert!(!interpret_is_active(false, "failed\n"));
        assert!(!interpret_is_active(true, ""));
    }

    #[actix_rt::test]
    async fn unknown_unit_never_reports_running() {
        // With systemctl present this exits non-zero ("inactive"); on a
        // host without it the spawn fails. Neither may report running.
        let result =
            query_unit_active("definitely-not-a-real-unit-xyz.service", Duration::from_secs(5))
                .await;
        assert!(!result.unwrap_or(false));
    }
}
