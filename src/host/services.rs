use anyhow::{bail, Result};
use std::process::Stdio;
use tokio::process::Command;

const SYSTEMCTL_BIN_NAME: &str = "systemctl";

/// Disables and stops each unit, continuing past failures.
pub async fn disable(units: &[String]) -> Result<()> {
    if units.is_empty() {
        log::warn!("No services configured, nothing to disable");
        return Ok(());
    }

    check_systemctl()?;

    let mut failures = 0;
    for unit in units {
        log::info!("Disabling {}", unit);

        match disable_unit(unit).await {
            Ok(()) => log::info!("{} disabled", unit),
            Err(error) => {
                log::error!("Cannot disable {}: {:#}", unit, error);
                failures += 1;
            }
        }
    }

    if failures > 0 {
        log::warn!("{} of {} units failed", failures, units.len());
    }

    Ok(())
}

async fn disable_unit(unit: &str) -> Result<()> {
    let status = Command::new(SYSTEMCTL_BIN_NAME)
        .args(["disable", "--now", unit])
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .spawn()?
        .wait()
        .await?;

    if !status.success() {
        bail!("systemctl exited with {}", status);
    }

    Ok(())
}

fn check_systemctl() -> Result<()> {
    match which::which(SYSTEMCTL_BIN_NAME) {
        Ok(_) => Ok(()),
        Err(error) => bail!("systemctl binary not found: {}", error),
    }
}
