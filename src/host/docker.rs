use anyhow::{bail, Result};
use std::process::Stdio;
use tokio::process::Command;

const DOCKER_BIN_NAME: &str = "docker";

/// Prunes stopped containers, dangling images and build cache; volumes only
/// when asked for.
pub async fn clean(volumes: bool) -> Result<()> {
    check_docker()?;

    run(&["system", "prune", "-f"]).await?;

    if volumes {
        run(&["volume", "prune", "-f"]).await?;
    }

    Ok(())
}

async fn run(args: &[&str]) -> Result<()> {
    log::info!("Running docker {}", args.join(" "));

    let status = Command::new(DOCKER_BIN_NAME)
        .args(args)
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .spawn()?
        .wait()
        .await?;

    if !status.success() {
        bail!("docker {} exited with {}", args.join(" "), status);
    }

    Ok(())
}

fn check_docker() -> Result<()> {
    match which::which(DOCKER_BIN_NAME) {
        Ok(_) => Ok(()),
        Err(error) => bail!("docker binary not found: {}", error),
    }
}
