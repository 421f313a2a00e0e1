mod cli;
mod config;
mod git;
mod github;
mod host;
mod http;
mod logger;

use anyhow::{Context, Result};
use cli::{BranchesCommand, Command, HostCommand, RulesetsCommand, SecurityCommand};
use config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = cli::cmd();

    logger::init(cli.verbose)?;
    log::debug!("Starting with {:?}", cli.cmd);

    let config = Config::load(cli.config.as_deref())
        .await
        .context("Cannot load config file")?;

    match cli.cmd {
        Command::Branches { cmd } => match cmd {
            BranchesCommand::Ensure { branch, from } => {
                let configured = config.branch.as_ref();
                let branch = branch
                    .or_else(|| configured.map(|branch| branch.name.clone()))
                    .context("Set --branch or the `branch` config section")?;
                let from = from.or_else(|| configured.and_then(|branch| branch.from.clone()));

                github::ensure_branch(&config, &branch, from.as_deref())
                    .await
                    .context("Cannot ensure the branch")?;
            }
        },
        Command::Rulesets { cmd } => match cmd {
            RulesetsCommand::Apply {} => {
                github::apply_rulesets(&config)
                    .await
                    .context("Cannot apply the ruleset")?;
            }
            RulesetsCommand::Delete { name } => {
                let name = name.unwrap_or_else(|| config.ruleset.name.clone());

                github::delete_rulesets(&config, &name)
                    .await
                    .context("Cannot delete the ruleset")?;
            }
        },
        Command::Security { cmd } => match cmd {
            SecurityCommand::Apply {} => {
                github::apply_security(&config)
                    .await
                    .context("Cannot apply the security settings")?;
            }
            SecurityCommand::Codeql {} => {
                github::enable_codeql(&config)
                    .await
                    .context("Cannot enable CodeQL")?;
            }
        },
        Command::Host { cmd } => match cmd {
            HostCommand::DockerClean { volumes } => {
                host::docker::clean(volumes)
                    .await
                    .context("Cannot clean up Docker")?;
            }
            HostCommand::DisableServices { units } => {
                let units = if units.is_empty() {
                    config.host.services.clone()
                } else {
                    units
                };

                host::services::disable(&units)
                    .await
                    .context("Cannot disable the services")?;
            }
            HostCommand::RenameDirs {} => {
                host::dirs::rename_all(&config.host.rename_root, &config.host.renames)
                    .context("Cannot rename the directories")?;
            }
            HostCommand::PullAll { root } => {
                let root = root.unwrap_or_else(|| config.host.workspace.clone());

                git::pull_all(&root).context("Cannot pull the checkouts")?;
            }
        },
    }

    Ok(())
}
