use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Log at debug level.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file path, `repokeeper.yaml` by default.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Branch operations across the repository fleet.
    Branches {
        #[command(subcommand)]
        cmd: BranchesCommand,
    },
    /// Ruleset operations across the repository fleet.
    Rulesets {
        #[command(subcommand)]
        cmd: RulesetsCommand,
    },
    /// Security feature toggles across the repository fleet.
    Security {
        #[command(subcommand)]
        cmd: SecurityCommand,
    },
    /// Host maintenance utilities.
    Host {
        #[command(subcommand)]
        cmd: HostCommand,
    },
}

#[derive(Subcommand, Debug)]
pub enum BranchesCommand {
    /// Create the branch in every repository where it is missing.
    Ensure {
        /// Branch to create; the configured one when omitted.
        #[arg(long)]
        branch: Option<String>,

        /// Source ref; the repository's default branch when omitted.
        #[arg(long)]
        from: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum RulesetsCommand {
    /// Delete and recreate the configured ruleset in every repository.
    Apply {},
    /// Delete the ruleset by name in every repository.
    Delete {
        /// Ruleset name; the configured one when omitted.
        #[arg(long)]
        name: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum SecurityCommand {
    /// Apply the configured security and Dependabot toggles.
    Apply {},
    /// Enable CodeQL default setup and wait for it to configure.
    Codeql {},
}

#[derive(Subcommand, Debug)]
pub enum HostCommand {
    /// Prune Docker leftovers.
    DockerClean {
        /// Prune volumes as well.
        #[arg(long)]
        volumes: bool,
    },
    /// Disable and stop systemd units.
    DisableServices {
        /// Units to disable; the configured list when omitted.
        units: Vec<String>,
    },
    /// Apply the configured directory renames.
    RenameDirs {},
    /// Fast-forward pull every checkout under the workspace directory.
    PullAll {
        /// Workspace directory; the configured one when omitted.
        #[arg(long)]
        root: Option<PathBuf>,
    },
}

pub fn cmd() -> Cli {
    Cli::parse()
}
