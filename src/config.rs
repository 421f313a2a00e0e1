use crate::github::request::{BypassActor, PullRequestParameters, RulesetEnforcement};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::{
    env,
    path::{Path, PathBuf},
};

const DEFAULT_CONFIG_FILE_NAME: &str = "repokeeper.yaml";

const DEFAULT_RULESET_NAME: &str = "branch-protection";
const DEFAULT_BRANCH_PATTERN: &str = "~DEFAULT_BRANCH";
const DEFAULT_QUERY_SUITE: &str = "default";

const ENV_OWNER: &str = "OWNER";
const ENV_REPOS: &str = "REPOS";
const ENV_INCLUDE_PRIVATE_REPOS: &str = "INCLUDE_PRIVATE_REPOS";

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub owner: String,
    /// Explicit repository list; when empty the list is resolved from the API.
    #[serde(default)]
    pub repos: Vec<String>,
    #[serde(default)]
    pub include_private: bool,
    pub branch: Option<BranchConfig>,
    #[serde(default)]
    pub ruleset: RulesetConfig,
    #[serde(default)]
    pub security: SecurityConfig,
    #[serde(default)]
    pub codeql: CodeqlConfig,
    #[serde(default)]
    pub host: HostConfig,
}

impl Config {
    /// Loads the yaml file (missing file means defaults), then applies the
    /// `OWNER` / `REPOS` / `INCLUDE_PRIVATE_REPOS` environment overrides.
    pub async fn load(path: Option<&Path>) -> Result<Config> {
        let path = path
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE_NAME));

        let mut config = if path.is_file() {
            let config_string = tokio::fs::read_to_string(&path).await?;
            serde_yaml::from_str::<Config>(&config_string)?
        } else {
            log::debug!("No config file at {}, using defaults", path.display());
            Config::default()
        };

        config.apply_env();

        Ok(config)
    }

    fn apply_env(&mut self) {
        if let Ok(owner) = env::var(ENV_OWNER) {
            if !owner.is_empty() {
                self.owner = owner;
            }
        }
        if let Ok(repos) = env::var(ENV_REPOS) {
            let repos = parse_repo_list(&repos);
            if !repos.is_empty() {
                self.repos = repos;
            }
        }
        if let Ok(include_private) = env::var(ENV_INCLUDE_PRIVATE_REPOS) {
            self.include_private = parse_flag(&include_private);
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct BranchConfig {
    pub name: String,
    /// Source ref; the repository's default branch when unset.
    pub from: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RulesetConfig {
    #[serde(default = "RulesetConfig::default_name")]
    pub name: String,
    #[serde(default = "RulesetConfig::default_include")]
    pub include: Vec<String>,
    #[serde(default)]
    pub exclude: Vec<String>,
    #[serde(default = "RulesetConfig::default_enforcement")]
    pub enforcement: RulesetEnforcement,
    #[serde(default)]
    pub bypass_actors: Vec<BypassActor>,
    #[serde(default)]
    pub required_linear_history: bool,
    #[serde(default)]
    pub required_signatures: bool,
    pub pull_request: Option<PullRequestParameters>,
}

impl RulesetConfig {
    fn default_name() -> String {
        DEFAULT_RULESET_NAME.to_owned()
    }

    fn default_include() -> Vec<String> {
        vec![DEFAULT_BRANCH_PATTERN.to_owned()]
    }

    fn default_enforcement() -> RulesetEnforcement {
        RulesetEnforcement::Active
    }
}

impl Default for RulesetConfig {
    fn default() -> Self {
        RulesetConfig {
            name: RulesetConfig::default_name(),
            include: RulesetConfig::default_include(),
            exclude: Vec::new(),
            enforcement: RulesetConfig::default_enforcement(),
            bypass_actors: Vec::new(),
            required_linear_history: false,
            required_signatures: false,
            pull_request: None,
        }
    }
}

/// `None` leaves the corresponding setting untouched.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct SecurityConfig {
    pub advanced_security: Option<bool>,
    pub secret_scanning: Option<bool>,
    pub push_protection: Option<bool>,
    pub vulnerability_alerts: Option<bool>,
    pub automated_security_fixes: Option<bool>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CodeqlConfig {
    #[serde(default = "CodeqlConfig::default_query_suite")]
    pub query_suite: String,
}

impl CodeqlConfig {
    fn default_query_suite() -> String {
        DEFAULT_QUERY_SUITE.to_owned()
    }
}

impl Default for CodeqlConfig {
    fn default() -> Self {
        CodeqlConfig {
            query_suite: CodeqlConfig::default_query_suite(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HostConfig {
    #[serde(default)]
    pub services: Vec<String>,
    #[serde(default)]
    pub renames: Vec<RenameEntry>,
    #[serde(default = "HostConfig::default_rename_root")]
    pub rename_root: PathBuf,
    #[serde(default = "HostConfig::default_workspace")]
    pub workspace: PathBuf,
}

impl HostConfig {
    fn default_rename_root() -> PathBuf {
        PathBuf::from(".")
    }

    fn default_workspace() -> PathBuf {
        PathBuf::from(".")
    }
}

impl Default for HostConfig {
    fn default() -> Self {
        HostConfig {
            services: Vec::new(),
            renames: Vec::new(),
            rename_root: HostConfig::default_rename_root(),
            workspace: HostConfig::default_workspace(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenameEntry {
    pub from: String,
    pub to: String,
}

fn parse_repo_list(value: &str) -> Vec<String> {
    value
        .split([',', ' ', '\n'])
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_owned)
        .collect()
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_a_minimal_config() {
        let config = serde_yaml::from_str::<Config>("owner: acme\n").unwrap();

        assert_eq!(config.owner, "acme");
        assert!(config.repos.is_empty());
        assert!(!config.include_private);
        assert_eq!(config.ruleset.name, "branch-protection");
        assert_eq!(config.ruleset.include, vec!["~DEFAULT_BRANCH".to_string()]);
        assert_eq!(config.codeql.query_suite, "default");
    }

    #[test]
    fn should_parse_a_full_config() {
        let yaml = r#"
owner: acme
repos:
  - widget
  - other/gadget
include_private: true
branch:
  name: release/1.0
  from: main
ruleset:
  name: protect-main
  enforcement: evaluate
  bypass_actors:
    - actor_id: 5
      actor_type: RepositoryRole
      bypass_mode: always
  required_linear_history: true
  pull_request:
    required_approving_review_count: 2
security:
  secret_scanning: true
  push_protection: true
  automated_security_fixes: false
codeql:
  query_suite: extended
host:
  services: [telemetry.service]
  renames:
    - from: old
      to: new
  workspace: /srv/checkouts
"#;

        let config = serde_yaml::from_str::<Config>(yaml).unwrap();

        assert_eq!(config.repos.len(), 2);
        let branch = config.branch.unwrap();
        assert_eq!(branch.name, "release/1.0");
        assert_eq!(branch.from.as_deref(), Some("main"));
        assert_eq!(config.ruleset.name, "protect-main");
        assert_eq!(config.ruleset.bypass_actors.len(), 1);
        assert!(config.ruleset.required_linear_history);
        assert_eq!(
            config
                .ruleset
                .pull_request
                .unwrap()
                .required_approving_review_count,
            Some(2)
        );
        assert_eq!(config.security.secret_scanning, Some(true));
        assert_eq!(config.security.automated_security_fixes, Some(false));
        assert_eq!(config.codeql.query_suite, "extended");
        assert_eq!(config.host.services, vec!["telemetry.service".to_string()]);
        assert_eq!(config.host.workspace, PathBuf::from("/srv/checkouts"));
    }

    #[test]
    fn should_split_a_repo_list() {
        assert_eq!(
            parse_repo_list("widget, gadget other/thing"),
            vec![
                "widget".to_string(),
                "gadget".to_string(),
                "other/thing".to_string()
            ]
        );
        assert!(parse_repo_list("  ,  ").is_empty());
    }

    #[test]
    fn should_parse_boolean_flags() {
        assert!(parse_flag("1"));
        assert!(parse_flag("TRUE"));
        assert!(parse_flag("yes"));
        assert!(!parse_flag("0"));
        assert!(!parse_flag("off"));
        assert!(!parse_flag(""));
    }
}
