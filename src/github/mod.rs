pub mod builder;
pub mod github_client;
mod handler;
pub mod macros;
pub mod repository;
pub mod request;
pub mod response;

use self::{
    builder::BuilderExecutor,
    repository::RepoRef,
    request::{Rule, UpdateSecurityRequest},
    response::{DefaultSetupState, RepositoryResponse},
};
use crate::config::{Config, RulesetConfig, SecurityConfig};
use anyhow::{bail, Context, Result};
use std::time::Duration;

const CODEQL_POLL_INTERVAL: Duration = Duration::from_secs(10);
const CODEQL_POLL_ATTEMPTS: u32 = 30;

/// Resolves the repositories for the run: the explicit list when one is
/// configured, the organization listing otherwise.
pub async fn resolve_repositories(config: &Config) -> Result<Vec<RepoRef>> {
    if !config.repos.is_empty() {
        return config
            .repos
            .iter()
            .map(|entry| {
                if !entry.contains('/') && config.owner.is_empty() {
                    bail!("Repository `{}` has no owner and none is configured", entry);
                }
                Ok(RepoRef::parse(entry, &config.owner))
            })
            .collect();
    }

    if config.owner.is_empty() {
        bail!("Set `owner` in the config file or the OWNER environment variable");
    }

    log::info!("Listing repositories of {}", config.owner);
    let listed = github_client::instance()
        .list_repositories(&config.owner)
        .await?;

    let repos = select_repositories(&config.owner, listed, config.include_private);
    log::info!("Resolved {} repositories", repos.len());

    Ok(repos)
}

/// Archived repositories are always skipped; private ones only when asked for.
fn select_repositories(
    owner: &str,
    listed: Vec<RepositoryResponse>,
    include_private: bool,
) -> Vec<RepoRef> {
    listed
        .into_iter()
        .filter(|repo| !repo.archived)
        .filter(|repo| include_private || !repo.private)
        .map(|repo| RepoRef::new(owner, repo.name))
        .collect()
}

/// Creates `branch` in every repository where it does not exist yet.
pub async fn ensure_branch(config: &Config, branch: &str, from: Option<&str>) -> Result<()> {
    let repos = resolve_repositories(config).await?;

    let mut failures = 0;
    for repo in &repos {
        match ensure_branch_on(repo, branch, from).await {
            Ok(()) => {}
            Err(error) => {
                log::error!("{}: cannot ensure branch {}: {:#}", repo, branch, error);
                failures += 1;
            }
        }
    }

    report(repos.len(), failures);
    Ok(())
}

async fn ensure_branch_on(repo: &RepoRef, branch: &str, from: Option<&str>) -> Result<()> {
    let handler = github_client::instance().repo(&repo.owner, &repo.name);

    if let Some(existing) = handler.branches().get(branch).await? {
        log::info!(
            "{}: branch {} already exists at {}, skipping",
            repo,
            branch,
            existing.object.sha
        );
        return Ok(());
    }

    let base = match from {
        Some(base) => base.to_owned(),
        None => handler
            .get()
            .await?
            .default_branch
            .context("Repository has no default branch")?,
    };

    let sha = handler.branches().head_sha(&base).await?;
    log::debug!("{}: head of {} is {}", repo, base, sha);

    handler
        .branches()
        .create(branch)
        .sha(&sha)
        .execute()
        .await?;

    log::info!("{}: created branch {} from {}", repo, branch, base);
    Ok(())
}

/// Recreates the configured ruleset in every repository: an existing ruleset
/// of the same name is deleted first, never merged.
pub async fn apply_rulesets(config: &Config) -> Result<()> {
    let repos = resolve_repositories(config).await?;
    let ruleset = &config.ruleset;

    let mut failures = 0;
    for repo in &repos {
        match apply_ruleset_on(repo, ruleset).await {
            Ok(()) => {}
            Err(error) => {
                log::error!("{}: cannot apply ruleset {}: {:#}", repo, ruleset.name, error);
                failures += 1;
            }
        }
    }

    report(repos.len(), failures);
    Ok(())
}

async fn apply_ruleset_on(repo: &RepoRef, ruleset: &RulesetConfig) -> Result<()> {
    let handler = github_client::instance().repo(&repo.owner, &repo.name);

    if let Some(existing) = handler.rulesets().find_by_name(&ruleset.name).await? {
        log::info!(
            "{}: deleting existing ruleset {} (id {})",
            repo,
            existing.name,
            existing.id
        );
        handler.rulesets().delete(existing.id).await?;
    }

    handler
        .rulesets()
        .create()
        .name(&ruleset.name)
        .enforcement(ruleset.enforcement)
        .include(ruleset.include.clone())
        .exclude(ruleset.exclude.clone())
        .bypass_actors(ruleset.bypass_actors.clone())
        .rules(ruleset_rules(ruleset))
        .execute()
        .await?;

    log::info!("{}: created ruleset {}", repo, ruleset.name);
    Ok(())
}

/// The deletion and non-fast-forward clauses are always written; the rest
/// follow the configuration.
fn ruleset_rules(ruleset: &RulesetConfig) -> Vec<Rule> {
    let mut rules = vec![Rule::Deletion, Rule::NonFastForward];

    if ruleset.required_linear_history {
        rules.push(Rule::RequiredLinearHistory);
    }
    if ruleset.required_signatures {
        rules.push(Rule::RequiredSignatures);
    }
    if let Some(parameters) = &ruleset.pull_request {
        rules.push(Rule::PullRequest {
            parameters: parameters.clone(),
        });
    }

    rules
}

/// Deletes the named ruleset wherever it exists.
pub async fn delete_rulesets(config: &Config, name: &str) -> Result<()> {
    let repos = resolve_repositories(config).await?;

    let mut failures = 0;
    for repo in &repos {
        let handler = github_client::instance().repo(&repo.owner, &repo.name);

        let result = match handler.rulesets().find_by_name(name).await {
            Ok(Some(existing)) => {
                log::info!("{}: deleting ruleset {} (id {})", repo, name, existing.id);
                handler.rulesets().delete(existing.id).await
            }
            Ok(None) => {
                log::info!("{}: no ruleset named {}, skipping", repo, name);
                Ok(())
            }
            Err(error) => Err(error),
        };

        if let Err(error) = result {
            log::error!("{}: cannot delete ruleset {}: {:#}", repo, name, error);
            failures += 1;
        }
    }

    report(repos.len(), failures);
    Ok(())
}

/// Applies the configured security toggles to every repository.
pub async fn apply_security(config: &Config) -> Result<()> {
    let repos = resolve_repositories(config).await?;
    let security = &config.security;

    let mut failures = 0;
    for repo in &repos {
        match apply_security_on(repo, security).await {
            Ok(()) => {}
            Err(error) => {
                log::error!("{}: cannot apply security settings: {:#}", repo, error);
                failures += 1;
            }
        }
    }

    report(repos.len(), failures);
    Ok(())
}

async fn apply_security_on(repo: &RepoRef, security: &SecurityConfig) -> Result<()> {
    let handler = github_client::instance().repo(&repo.owner, &repo.name);

    let request = UpdateSecurityRequest::new(
        security.advanced_security,
        security.secret_scanning,
        security.push_protection,
    );

    if !request.is_empty() {
        handler.security().update(request).await?;
        log::info!("{}: updated security and analysis settings", repo);
    }

    if let Some(enabled) = security.vulnerability_alerts {
        handler.security().vulnerability_alerts(enabled).await?;
        log::info!("{}: vulnerability alerts {}", repo, toggle_word(enabled));
    }

    if let Some(enabled) = security.automated_security_fixes {
        handler.security().automated_security_fixes(enabled).await?;
        log::info!(
            "{}: automated security fixes {}",
            repo,
            toggle_word(enabled)
        );
    }

    Ok(())
}

fn toggle_word(enabled: bool) -> &'static str {
    if enabled {
        "enabled"
    } else {
        "disabled"
    }
}

/// Enables CodeQL default setup where it is not configured yet, then polls
/// each repository until the setup reports `configured` or attempts run out.
pub async fn enable_codeql(config: &Config) -> Result<()> {
    let repos = resolve_repositories(config).await?;
    let query_suite = &config.codeql.query_suite;

    let mut failures = 0;
    for repo in &repos {
        match enable_codeql_on(repo, query_suite).await {
            Ok(()) => {}
            Err(error) => {
                log::error!("{}: cannot enable CodeQL default setup: {:#}", repo, error);
                failures += 1;
            }
        }
    }

    report(repos.len(), failures);
    Ok(())
}

async fn enable_codeql_on(repo: &RepoRef, query_suite: &str) -> Result<()> {
    let handler = github_client::instance().repo(&repo.owner, &repo.name);

    let setup = match handler.code_scanning().default_setup().await? {
        Some(setup) => setup,
        None => {
            log::warn!("{}: code scanning is not available, skipping", repo);
            return Ok(());
        }
    };

    if setup.state == DefaultSetupState::Configured {
        log::info!("{}: CodeQL default setup already configured, skipping", repo);
        return Ok(());
    }

    handler
        .code_scanning()
        .enable_default_setup(query_suite)
        .await?;
    log::info!("{}: requested CodeQL default setup", repo);

    for attempt in 1..=CODEQL_POLL_ATTEMPTS {
        tokio::time::sleep(CODEQL_POLL_INTERVAL).await;

        let state = handler
            .code_scanning()
            .default_setup()
            .await?
            .map(|setup| setup.state);

        log::debug!("{}: poll {}/{}: {:?}", repo, attempt, CODEQL_POLL_ATTEMPTS, state);

        if state == Some(DefaultSetupState::Configured) {
            log::info!("{}: CodeQL default setup configured", repo);
            return Ok(());
        }
    }

    log::warn!(
        "{}: CodeQL default setup still not configured after {} attempts",
        repo,
        CODEQL_POLL_ATTEMPTS
    );
    Ok(())
}

fn report(total: usize, failures: usize) {
    if failures > 0 {
        log::warn!("{} of {} repositories failed", failures, total);
    } else {
        log::info!("Processed {} repositories", total);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::github::request::PullRequestParameters;

    fn repository(name: &str, private: bool, archived: bool) -> RepositoryResponse {
        RepositoryResponse {
            name: name.to_string(),
            private,
            archived,
            default_branch: Some("main".to_string()),
        }
    }

    #[test]
    fn should_skip_archived_and_private_repositories() {
        let listed = vec![
            repository("public", false, false),
            repository("secret", true, false),
            repository("attic", false, true),
        ];

        let repos = select_repositories("acme", listed, false);

        assert_eq!(repos, vec![RepoRef::new("acme", "public")]);
    }

    #[test]
    fn should_keep_private_repositories_when_asked() {
        let listed = vec![
            repository("public", false, false),
            repository("secret", true, false),
            repository("attic", true, true),
        ];

        let repos = select_repositories("acme", listed, true);

        assert_eq!(
            repos,
            vec![RepoRef::new("acme", "public"), RepoRef::new("acme", "secret")]
        );
    }

    #[test]
    fn should_always_emit_the_protection_clauses() {
        let rules = ruleset_rules(&RulesetConfig::default());

        assert!(matches!(rules[0], Rule::Deletion));
        assert!(matches!(rules[1], Rule::NonFastForward));
        assert_eq!(rules.len(), 2);
    }

    #[test]
    fn should_append_the_configured_clauses() {
        let ruleset = RulesetConfig {
            required_linear_history: true,
            pull_request: Some(PullRequestParameters {
                required_approving_review_count: Some(1),
                ..Default::default()
            }),
            ..Default::default()
        };

        let rules = ruleset_rules(&ruleset);

        assert_eq!(rules.len(), 4);
        assert!(matches!(rules[2], Rule::RequiredLinearHistory));
        assert!(matches!(rules[3], Rule::PullRequest { .. }));
    }
}
