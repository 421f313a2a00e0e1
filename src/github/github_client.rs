use super::{
    request::{
        BranchRefRequest, CreateRulesetRequest, DefaultSetupRequest, SerializeRequest,
        UpdateSecurityRequest,
    },
    response::{BranchRefResponse, DefaultSetupResponse, RepositoryResponse, RulesetResponse},
};
use crate::{delete, get, get_sha, patch, post, put};
use anyhow::Result;
use once_cell::sync::Lazy;
use std::env;

pub static GITHUB_TOKEN: Lazy<String> =
    Lazy::new(|| env::var("GITHUB_TOKEN").expect("GITHUB_TOKEN must be set"));

static CLIENT: Lazy<GithubClient> = Lazy::new(|| GithubClient);

pub fn instance() -> &'static GithubClient {
    &CLIENT
}

const PER_PAGE: usize = 100;

pub struct GithubClient;

impl GithubClient {
    /// List the organization's repositories, following pagination.
    pub(super) async fn list_repositories(&self, owner: &str) -> Result<Vec<RepositoryResponse>> {
        let mut repositories = Vec::new();
        let mut page = 1;

        loop {
            let uri = format!(
                "https://api.github.com/orgs/{}/repos?per_page={}&page={}",
                owner, PER_PAGE, page
            );

            let response = get!(&uri)?;
            let batch: Vec<RepositoryResponse> = serde_json::from_str(&response)?;
            let len = batch.len();

            repositories.extend(batch);

            if len < PER_PAGE {
                break;
            }
            page += 1;
        }

        Ok(repositories)
    }

    pub(super) async fn get_repository(
        &self,
        owner: &str,
        repo: &str,
    ) -> Result<RepositoryResponse> {
        let uri = format!("https://api.github.com/repos/{}/{}", owner, repo);

        let response = get!(&uri)?;
        let repository = serde_json::from_str::<RepositoryResponse>(&response)?;

        Ok(repository)
    }

    pub(super) async fn get_commit_sha(
        &self,
        owner: &str,
        repo: &str,
        base: &str,
    ) -> Result<String> {
        let uri = format!(
            "https://api.github.com/repos/{}/{}/commits/{}",
            owner, repo, base
        );

        let sha = get_sha!(&uri)?;

        Ok(sha)
    }

    pub(super) async fn get_branch_ref(
        &self,
        owner: &str,
        repo: &str,
        branch: &str,
    ) -> Result<Option<BranchRefResponse>> {
        let uri = format!(
            "https://api.github.com/repos/{}/{}/git/ref/heads/{}",
            owner, repo, branch
        );

        match get!(&uri) {
            Ok(response) => {
                let branch_ref = serde_json::from_str::<BranchRefResponse>(&response)?;
                Ok(Some(branch_ref))
            }
            Err(error) if error.is_not_found() => Ok(None),
            Err(error) => Err(error.into()),
        }
    }

    pub(super) async fn create_branch(
        &self,
        owner: &str,
        repo: &str,
        branch: &str,
        sha: &str,
    ) -> Result<()> {
        let uri = format!("https://api.github.com/repos/{}/{}/git/refs", owner, repo);

        let request = BranchRefRequest::new(branch, sha);
        let body = request.into_request()?;

        post!(&uri, body)?;

        Ok(())
    }

    pub(super) async fn list_rulesets(
        &self,
        owner: &str,
        repo: &str,
    ) -> Result<Vec<RulesetResponse>> {
        let uri = format!("https://api.github.com/repos/{}/{}/rulesets", owner, repo);

        let response = get!(&uri)?;
        let rulesets = serde_json::from_str::<Vec<RulesetResponse>>(&response)?;

        Ok(rulesets)
    }

    pub(super) async fn create_ruleset(
        &self,
        owner: &str,
        repo: &str,
        request: CreateRulesetRequest,
    ) -> Result<()> {
        let uri = format!("https://api.github.com/repos/{}/{}/rulesets", owner, repo);

        let body = request.into_request()?;

        post!(&uri, body)?;

        Ok(())
    }

    pub(super) async fn delete_ruleset(&self, owner: &str, repo: &str, id: u64) -> Result<()> {
        let uri = format!(
            "https://api.github.com/repos/{}/{}/rulesets/{}",
            owner, repo, id
        );

        delete!(&uri)?;

        Ok(())
    }

    pub(super) async fn update_security_settings(
        &self,
        owner: &str,
        repo: &str,
        request: UpdateSecurityRequest,
    ) -> Result<()> {
        let uri = format!("https://api.github.com/repos/{}/{}", owner, repo);

        let body = request.into_request()?;

        patch!(&uri, body)?;

        Ok(())
    }

    pub(super) async fn set_vulnerability_alerts(
        &self,
        owner: &str,
        repo: &str,
        enabled: bool,
    ) -> Result<()> {
        let uri = format!(
            "https://api.github.com/repos/{}/{}/vulnerability-alerts",
            owner, repo
        );

        if enabled {
            put!(&uri)?;
        } else {
            delete!(&uri)?;
        }

        Ok(())
    }

    pub(super) async fn set_automated_security_fixes(
        &self,
        owner: &str,
        repo: &str,
        enabled: bool,
    ) -> Result<()> {
        let uri = format!(
            "https://api.github.com/repos/{}/{}/automated-security-fixes",
            owner, repo
        );

        if enabled {
            put!(&uri)?;
        } else {
            delete!(&uri)?;
        }

        Ok(())
    }

    /// `None` when code scanning is not available for the repository.
    pub(super) async fn get_default_setup(
        &self,
        owner: &str,
        repo: &str,
    ) -> Result<Option<DefaultSetupResponse>> {
        let uri = format!(
            "https://api.github.com/repos/{}/{}/code-scanning/default-setup",
            owner, repo
        );

        match get!(&uri) {
            Ok(response) => {
                let setup = serde_json::from_str::<DefaultSetupResponse>(&response)?;
                Ok(Some(setup))
            }
            Err(error) if error.is_not_found() => Ok(None),
            Err(error) => Err(error.into()),
        }
    }

    pub(super) async fn enable_default_setup(
        &self,
        owner: &str,
        repo: &str,
        query_suite: &str,
    ) -> Result<()> {
        let uri = format!(
            "https://api.github.com/repos/{}/{}/code-scanning/default-setup",
            owner, repo
        );

        let request = DefaultSetupRequest::configured(query_suite);
        let body = request.into_request()?;

        patch!(&uri, body)?;

        Ok(())
    }
}
