use crate::github::{github_client, response::DefaultSetupResponse};
use anyhow::Result;

pub struct CodeScanningHandler {
    owner: String,
    repo: String,
}

impl CodeScanningHandler {
    pub fn new(owner: impl Into<String>, repo: impl Into<String>) -> Self {
        CodeScanningHandler {
            owner: owner.into(),
            repo: repo.into(),
        }
    }

    pub async fn default_setup(&self) -> Result<Option<DefaultSetupResponse>> {
        github_client::instance()
            .get_default_setup(&self.owner, &self.repo)
            .await
    }

    pub async fn enable_default_setup(&self, query_suite: &str) -> Result<()> {
        github_client::instance()
            .enable_default_setup(&self.owner, &self.repo, query_suite)
            .await
    }
}
