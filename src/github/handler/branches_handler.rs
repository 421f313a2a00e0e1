use crate::github::{
    builder::create_branch_builder::CreateBranchBuilder, github_client,
    response::BranchRefResponse,
};
use anyhow::Result;

pub struct BranchesHandler {
    owner: String,
    repo: String,
}

impl BranchesHandler {
    pub fn new(owner: impl Into<String>, repo: impl Into<String>) -> Self {
        BranchesHandler {
            owner: owner.into(),
            repo: repo.into(),
        }
    }

    /// `None` when the branch does not exist.
    pub async fn get(&self, branch: &str) -> Result<Option<BranchRefResponse>> {
        github_client::instance()
            .get_branch_ref(&self.owner, &self.repo, branch)
            .await
    }

    pub async fn head_sha(&self, base: &str) -> Result<String> {
        github_client::instance()
            .get_commit_sha(&self.owner, &self.repo, base)
            .await
    }

    pub fn create(&self, branch: impl Into<String>) -> CreateBranchBuilder {
        CreateBranchBuilder::new(&self.owner, &self.repo, branch)
    }
}
