use super::{
    branches_handler::BranchesHandler, code_scanning_handler::CodeScanningHandler,
    rulesets_handler::RulesetsHandler, security_handler::SecurityHandler,
};
use crate::github::{github_client, response::RepositoryResponse};
use anyhow::Result;

pub struct RepositoryHandler {
    owner: String,
    repo: String,
}

impl RepositoryHandler {
    pub fn new(owner: impl Into<String>, repo: impl Into<String>) -> Self {
        RepositoryHandler {
            owner: owner.into(),
            repo: repo.into(),
        }
    }

    pub async fn get(&self) -> Result<RepositoryResponse> {
        github_client::instance()
            .get_repository(&self.owner, &self.repo)
            .await
    }

    pub fn branches(&self) -> BranchesHandler {
        BranchesHandler::new(&self.owner, &self.repo)
    }

    pub fn rulesets(&self) -> RulesetsHandler {
        RulesetsHandler::new(&self.owner, &self.repo)
    }

    pub fn security(&self) -> SecurityHandler {
        SecurityHandler::new(&self.owner, &self.repo)
    }

    pub fn code_scanning(&self) -> CodeScanningHandler {
        CodeScanningHandler::new(&self.owner, &self.repo)
    }
}
