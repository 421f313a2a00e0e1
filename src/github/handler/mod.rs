pub mod branches_handler;
pub mod code_scanning_handler;
pub mod repository_handler;
pub mod rulesets_handler;
pub mod security_handler;

use super::github_client::GithubClient;
use repository_handler::RepositoryHandler;

/// Github repo handler access implementation
impl GithubClient {
    pub fn repo(&self, owner: impl Into<String>, name: impl Into<String>) -> RepositoryHandler {
        RepositoryHandler::new(owner, name)
    }
}
