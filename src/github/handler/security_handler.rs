use crate::github::{github_client, request::UpdateSecurityRequest};
use anyhow::Result;

pub struct SecurityHandler {
    owner: String,
    repo: String,
}

impl SecurityHandler {
    pub fn new(owner: impl Into<String>, repo: impl Into<String>) -> Self {
        SecurityHandler {
            owner: owner.into(),
            repo: repo.into(),
        }
    }

    pub async fn update(&self, request: UpdateSecurityRequest) -> Result<()> {
        github_client::instance()
            .update_security_settings(&self.owner, &self.repo, request)
            .await
    }

    pub async fn vulnerability_alerts(&self, enabled: bool) -> Result<()> {
        github_client::instance()
            .set_vulnerability_alerts(&self.owner, &self.repo, enabled)
            .await
    }

    pub async fn automated_security_fixes(&self, enabled: bool) -> Result<()> {
        github_client::instance()
            .set_automated_security_fixes(&self.owner, &self.repo, enabled)
            .await
    }
}
