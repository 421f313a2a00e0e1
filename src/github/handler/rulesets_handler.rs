use crate::github::{
    builder::create_ruleset_builder::CreateRulesetBuilder, github_client,
    response::RulesetResponse,
};
use anyhow::Result;

pub struct RulesetsHandler {
    owner: String,
    repo: String,
}

impl RulesetsHandler {
    pub fn new(owner: impl Into<String>, repo: impl Into<String>) -> Self {
        RulesetsHandler {
            owner: owner.into(),
            repo: repo.into(),
        }
    }

    pub async fn list(&self) -> Result<Vec<RulesetResponse>> {
        github_client::instance()
            .list_rulesets(&self.owner, &self.repo)
            .await
    }

    /// Looks the ruleset up by name in the listing.
    pub async fn find_by_name(&self, name: &str) -> Result<Option<RulesetResponse>> {
        let rulesets = self.list().await?;

        Ok(rulesets.into_iter().find(|ruleset| ruleset.name == name))
    }

    pub async fn delete(&self, id: u64) -> Result<()> {
        github_client::instance()
            .delete_ruleset(&self.owner, &self.repo, id)
            .await
    }

    pub fn create(&self) -> CreateRulesetBuilder {
        CreateRulesetBuilder::new(&self.owner, &self.repo)
    }
}
