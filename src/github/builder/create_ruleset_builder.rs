use super::BuilderExecutor;
use crate::github::{
    github_client,
    request::{
        BypassActor, CreateRulesetRequest, RefNameCondition, Rule, RulesetConditions,
        RulesetEnforcement, RulesetTarget,
    },
};
use anyhow::Result;

pub struct CreateRulesetBuilder {
    owner: String,
    repo: String,
    name: String,
    enforcement: RulesetEnforcement,
    include: Vec<String>,
    exclude: Vec<String>,
    bypass_actors: Vec<BypassActor>,
    rules: Vec<Rule>,
}

impl CreateRulesetBuilder {
    pub fn new(owner: impl Into<String>, repo: impl Into<String>) -> Self {
        CreateRulesetBuilder {
            owner: owner.into(),
            repo: repo.into(),
            name: String::new(),
            enforcement: RulesetEnforcement::Active,
            include: Vec::new(),
            exclude: Vec::new(),
            bypass_actors: Vec::new(),
            rules: Vec::new(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn enforcement(mut self, enforcement: RulesetEnforcement) -> Self {
        self.enforcement = enforcement;
        self
    }

    pub fn include(mut self, patterns: Vec<String>) -> Self {
        self.include = patterns;
        self
    }

    pub fn exclude(mut self, patterns: Vec<String>) -> Self {
        self.exclude = patterns;
        self
    }

    pub fn bypass_actors(mut self, actors: Vec<BypassActor>) -> Self {
        self.bypass_actors = actors;
        self
    }

    pub fn rule(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn rules(mut self, rules: Vec<Rule>) -> Self {
        self.rules = rules;
        self
    }
}

impl BuilderExecutor for CreateRulesetBuilder {
    type Output = ();

    async fn execute(self) -> Result<Self::Output> {
        let request = CreateRulesetRequest {
            name: self.name,
            target: RulesetTarget::Branch,
            enforcement: self.enforcement,
            bypass_actors: self.bypass_actors,
            conditions: RulesetConditions {
                ref_name: RefNameCondition {
                    include: self.include,
                    exclude: self.exclude,
                },
            },
            rules: self.rules,
        };

        github_client::instance()
            .create_ruleset(&self.owner, &self.repo, request)
            .await
    }
}
