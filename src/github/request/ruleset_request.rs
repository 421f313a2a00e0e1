use serde::{Deserialize, Serialize};

/// Payload for `POST /repos/{owner}/{repo}/rulesets`.
///
/// Only the clauses this tool writes are modelled; the API accepts more.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateRulesetRequest {
    pub name: String,
    pub target: RulesetTarget,
    pub enforcement: RulesetEnforcement,
    #[serde(default)]
    pub bypass_actors: Vec<BypassActor>,
    pub conditions: RulesetConditions,
    pub rules: Vec<Rule>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RulesetTarget {
    Branch,
    Tag,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RulesetEnforcement {
    Disabled,
    Active,
    Evaluate,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BypassActor {
    pub actor_id: u64,
    pub actor_type: BypassActorType,
    pub bypass_mode: BypassMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum BypassActorType {
    OrganizationAdmin,
    RepositoryRole,
    Team,
    Integration,
    DeployKey,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BypassMode {
    Always,
    PullRequest,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RulesetConditions {
    pub ref_name: RefNameCondition,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefNameCondition {
    pub include: Vec<String>,
    #[serde(default)]
    pub exclude: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Rule {
    Deletion,
    NonFastForward,
    RequiredLinearHistory,
    RequiredSignatures,
    PullRequest { parameters: PullRequestParameters },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullRequestParameters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dismiss_stale_reviews_on_push: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub require_code_owner_review: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub require_last_push_approval: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required_approving_review_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required_review_thread_resolution: Option<bool>,
}
