use serde::{Deserialize, Serialize};

/// Entry of `GET /repos/{owner}/{repo}/rulesets`.
///
/// The listing never includes the rule clauses; only id and name matter for
/// the delete-before-create pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RulesetResponse {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub enforcement: Option<String>,
}
