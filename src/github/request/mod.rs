mod branch_ref_request;
mod code_scanning_request;
mod ruleset_request;
mod security_request;

pub use branch_ref_request::BranchRefRequest;
pub use code_scanning_request::DefaultSetupRequest;
pub use ruleset_request::{
    BypassActor, BypassActorType, BypassMode, CreateRulesetRequest, PullRequestParameters,
    RefNameCondition, Rule, RulesetConditions, RulesetEnforcement, RulesetTarget,
};
pub use security_request::{FeatureStatus, SecurityAndAnalysis, UpdateSecurityRequest};

use anyhow::Result;
use serde::Serialize;

pub trait SerializeRequest {
    fn into_request(self) -> Result<String>
    where
        Self: Serialize + Sized,
    {
        let body = serde_json::to_string(&self)?;

        Ok(body)
    }
}

impl SerializeRequest for BranchRefRequest {}
impl SerializeRequest for CreateRulesetRequest {}
impl SerializeRequest for UpdateSecurityRequest {}
impl SerializeRequest for DefaultSetupRequest {}
