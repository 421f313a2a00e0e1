mod branch_ref_response;
mod code_scanning_response;
mod repository_response;
mod ruleset_response;

pub use branch_ref_response::BranchRefResponse;
pub use code_scanning_response::{DefaultSetupResponse, DefaultSetupState};
pub use repository_response::RepositoryResponse;
pub use ruleset_response::RulesetResponse;
