use serde::{Deserialize, Serialize};

/// Response of `GET /repos/{owner}/{repo}/code-scanning/default-setup`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultSetupResponse {
    pub state: DefaultSetupState,
    #[serde(default)]
    pub query_suite: Option<String>,
    #[serde(default)]
    pub languages: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DefaultSetupState {
    #[serde(rename = "configured")]
    Configured,
    #[serde(rename = "not-configured")]
    NotConfigured,
}
