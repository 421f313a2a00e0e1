use serde::{Deserialize, Serialize};

/// Partial PATCH body for `/repos/{owner}/{repo}`; only the
/// `security_and_analysis` block is sent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateSecurityRequest {
    pub security_and_analysis: SecurityAndAnalysis,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SecurityAndAnalysis {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub advanced_security: Option<FeatureStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret_scanning: Option<FeatureStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret_scanning_push_protection: Option<FeatureStatus>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureStatus {
    pub status: String,
}

impl FeatureStatus {
    pub fn new(enabled: bool) -> Self {
        let status = if enabled { "enabled" } else { "disabled" };

        FeatureStatus {
            status: status.to_string(),
        }
    }
}

impl UpdateSecurityRequest {
    pub fn new(
        advanced_security: Option<bool>,
        secret_scanning: Option<bool>,
        push_protection: Option<bool>,
    ) -> Self {
        UpdateSecurityRequest {
            security_and_analysis: SecurityAndAnalysis {
                advanced_security: advanced_security.map(FeatureStatus::new),
                secret_scanning: secret_scanning.map(FeatureStatus::new),
                secret_scanning_push_protection: push_protection.map(FeatureStatus::new),
            },
        }
    }

    pub fn is_empty(&self) -> bool {
        self.security_and_analysis.advanced_security.is_none()
            && self.security_and_analysis.secret_scanning.is_none()
            && self
                .security_and_analysis
                .secret_scanning_push_protection
                .is_none()
    }
}
