use serde::{Deserialize, Serialize};

/// Payload for `PATCH /repos/{owner}/{repo}/code-scanning/default-setup`.
#[derive(Debug, Serialize, Deserialize)]
pub struct DefaultSetupRequest {
    pub state: String,
    pub query_suite: String,
}

impl DefaultSetupRequest {
    pub fn configured(query_suite: impl Into<String>) -> Self {
        DefaultSetupRequest {
            state: "configured".to_string(),
            query_suite: query_suite.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_request_the_configured_state() {
        let request = DefaultSetupRequest::configured("default");

        let body = serde_json::to_string(&request).unwrap();

        assert_eq!(body, r#"{"state":"configured","query_suite":"default"}"#);
    }
}
