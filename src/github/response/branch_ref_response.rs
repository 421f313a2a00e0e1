use serde::{Deserialize, Serialize};

/// Response of `GET /repos/{owner}/{repo}/git/ref/heads/{branch}`.
#[derive(Debug, Serialize, Deserialize)]
pub struct BranchRefResponse {
    pub r#ref: String,
    pub object: RefObject,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RefObject {
    pub sha: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_a_ref_response() {
        let body = r#"{
            "ref": "refs/heads/main",
            "node_id": "REF_kwDOLn",
            "object": {"sha": "4f2a9c", "type": "commit", "url": ""}
        }"#;

        let parsed: BranchRefResponse = serde_json::from_str(body).unwrap();

        assert_eq!(parsed.r#ref, "refs/heads/main");
        assert_eq!(parsed.object.sha, "4f2a9c");
    }
}
