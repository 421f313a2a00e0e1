use serde::{Deserialize, Serialize};

/// Subset of the repository object returned by the list and get endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepositoryResponse {
    pub name: String,
    #[serde(default)]
    pub private: bool,
    #[serde(default)]
    pub archived: bool,
    #[serde(default)]
    pub default_branch: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_a_repository_listing_entry() {
        let body = r#"{
            "id": 42,
            "name": "widget",
            "full_name": "acme/widget",
            "private": true,
            "archived": false,
            "default_branch": "main"
        }"#;

        let parsed: RepositoryResponse = serde_json::from_str(body).unwrap();

        assert_eq!(parsed.name, "widget");
        assert!(parsed.private);
        assert!(!parsed.archived);
        assert_eq!(parsed.default_branch.as_deref(), Some("main"));
    }
}
