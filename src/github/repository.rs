use core::fmt;
use serde::{Deserialize, Serialize};

/// An `owner/name` pair identifying one repository for the run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoRef {
    pub owner: String,
    pub name: String,
}

impl RepoRef {
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Self {
        RepoRef {
            owner: owner.into(),
            name: name.into(),
        }
    }

    /// Parses a `REPOS` entry. Bare names take the default owner,
    /// `owner/name` entries keep their own.
    pub fn parse(entry: &str, default_owner: &str) -> Self {
        match entry.split_once('/') {
            Some((owner, name)) if !owner.is_empty() && !name.is_empty() => {
                RepoRef::new(owner, name)
            }
            _ => RepoRef::new(default_owner, entry),
        }
    }
}

impl fmt::Display for RepoRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_display_as_owner_slash_name() {
        let repo = RepoRef::new("acme", "widget");

        assert_eq!(repo.to_string(), "acme/widget");
    }

    #[test]
    fn should_take_the_default_owner_for_bare_names() {
        let repo = RepoRef::parse("widget", "acme");

        assert_eq!(repo, RepoRef::new("acme", "widget"));
    }

    #[test]
    fn should_keep_an_explicit_owner() {
        let repo = RepoRef::parse("other/widget", "acme");

        assert_eq!(repo, RepoRef::new("other", "widget"));
    }

    #[test]
    fn should_not_treat_a_trailing_slash_as_an_owner() {
        let repo = RepoRef::parse("widget/", "acme");

        assert_eq!(repo, RepoRef::new("acme", "widget/"));
    }
}
