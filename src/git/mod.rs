use anyhow::{bail, Context, Result};
use git2::{build::CheckoutBuilder, Repository};
use itertools::Itertools;
use std::{fs, path::Path};

#[derive(Debug, PartialEq, Eq)]
pub enum PullOutcome {
    UpToDate,
    FastForwarded,
}

/// Fast-forward pulls every git repository found directly under `root`.
pub fn pull_all(root: &Path) -> Result<()> {
    let checkouts = find_repositories(root)?;

    if checkouts.is_empty() {
        log::warn!("No git repositories under {}", root.display());
        return Ok(());
    }

    let mut failures = 0;
    for path in &checkouts {
        match pull_repository(path) {
            Ok(PullOutcome::UpToDate) => {
                log::info!("{}: already up to date", path.display());
            }
            Ok(PullOutcome::FastForwarded) => {
                log::info!("{}: fast-forwarded", path.display());
            }
            Err(error) => {
                log::error!("{}: cannot pull: {:#}", path.display(), error);
                failures += 1;
            }
        }
    }

    if failures > 0 {
        log::warn!("{} of {} checkouts failed", failures, checkouts.len());
    }

    Ok(())
}

fn find_repositories(root: &Path) -> Result<Vec<std::path::PathBuf>> {
    let entries = fs::read_dir(root)
        .with_context(|| format!("Cannot read {}", root.display()))?
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| path.join(".git").exists())
        .sorted()
        .collect();

    Ok(entries)
}

pub fn pull_repository(path: &Path) -> Result<PullOutcome> {
    let repo = Repository::open(path)?;

    let head = repo.head()?;
    if !head.is_branch() {
        bail!("HEAD is not on a branch");
    }
    let branch = head.shorthand().context("Branch name is not utf-8")?.to_owned();

    let mut remote = repo.find_remote("origin")?;
    remote.fetch(&[branch.as_str()], None, None)?;

    let fetch_head = repo.find_reference("FETCH_HEAD")?;
    let fetch_commit = repo.reference_to_annotated_commit(&fetch_head)?;

    let (analysis, _) = repo.merge_analysis(&[&fetch_commit])?;

    if analysis.is_up_to_date() {
        return Ok(PullOutcome::UpToDate);
    }

    if !analysis.is_fast_forward() {
        bail!("Branch {} cannot be fast-forwarded", branch);
    }

    let refname = format!("refs/heads/{}", branch);
    let mut reference = repo.find_reference(&refname)?;
    reference.set_target(fetch_commit.id(), "pull: fast-forward")?;
    repo.set_head(&refname)?;
    repo.checkout_head(Some(CheckoutBuilder::default().force()))?;

    Ok(PullOutcome::FastForwarded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use git2::Signature;
    use std::{fs, path::Path};
    use tempdir::TempDir;

    fn commit_file(repo: &Repository, name: &str, content: &str) -> git2::Oid {
        let workdir = repo.workdir().unwrap();
        fs::write(workdir.join(name), content).unwrap();

        let mut index = repo.index().unwrap();
        index.add_path(Path::new(name)).unwrap();
        index.write().unwrap();

        let tree_id = index.write_tree().unwrap();
        let tree = repo.find_tree(tree_id).unwrap();
        let signature = Signature::now("Test User", "test@example.com").unwrap();

        let parents = match repo.head() {
            Ok(head) => vec![head.peel_to_commit().unwrap()],
            Err(_) => vec![],
        };
        let parent_refs: Vec<_> = parents.iter().collect();

        repo.commit(
            Some("HEAD"),
            &signature,
            &signature,
            name,
            &tree,
            &parent_refs,
        )
        .unwrap()
    }

    #[test]
    fn should_fast_forward_a_stale_clone() -> Result<()> {
        let dir = TempDir::new("pull")?;
        let origin_path = dir.path().join("origin");
        let clone_path = dir.path().join("clone");

        let origin = Repository::init(&origin_path)?;
        commit_file(&origin, "first.txt", "one");

        Repository::clone(origin_path.to_str().unwrap(), &clone_path)?;

        let new_tip = commit_file(&origin, "second.txt", "two");

        let outcome = pull_repository(&clone_path)?;

        assert_eq!(outcome, PullOutcome::FastForwarded);
        let clone = Repository::open(&clone_path)?;
        assert_eq!(clone.head()?.peel_to_commit()?.id(), new_tip);
        assert!(clone_path.join("second.txt").exists());

        Ok(())
    }

    #[test]
    fn should_report_an_up_to_date_clone() -> Result<()> {
        let dir = TempDir::new("pull")?;
        let origin_path = dir.path().join("origin");
        let clone_path = dir.path().join("clone");

        let origin = Repository::init(&origin_path)?;
        commit_file(&origin, "first.txt", "one");

        Repository::clone(origin_path.to_str().unwrap(), &clone_path)?;

        let outcome = pull_repository(&clone_path)?;

        assert_eq!(outcome, PullOutcome::UpToDate);

        Ok(())
    }

    #[test]
    fn should_refuse_a_diverged_clone() -> Result<()> {
        let dir = TempDir::new("pull")?;
        let origin_path = dir.path().join("origin");
        let clone_path = dir.path().join("clone");

        let origin = Repository::init(&origin_path)?;
        commit_file(&origin, "first.txt", "one");

        Repository::clone(origin_path.to_str().unwrap(), &clone_path)?;

        commit_file(&origin, "second.txt", "upstream");
        let clone = Repository::open(&clone_path)?;
        commit_file(&clone, "local.txt", "local");

        let result = pull_repository(&clone_path);

        assert!(result.is_err());

        Ok(())
    }

    #[test]
    fn should_find_only_git_checkouts() -> Result<()> {
        let dir = TempDir::new("pull")?;
        Repository::init(dir.path().join("repo"))?;
        fs::create_dir(dir.path().join("plain"))?;

        let found = find_repositories(dir.path())?;

        assert_eq!(found, vec![dir.path().join("repo")]);

        Ok(())
    }
}
