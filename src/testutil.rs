//! Shared test helpers: scratch git repositories built with git2.

use std::fs;
use std::path::Path;

use git2::Repository;

pub(crate) fn create_test_repo() -> (tempfile::TempDir, Repository) {
    let dir = tempfile::tempdir().unwrap();
    let repo = Repository::init(dir.path()).unwrap();

    // Configure identity for commits
    let mut config = repo.config().unwrap();
    config.set_str("user.name", "Test").unwrap();
    config.set_str("user.email", "test@test.com").unwrap();

    (dir, repo)
}

/// Commit the given file contents (and removals) as `author` at `epoch`.
pub(crate) fn make_commit_by(
    repo: &Repository,
    files: &[(&str, &str)],
    remove: &[&str],
    message: &str,
    author: &str,
    epoch: i64,
) -> git2::Oid {
    let sig = git2::Signature::new(
        author,
        &format!("{author}@test.com"),
        &git2::Time::new(epoch, 0),
    )
    .unwrap();
    let mut index = repo.index().unwrap();

    for (path, content) in files {
        let full_path = repo.workdir().unwrap().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&full_path, content).unwrap();
        index.add_path(Path::new(path)).unwrap();
    }
    for path in remove {
        index.remove_path(Path::new(path)).unwrap();
        let _ = fs::remove_file(repo.workdir().unwrap().join(path));
    }

    index.write().unwrap();
    let tree_oid = index.write_tree().unwrap();
    let tree = repo.find_tree(tree_oid).unwrap();

    let parent = repo.head().ok().and_then(|h| h.peel_to_commit().ok());
    let parents: Vec<&git2::Commit> = parent.iter().collect();

    repo.commit(Some("HEAD"), &sig, &sig, message, &tree, &parents)
        .unwrap()
}

pub(crate) fn make_commit(
    repo: &Repository,
    files: &[(&str, &str)],
    message: &str,
    epoch: i64,
) -> git2::Oid {
    make_commit_by(repo, files, &[], message, "Test", epoch)
}
