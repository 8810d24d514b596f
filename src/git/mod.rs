use std::error::Error;
use std::path::{Path, PathBuf};

use chrono::{DateTime, NaiveDate};
use git2::{BranchType, Delta, DiffFindOptions, DiffOptions, Repository, Sort};

/// Read-only view of a git repository for the history walker.
pub struct GitRepo {
    repo: Repository,
    root: PathBuf,
}

/// One commit as the walker sees it.
pub struct CommitInfo {
    pub author: String,
    pub date: NaiveDate,
}

/// One changed path in a (commit, parent) diff. `old_path != new_path`
/// marks a rename.
pub struct Change {
    pub old_path: String,
    pub new_path: String,
}

/// The diff of one commit against one of its parents: changed paths plus
/// the patch summary's aggregate line counts.
pub struct ChangeSet {
    pub changes: Vec<Change>,
    pub lines_added: usize,
    pub lines_deleted: usize,
}

impl GitRepo {
    pub fn open(path: &Path) -> Result<Self, Box<dyn Error>> {
        let repo = Repository::discover(path)?;
        let root = repo
            .workdir()
            .ok_or("bare repositories are not supported")?
            .to_path_buf();
        Ok(Self { repo, root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Walk every commit reachable from HEAD in time order (newest first),
    /// handing each commit and its parent-diffs to `visit` exactly once.
    ///
    /// Root commits have no parent to diff against and get an empty slice;
    /// merge commits get one change set per parent.
    pub fn walk_history<F>(&self, mut visit: F) -> Result<(), Box<dyn Error>>
    where
        F: FnMut(&CommitInfo, &[ChangeSet]),
    {
        let mut revwalk = self.repo.revwalk()?;
        revwalk.push_head()?;
        revwalk.set_sorting(Sort::TIME)?;

        for oid in revwalk {
            let oid = oid?;
            let commit = self.repo.find_commit(oid)?;
            let info = CommitInfo {
                author: commit.author().name().unwrap_or("unknown").to_string(),
                date: commit_date(&commit),
            };

            let mut change_sets = Vec::with_capacity(commit.parent_count());
            for parent in commit.parents() {
                change_sets.push(self.diff_against_parent(&commit, &parent)?);
            }
            visit(&info, &change_sets);
        }

        Ok(())
    }

    fn diff_against_parent(
        &self,
        commit: &git2::Commit,
        parent: &git2::Commit,
    ) -> Result<ChangeSet, Box<dyn Error>> {
        let mut opts = DiffOptions::new();
        let mut diff = self.repo.diff_tree_to_tree(
            Some(&parent.tree()?),
            Some(&commit.tree()?),
            Some(&mut opts),
        )?;

        // pair up deletes and adds so renames surface as a single delta
        let mut find_opts = DiffFindOptions::new();
        find_opts.renames(true);
        diff.find_similar(Some(&mut find_opts))?;

        let mut changes = Vec::new();
        for delta in diff.deltas() {
            if delta.status() == Delta::Unmodified {
                continue;
            }
            let new_path = delta.new_file().path().or_else(|| delta.old_file().path());
            let old_path = delta.old_file().path().or_else(|| delta.new_file().path());
            if let (Some(old), Some(new)) = (old_path, new_path) {
                changes.push(Change {
                    old_path: path_str(old),
                    new_path: path_str(new),
                });
            }
        }

        let stats = diff.stats()?;
        Ok(ChangeSet {
            changes,
            lines_added: stats.insertions(),
            lines_deleted: stats.deletions(),
        })
    }

    /// All tags, as (date of the commit the tag points at, tag name).
    pub fn tags(&self) -> Result<Vec<(NaiveDate, String)>, Box<dyn Error>> {
        let mut raw: Vec<(git2::Oid, String)> = Vec::new();
        self.repo.tag_foreach(|oid, name| {
            let name = String::from_utf8_lossy(name)
                .trim_start_matches("refs/tags/")
                .to_string();
            raw.push((oid, name));
            true
        })?;

        let mut tags = Vec::new();
        for (oid, name) in raw {
            // annotated tags point at a tag object, lightweight ones at the
            // commit itself; peeling handles both
            let commit = self.repo.find_object(oid, None)?.peel_to_commit()?;
            tags.push((commit_date(&commit), name));
        }
        Ok(tags)
    }

    pub fn branch_names(&self) -> Result<Vec<String>, Box<dyn Error>> {
        let mut names = Vec::new();
        for branch in self.repo.branches(Some(BranchType::Local))? {
            let (branch, _) = branch?;
            if let Some(name) = branch.name()? {
                names.push(name.to_string());
            }
        }
        names.sort();
        Ok(names)
    }
}

/// Author timestamp as a UTC calendar date.
fn commit_date(commit: &git2::Commit) -> NaiveDate {
    DateTime::from_timestamp(commit.time().seconds(), 0)
        .unwrap_or_default()
        .date_naive()
}

fn path_str(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}
