use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use git2::{ObjectType, Repository, Status, StatusOptions, build::CheckoutBuilder};

use crate::checkout::CheckoutError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileStatus {
    Added,
    Modified,
    Deleted,
    Renamed,
    Untracked,
    TypeChange,
    Conflicted,
    Unknown,
}

impl FileStatus {
    pub fn tag(self) -> &'static str {
        match self {
            Self::Added => "A",
            Self::Modified => "M",
            Self::Deleted => "D",
            Self::Renamed => "R",
            Self::Untracked => "U",
            Self::TypeChange => "T",
            Self::Conflicted => "!",
            Self::Unknown => "-",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangedFile {
    pub path: String,
    pub status: FileStatus,
}

/// Working-copy state reloaded after every checkout and on refresh.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoSnapshot {
    pub root: PathBuf,
    pub branch_name: String,
    pub files: Vec<ChangedFile>,
}

/// Opaque handle for the working copy a checkout dialog targets.
///
/// Held by the dialog for the duration of one session and overwritten the
/// next time the dialog opens, never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    location: PathBuf,
}

impl Project {
    pub fn new(location: impl Into<PathBuf>) -> Self {
        Self {
            location: location.into(),
        }
    }

    pub fn location(&self) -> &Path {
        &self.location
    }

    /// Refreshes the in-memory resource state for this working copy.
    pub fn synchronize(&self) -> Result<RepoSnapshot> {
        load_snapshot(&self.location)
    }
}

/// Switches the working copy at `location` to `reference`.
///
/// The reference may be a branch name, a tag name or a commit hash. Branches
/// move HEAD symbolically; tags and bare commits leave HEAD detached at the
/// peeled commit. The working tree is updated in safe mode, so locally
/// modified files are never overwritten.
pub fn checkout_reference(location: &Path, reference: &str) -> Result<(), CheckoutError> {
    let repo = Repository::open(location).or_else(|_| Repository::discover(location))?;

    let (object, matched_reference) = repo.revparse_ext(reference)?;
    let commit = object.peel(ObjectType::Commit)?;

    let mut options = CheckoutBuilder::new();
    options.safe();
    repo.checkout_tree(&commit, Some(&mut options))?;

    let branch_ref = matched_reference
        .as_ref()
        .filter(|found| found.is_branch())
        .and_then(|found| found.name().map(str::to_string));
    match branch_ref {
        Some(name) => repo.set_head(&name)?,
        None => repo.set_head_detached(commit.id())?,
    }

    Ok(())
}

pub fn load_snapshot(cwd: &Path) -> Result<RepoSnapshot> {
    let repo = Repository::open(cwd)
        .or_else(|_| Repository::discover(cwd))
        .context("failed to discover git repository")?;
    let root = repo_root(&repo)?;
    let branch_name = current_branch_name(&repo);

    let mut options = StatusOptions::new();
    options
        .include_untracked(true)
        .recurse_untracked_dirs(true)
        .renames_head_to_index(true)
        .renames_index_to_workdir(true)
        .include_unmodified(false);

    let statuses = repo
        .statuses(Some(&mut options))
        .context("failed to load repository status")?;

    let mut files = statuses
        .iter()
        .filter_map(|entry| {
            entry.path().map(|path| ChangedFile {
                path: normalize_path(path),
                status: map_status(entry.status()),
            })
        })
        .filter(|file| !file.path.is_empty())
        .collect::<Vec<_>>();

    files.sort_by(|a, b| a.path.cmp(&b.path));
    files.dedup_by(|a, b| a.path == b.path);

    Ok(RepoSnapshot {
        root,
        branch_name,
        files,
    })
}

fn current_branch_name(repo: &Repository) -> String {
    let Ok(head) = repo.head() else {
        return "unknown".to_string();
    };

    if head.is_branch() {
        return head.shorthand().unwrap_or("unknown").to_string();
    }

    match head.target() {
        Some(oid) => {
            let hash = oid.to_string();
            let short = hash.get(..10).unwrap_or(hash.as_str());
            format!("detached @ {short}")
        }
        None => "detached".to_string(),
    }
}

fn repo_root(repo: &Repository) -> Result<PathBuf> {
    if let Some(workdir) = repo.workdir() {
        return Ok(workdir.to_path_buf());
    }

    repo.path()
        .parent()
        .map(|path| path.to_path_buf())
        .context("failed to resolve repository root")
}

fn map_status(status: Status) -> FileStatus {
    if status.is_conflicted() {
        return FileStatus::Conflicted;
    }

    if status.is_wt_new() {
        return FileStatus::Untracked;
    }

    if status.is_index_new() {
        return FileStatus::Added;
    }

    if status.is_wt_deleted() || status.is_index_deleted() {
        return FileStatus::Deleted;
    }

    if status.is_wt_renamed() || status.is_index_renamed() {
        return FileStatus::Renamed;
    }

    if status.is_wt_typechange() || status.is_index_typechange() {
        return FileStatus::TypeChange;
    }

    if status.is_wt_modified() || status.is_index_modified() {
        return FileStatus::Modified;
    }

    FileStatus::Unknown
}

fn normalize_path(path: &str) -> String {
    path.trim().trim_end_matches('/').to_string()
}
