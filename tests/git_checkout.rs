use std::fs;
use std::path::Path;

use git2::{Oid, Repository, Signature};
use tempfile::TempDir;

use refswitch::git::{FileStatus, Project, checkout_reference, load_snapshot};

#[test]
fn checkout_branch_moves_head_symbolically() {
    let fixture = TempDir::new().expect("temp directory should be created");
    let repo = init_repo(fixture.path());
    let first = commit_file(&repo, "file.txt", "one\n", "initial commit");
    repo.branch("feature", &repo.find_commit(first).expect("commit"), false)
        .expect("branch should be created");

    checkout_reference(fixture.path(), "feature").expect("branch checkout should succeed");

    let repo = Repository::open(fixture.path()).expect("repository should reopen");
    assert!(!repo.head_detached().expect("head state should load"));
    let snapshot = load_snapshot(fixture.path()).expect("snapshot should load");
    assert_eq!(snapshot.branch_name, "feature");
}

#[test]
fn checkout_tag_detaches_head() {
    let fixture = TempDir::new().expect("temp directory should be created");
    let repo = init_repo(fixture.path());
    let first = commit_file(&repo, "file.txt", "one\n", "initial commit");
    let target = repo.find_object(first, None).expect("commit object");
    repo.tag_lightweight("v1.0", &target, false)
        .expect("tag should be created");
    commit_file(&repo, "file.txt", "two\n", "second commit");

    checkout_reference(fixture.path(), "v1.0").expect("tag checkout should succeed");

    let repo = Repository::open(fixture.path()).expect("repository should reopen");
    assert!(repo.head_detached().expect("head state should load"));
    assert_eq!(repo.head().expect("head").target(), Some(first));

    let snapshot = load_snapshot(fixture.path()).expect("snapshot should load");
    assert!(
        snapshot.branch_name.starts_with("detached"),
        "detached HEAD should be labeled as such, got {}",
        snapshot.branch_name
    );
}

#[test]
fn checkout_commit_hash_detaches_head_at_that_commit() {
    let fixture = TempDir::new().expect("temp directory should be created");
    let repo = init_repo(fixture.path());
    let first = commit_file(&repo, "file.txt", "one\n", "initial commit");
    commit_file(&repo, "file.txt", "two\n", "second commit");

    checkout_reference(fixture.path(), &first.to_string())
        .expect("commit hash checkout should succeed");

    let repo = Repository::open(fixture.path()).expect("repository should reopen");
    assert!(repo.head_detached().expect("head state should load"));
    assert_eq!(repo.head().expect("head").target(), Some(first));
}

#[test]
fn checkout_switches_working_tree_contents() {
    let fixture = TempDir::new().expect("temp directory should be created");
    let repo = init_repo(fixture.path());
    let first = commit_file(&repo, "file.txt", "one\n", "initial commit");
    let default_branch = load_snapshot(fixture.path())
        .expect("snapshot should load")
        .branch_name;
    repo.branch("v1", &repo.find_commit(first).expect("commit"), false)
        .expect("branch should be created");
    commit_file(&repo, "file.txt", "two\n", "second commit");

    checkout_reference(fixture.path(), "v1").expect("checkout should succeed");
    let contents = fs::read_to_string(fixture.path().join("file.txt")).expect("file should read");
    assert_eq!(contents, "one\n");

    checkout_reference(fixture.path(), &default_branch).expect("checkout back should succeed");
    let contents = fs::read_to_string(fixture.path().join("file.txt")).expect("file should read");
    assert_eq!(contents, "two\n");
}

#[test]
fn checkout_of_unknown_reference_fails_with_message() {
    let fixture = TempDir::new().expect("temp directory should be created");
    let repo = init_repo(fixture.path());
    commit_file(&repo, "file.txt", "one\n", "initial commit");

    let error = checkout_reference(fixture.path(), "no-such-reference")
        .expect_err("unknown reference should be rejected");

    let message = error.message().expect("git should report a reason");
    assert!(!message.trim().is_empty());
}

#[test]
fn synchronize_reports_untracked_files() {
    let fixture = TempDir::new().expect("temp directory should be created");
    let repo = init_repo(fixture.path());
    commit_file(&repo, "file.txt", "one\n", "initial commit");
    fs::write(fixture.path().join("scratch.txt"), "notes\n").expect("file should be written");

    let project = Project::new(fixture.path());
    let snapshot = project.synchronize().expect("synchronization should succeed");

    let scratch = snapshot
        .files
        .iter()
        .find(|file| file.path == "scratch.txt")
        .expect("untracked file should appear in the snapshot");
    assert_eq!(scratch.status, FileStatus::Untracked);
}

fn init_repo(dir: &Path) -> Repository {
    let repo = Repository::init(dir).expect("repository should initialize");
    let mut config = repo.config().expect("config should open");
    config
        .set_str("user.name", "RefSwitch Tests")
        .expect("user.name should be set");
    config
        .set_str("user.email", "refswitch-tests@example.com")
        .expect("user.email should be set");
    repo
}

fn commit_file(repo: &Repository, name: &str, contents: &str, message: &str) -> Oid {
    let workdir = repo.workdir().expect("repository should have a workdir");
    fs::write(workdir.join(name), contents).expect("file should be written");

    let mut index = repo.index().expect("index should open");
    index
        .add_path(Path::new(name))
        .expect("file should be staged");
    index.write().expect("index should write");
    let tree_id = index.write_tree().expect("tree should write");
    let tree = repo.find_tree(tree_id).expect("tree should load");

    let signature = Signature::now("RefSwitch Tests", "refswitch-tests@example.com")
        .expect("signature should build");
    let parent = repo.head().ok().and_then(|head| head.peel_to_commit().ok());
    let parents = parent.iter().collect::<Vec<_>>();

    repo.commit(
        Some("HEAD"),
        &signature,
        &signature,
        message,
        &tree,
        &parents,
    )
    .expect("commit should be created")
}
