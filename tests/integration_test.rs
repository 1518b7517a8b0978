mod common;

use common::{short, TestRepo};
use git_semver::boundary::BoundaryWarning;
use git_semver::config::ResolveConfig;
use git_semver::domain::TagKind;
use git_semver::git::{ancestry, list_tags, Git2Repository, Repository};
use git_semver::{resolve, GitSemverError, VersionResolver};

#[test]
fn test_untagged_repository() {
    let test_repo = TestRepo::new();
    test_repo.commit("Initial commit", 1_000);
    let head = test_repo.commit("Second commit", 2_000);

    let repo = Git2Repository::open(test_repo.path()).unwrap();
    let version = resolve(&repo).unwrap();
    assert_eq!(version.to_string(), format!("0.1.0-2.{}", short(head)));
}

#[test]
fn test_head_on_lightweight_tag() {
    let test_repo = TestRepo::new();
    test_repo.commit("Initial commit", 1_000);
    let head = test_repo.commit("Release", 2_000);
    test_repo.tag_lightweight("v0.1.0", head);

    let repo = Git2Repository::open(test_repo.path()).unwrap();
    assert_eq!(resolve(&repo).unwrap().to_string(), "0.1.0");
}

#[test]
fn test_head_on_annotated_tag() {
    let test_repo = TestRepo::new();
    let head = test_repo.commit("Initial commit", 1_000);
    test_repo.tag_annotated("v1.2.0", head, 1_500);

    let repo = Git2Repository::open(test_repo.path()).unwrap();
    assert_eq!(resolve(&repo).unwrap().to_string(), "1.2.0");
}

#[test]
fn test_commits_after_tag() {
    let test_repo = TestRepo::new();
    let tagged = test_repo.commit("Release", 1_000);
    test_repo.tag_lightweight("v0.1.0", tagged);
    test_repo.commit("Fix", 2_000);
    let head = test_repo.commit("Another fix", 3_000);

    let repo = Git2Repository::open(test_repo.path()).unwrap();
    assert_eq!(
        resolve(&repo).unwrap().to_string(),
        format!("0.1.1-2.{}", short(head))
    );
}

#[test]
fn test_dirty_working_tree_on_tag() {
    let test_repo = TestRepo::new();
    let head = test_repo.commit("Release", 1_000);
    test_repo.tag_lightweight("v0.1.0", head);
    test_repo.make_dirty();

    let repo = Git2Repository::open(test_repo.path()).unwrap();
    assert!(!repo.is_clean().unwrap());

    let resolution = VersionResolver::default().resolve(&repo).unwrap();
    assert_eq!(resolution.version.to_string(), "0.1.1-0.dev");
    assert_eq!(resolution.signature, "dev");
    assert!(resolution.warnings.contains(&BoundaryWarning::DirtyWorkingTree));
}

#[test]
fn test_dirty_working_tree_after_tag() {
    let test_repo = TestRepo::new();
    let tagged = test_repo.commit("Release", 1_000);
    test_repo.tag_lightweight("v2.0.0", tagged);
    test_repo.commit("Work", 2_000);
    test_repo.make_dirty();

    let repo = Git2Repository::open(test_repo.path()).unwrap();
    assert_eq!(resolve(&repo).unwrap().to_string(), "2.0.1-1.dev");
}

#[test]
fn test_prerelease_tag_builds_sort_after_candidate() {
    let test_repo = TestRepo::new();
    let tagged = test_repo.commit("Candidate", 1_000);
    test_repo.tag_lightweight("v1.0.0-rc.1", tagged);
    let head = test_repo.commit("Fix", 2_000);

    let repo = Git2Repository::open(test_repo.path()).unwrap();
    let version = resolve(&repo).unwrap();
    assert_eq!(version.to_string(), format!("1.0.1-1.{}", short(head)));

    let candidate = semver::Version::parse("1.0.0-rc.1").unwrap();
    // Short hashes are hex; only an all-digit one with a leading zero fails to parse
    if let Ok(resolved) = semver::Version::parse(&version.to_string()) {
        assert!(resolved > candidate);
    }
}

#[test]
fn test_most_recent_tag_wins() {
    let test_repo = TestRepo::new();
    let first = test_repo.commit("First release", 1_000);
    test_repo.tag_lightweight("v0.1.0", first);
    let second = test_repo.commit("Second release", 2_000);
    test_repo.tag_annotated("v0.2.0", second, 2_100);
    let head = test_repo.commit("Work", 3_000);

    let repo = Git2Repository::open(test_repo.path()).unwrap();
    let resolution = VersionResolver::default().resolve(&repo).unwrap();
    assert_eq!(resolution.anchor.as_ref().map(|t| t.name.as_str()), Some("v0.2.0"));
    assert_eq!(resolution.version.to_string(), format!("0.2.1-1.{}", short(head)));
}

#[test]
fn test_unparsable_tag_is_skipped() {
    let test_repo = TestRepo::new();
    let tagged = test_repo.commit("Release", 1_000);
    test_repo.tag_lightweight("v0.3.0", tagged);
    let latest = test_repo.commit("Work", 2_000);
    test_repo.tag_lightweight("nightly", latest);

    let repo = Git2Repository::open(test_repo.path()).unwrap();
    let resolution = VersionResolver::default().resolve(&repo).unwrap();
    assert_eq!(resolution.version.to_string(), format!("0.3.1-1.{}", short(latest)));
    assert!(resolution
        .warnings
        .iter()
        .any(|w| matches!(w, BoundaryWarning::UnparsableTag { tag, .. } if tag == "nightly")));
}

#[test]
fn test_tag_on_newer_branch_commit_is_ignored() {
    let test_repo = TestRepo::new();
    let base = test_repo.commit("Release", 1_000);
    test_repo.tag_lightweight("v1.0.0", base);
    let head = test_repo.commit("Work", 2_000);

    let base_commit = test_repo.find_commit(base);
    let feature = test_repo.commit_on("refs/heads/feature", "Feature", 5_000, &[&base_commit]);
    test_repo.tag_lightweight("v9.0.0", feature);

    let repo = Git2Repository::open(test_repo.path()).unwrap();
    let resolution = VersionResolver::default().resolve(&repo).unwrap();
    assert_eq!(resolution.version.to_string(), format!("1.0.1-1.{}", short(head)));
    assert!(resolution
        .warnings
        .iter()
        .any(|w| matches!(w, BoundaryWarning::TagAheadOfHead { tag, .. } if tag == "v9.0.0")));
}

#[test]
fn test_tag_on_older_unrelated_commit_counts_whole_history() {
    let test_repo = TestRepo::new();
    let root = test_repo.commit("Root", 1_000);
    let root_commit = test_repo.find_commit(root);
    let side = test_repo.commit_on("refs/heads/side", "Side", 1_500, &[&root_commit]);
    test_repo.tag_lightweight("v3.0.0", side);
    let head = test_repo.commit("Main work", 2_000);

    let repo = Git2Repository::open(test_repo.path()).unwrap();
    let resolution = VersionResolver::default().resolve(&repo).unwrap();
    assert_eq!(resolution.ordinal, Some(2));
    assert_eq!(resolution.version.to_string(), format!("3.0.1-2.{}", short(head)));
    assert!(resolution
        .warnings
        .iter()
        .any(|w| matches!(w, BoundaryWarning::AnchorNotInHistory { .. })));
}

#[test]
fn test_merge_history_counts_each_commit_once() {
    let test_repo = TestRepo::new();
    let root = test_repo.commit("Root", 1_000);
    test_repo.tag_lightweight("v0.5.0", root);
    let main = test_repo.commit("Main", 2_000);

    let root_commit = test_repo.find_commit(root);
    let side = test_repo.commit_on("refs/heads/side", "Side", 2_500, &[&root_commit]);

    let main_commit = test_repo.find_commit(main);
    let side_commit = test_repo.find_commit(side);
    let merge = test_repo.commit_on("HEAD", "Merge side", 3_000, &[&main_commit, &side_commit]);

    let repo = Git2Repository::open(test_repo.path()).unwrap();
    let commits = ancestry(&repo, "HEAD").unwrap();
    let hashes: Vec<String> = commits.iter().map(|c| c.hash.clone()).collect();
    assert_eq!(
        hashes,
        vec![merge.to_string(), side.to_string(), main.to_string(), root.to_string()]
    );

    assert_eq!(
        resolve(&repo).unwrap().to_string(),
        format!("0.5.1-3.{}", short(merge))
    );
}

#[test]
fn test_resolve_explicit_revision() {
    let test_repo = TestRepo::new();
    let tagged = test_repo.commit("Release", 1_000);
    test_repo.tag_lightweight("v0.1.0", tagged);
    let middle = test_repo.commit("Fix", 2_000);
    test_repo.commit("Later", 3_000);

    let repo = Git2Repository::open(test_repo.path()).unwrap();
    let config = ResolveConfig {
        revision: "HEAD~1".to_string(),
        ..ResolveConfig::default()
    };
    let resolution = VersionResolver::new(&config).unwrap().resolve(&repo).unwrap();
    assert_eq!(resolution.version.to_string(), format!("0.1.1-1.{}", short(middle)));
}

#[test]
fn test_unknown_revision() {
    let test_repo = TestRepo::new();
    test_repo.commit("Initial commit", 1_000);

    let repo = Git2Repository::open(test_repo.path()).unwrap();
    let config = ResolveConfig {
        revision: "does-not-exist".to_string(),
        ..ResolveConfig::default()
    };
    let result = VersionResolver::new(&config).unwrap().resolve(&repo);
    assert!(matches!(result, Err(GitSemverError::RevisionNotFound(_))));
}

#[test]
fn test_open_outside_repository_fails() {
    let dir = tempfile::TempDir::new().unwrap();
    assert!(matches!(
        Git2Repository::open(dir.path()),
        Err(GitSemverError::Repository(_))
    ));
}

#[test]
fn test_open_from_subdirectory() {
    let test_repo = TestRepo::new();
    let head = test_repo.commit("Initial commit", 1_000);
    test_repo.tag_lightweight("v0.1.0", head);
    let nested = test_repo.path().join("src").join("nested");
    std::fs::create_dir_all(&nested).unwrap();

    let repo = Git2Repository::open(&nested).unwrap();
    assert_eq!(repo.head().unwrap().hash, head.to_string());
}

#[test]
fn test_list_tags_classifies_kinds() {
    let test_repo = TestRepo::new();
    let first = test_repo.commit("First", 1_000);
    test_repo.tag_lightweight("v0.1.0", first);
    let second = test_repo.commit("Second", 2_000);
    test_repo.tag_annotated("v0.2.0", second, 2_100);

    let repo = Git2Repository::open(test_repo.path()).unwrap();
    let tags = list_tags(&repo).unwrap();
    assert_eq!(tags.len(), 2);

    assert_eq!(tags[0].name, "v0.2.0");
    assert_eq!(tags[0].kind, TagKind::Annotated);
    assert_eq!(tags[0].commit.hash, second.to_string());
    assert_eq!(tags[0].message.as_deref().map(str::trim_end), Some("Release v0.2.0"));
    assert!(tags[0].tagger.is_some());

    assert_eq!(tags[1].name, "v0.1.0");
    assert_eq!(tags[1].kind, TagKind::Lightweight);
    assert_eq!(tags[1].hash, first.to_string());
}

#[test]
fn test_head_reports_branch() {
    let test_repo = TestRepo::new();
    let head = test_repo.commit("Initial commit", 1_000);

    let repo = Git2Repository::open(test_repo.path()).unwrap();
    let current = repo.head().unwrap();
    assert_eq!(current.hash, head.to_string());
    assert!(!current.is_detached());

    test_repo.repo.set_head_detached(head).unwrap();
    let detached = repo.head().unwrap();
    assert!(detached.is_detached());
    assert_eq!(detached.display_name(), "HEAD");
}

#[test]
fn test_remote_url_lookup() {
    let test_repo = TestRepo::new();
    test_repo.commit("Initial commit", 1_000);
    test_repo.set_remote("origin", "git@github.com:acme/widgets.git");

    let repo = Git2Repository::open(test_repo.path()).unwrap();
    assert_eq!(
        repo.remote_url("origin").unwrap().as_deref(),
        Some("git@github.com:acme/widgets.git")
    );
    assert_eq!(repo.remote_url("upstream").unwrap(), None);
}
