//! Integration tests for the `current`, `set` and `bump` commands.

mod common;

use common::{RecordingRunner, TestStore};
use versioner::commands::{self, Bump, BumpOutcome, CurrentVersion};
use versioner::{CommandRunner, Version};

// =============================================================================
// current
// =============================================================================

#[test]
fn test_current_on_empty_file() -> anyhow::Result<()> {
    let test = TestStore::new()?;
    assert_eq!(commands::current(&test.store)?, CurrentVersion::Uninitialized);
    Ok(())
}

#[test]
fn test_current_reads_version() -> anyhow::Result<()> {
    let test = TestStore::with_contents(r#"{"version":"2.1.0"}"#)?;
    assert_eq!(
        commands::current(&test.store)?,
        CurrentVersion::Set(Version::new(2, 1, 0))
    );
    Ok(())
}

#[test]
fn test_current_on_corrupt_file() -> anyhow::Result<()> {
    let test = TestStore::with_contents(r#"{"foo":"bar"}"#)?;
    assert!(commands::current(&test.store).unwrap_err().is_corrupt());
    Ok(())
}

// =============================================================================
// set
// =============================================================================

#[test]
fn test_set_without_git() -> anyhow::Result<()> {
    let test = TestStore::new()?;

    let version = commands::set(&test.store, "v1.4.0-beta", None, |_| {})?;

    assert_eq!(version, Version::new(1, 4, 0));
    assert_eq!(test.contents()?, r#"{"version":"1.4.0"}"#);
    Ok(())
}

#[test]
fn test_set_with_git_commits_and_tags() -> anyhow::Result<()> {
    let test = TestStore::new()?;
    let runner = RecordingRunner::default();

    commands::set(&test.store, "2.0.0", Some(&runner), |_| {})?;

    assert_eq!(
        runner.commands(),
        vec![
            format!(
                "git add {} && git commit -m 'Set app version to 2.0.0'",
                test.path().display()
            ),
            "git tag 2.0.0".to_string(),
        ]
    );
    Ok(())
}

#[test]
fn test_set_reports_before_git_runs() -> anyhow::Result<()> {
    let test = TestStore::new()?;
    let runner = RecordingRunner::default();
    let mut commands_at_report = None;

    commands::set(&test.store, "0.2.0", Some(&runner), |_| {
        commands_at_report = Some(runner.commands().len());
    })?;

    assert_eq!(commands_at_report, Some(0));
    assert_eq!(runner.commands().len(), 2);
    Ok(())
}

#[test]
fn test_set_invalid_version_runs_nothing() -> anyhow::Result<()> {
    let test = TestStore::with_contents(r#"{"version":"1.0.0"}"#)?;
    let runner = RecordingRunner::default();

    let err = commands::set(&test.store, "1.2.x", Some(&runner), |_| {}).unwrap_err();

    assert!(err.is_version());
    assert!(runner.commands().is_empty());
    assert_eq!(test.contents()?, r#"{"version":"1.0.0"}"#);
    Ok(())
}

#[test]
fn test_set_commit_failure_skips_tag() -> anyhow::Result<()> {
    let test = TestStore::new()?;
    let runner = RecordingRunner::failing_on("git commit");

    let mut reported = None;

    let err = commands::set(&test.store, "3.1.4", Some(&runner), |version| {
        reported = Some(*version);
    })
    .unwrap_err();

    assert!(err.is_shell());
    assert_eq!(runner.commands().len(), 1);
    // The change is reported even though git failed
    assert_eq!(reported, Some(Version::new(3, 1, 4)));
    // The file is written before git runs
    assert_eq!(test.store.read()?, Version::new(3, 1, 4));
    Ok(())
}

#[test]
fn test_record_in_git_tag_failure() -> anyhow::Result<()> {
    let test = TestStore::new()?;
    let runner = RecordingRunner::failing_on("git tag");
    let runner: &dyn CommandRunner = &runner;

    let result = commands::record_in_git(runner, test.store.path(), &Version::new(1, 0, 0));
    assert!(result.is_err());
    Ok(())
}

// =============================================================================
// bump
// =============================================================================

fn bump_from(current: &str, bump: Bump) -> anyhow::Result<(BumpOutcome, String)> {
    let test = TestStore::with_contents(&format!(r#"{{"version":"{current}"}}"#))?;
    let outcome = commands::bump(&test.store, bump)?;
    Ok((outcome, test.contents()?))
}

#[test]
fn test_bump_patch() -> anyhow::Result<()> {
    let (outcome, contents) = bump_from("1.2.3", Bump::Patch)?;

    assert_eq!(outcome.previous, Version::new(1, 2, 3));
    assert_eq!(outcome.current, Version::new(1, 2, 4));
    assert_eq!(contents, r#"{"version":"1.2.4"}"#);
    Ok(())
}

#[test]
fn test_bump_minor() -> anyhow::Result<()> {
    let (outcome, _) = bump_from("1.2.3", Bump::Minor)?;
    assert_eq!(outcome.current, Version::new(1, 3, 0));
    Ok(())
}

#[test]
fn test_bump_major_wins_over_minor() -> anyhow::Result<()> {
    let (outcome, contents) = bump_from("1.2.3", Bump::from_flags(true, true, false))?;

    assert_eq!(outcome.current, Version::new(2, 0, 0));
    assert_eq!(contents, r#"{"version":"2.0.0"}"#);
    Ok(())
}

#[test]
fn test_bump_drops_stored_suffix() -> anyhow::Result<()> {
    let (outcome, contents) = bump_from("1.2.3-beta.1", Bump::default())?;

    assert_eq!(outcome.current, Version::new(1, 2, 4));
    assert_eq!(contents, r#"{"version":"1.2.4"}"#);
    Ok(())
}

#[test]
fn test_bump_empty_file_fails() -> anyhow::Result<()> {
    let test = TestStore::new()?;

    assert!(commands::bump(&test.store, Bump::Patch).unwrap_err().is_corrupt());
    assert!(test.store.is_empty()?);
    Ok(())
}

#[test]
fn test_bump_overflow_leaves_file() -> anyhow::Result<()> {
    let stored = format!(r#"{{"version":"1.2.{}"}}"#, u64::MAX);
    let test = TestStore::with_contents(&stored)?;

    assert!(commands::bump(&test.store, Bump::Patch).is_err());
    assert_eq!(test.contents()?, stored);
    Ok(())
}
