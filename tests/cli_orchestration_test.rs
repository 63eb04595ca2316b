mod common;

use common::Captured;
use git2::Oid;
use git_bump::cli::orchestration::{run_bump_workflow, BumpWorkflowArgs};
use git_bump::domain::{BumpKind, Identity, TagRecord, TagTime, Version};
use git_bump::git::{HeadCommit, MockRepository, Repository};
use git_bump::publisher::PushSettings;
use git_bump::ui::{Output, ScriptedPrompter};
use git_bump::BumpError;

fn head_oid() -> Oid {
    Oid::from_bytes(&[9; 20]).unwrap()
}

fn mock_repo(tags: &[&str]) -> MockRepository {
    let mut repo = MockRepository::new();
    for (i, tag) in tags.iter().enumerate() {
        repo.add_tag(*tag, Oid::from_bytes(&[i as u8 + 1; 20]).unwrap());
    }
    repo.set_head(HeadCommit {
        reference: "refs/heads/main".to_string(),
        oid: head_oid(),
        message: "feat: export reports as CSV\n".to_string(),
        committer_time: TagTime::new(1_700_000_000, -240),
    });
    repo
}

fn identity() -> Identity {
    Identity::new("Release Bot", "release@example.com")
}

fn args(requested: Vec<BumpKind>) -> BumpWorkflowArgs {
    BumpWorkflowArgs {
        requested,
        push: PushSettings {
            remote: "origin".to_string(),
            token_variable: "GITHUB_TOKEN".to_string(),
            token: Some("ghp_test".to_string()),
        },
    }
}

fn captured_output() -> (Output, Captured, Captured) {
    let out = Captured::default();
    let err = Captured::default();
    (Output::new(out.clone(), err.clone()), out, err)
}

#[test]
fn test_patch_scenario() {
    let repo = mock_repo(&["v1.0.0", "v1.1.0", "v1.1.1"]);
    let prompter = ScriptedPrompter::new([]);
    let (mut output, out, err) = captured_output();

    let result = run_bump_workflow(
        &repo,
        &identity(),
        &prompter,
        &args(vec![BumpKind::Patch]),
        &mut output,
    )
    .unwrap();

    assert_eq!(result.current.original(), "v1.1.1");
    assert_eq!(result.kind, BumpKind::Patch);
    assert_eq!(result.next, Version::new(1, 1, 2));
    assert_eq!(result.publish.tag, "v1.1.2");
    assert_eq!(result.publish.target, head_oid());

    assert_eq!(
        out.text(),
        "Tags:\n- v1.0.0\n- v1.1.0\n- v1.1.1 (current version)\n\n\
         Bump version to \"v1.1.2\".\nPushed to origin.\n"
    );
    assert!(err.text().is_empty());

    let pushed = repo.pushed_tags();
    assert_eq!(pushed.len(), 1);
    assert_eq!(pushed[0].remote, "origin");
    assert_eq!(pushed[0].tag, "v1.1.2");
}

#[test]
fn test_major_scenario_without_prefix() {
    let repo = mock_repo(&["0.1.0"]);
    let prompter = ScriptedPrompter::new([]);

    let result = run_bump_workflow(
        &repo,
        &identity(),
        &prompter,
        &args(vec![BumpKind::Major]),
        &mut Output::quiet(),
    )
    .unwrap();

    assert_eq!(result.publish.tag, "1.0.0");
}

#[test]
fn test_tag_uses_head_commit_for_message_and_time() {
    let repo = mock_repo(&["v3.2.1"]);
    let prompter = ScriptedPrompter::new([]);

    run_bump_workflow(
        &repo,
        &identity(),
        &prompter,
        &args(vec![BumpKind::Minor]),
        &mut Output::quiet(),
    )
    .unwrap();

    let created = repo.created_tags();
    assert_eq!(created.len(), 1);
    assert_eq!(created[0].name, "v3.3.0");
    assert_eq!(created[0].target, head_oid());
    assert_eq!(created[0].message, "feat: export reports as CSV\n");
    assert_eq!(created[0].tagger.name, "Release Bot");
    assert_eq!(created[0].tagger.email, "release@example.com");
    assert_eq!(created[0].tagger.when, TagTime::new(1_700_000_000, -240));
}

#[test]
fn test_no_versions_fails_before_prompt_and_push() {
    for tags in [&[][..], &["latest", "stable"][..]] {
        let repo = mock_repo(tags);
        let prompter = ScriptedPrompter::answering(BumpKind::Patch);
        let (mut output, out, _) = captured_output();

        let err = run_bump_workflow(&repo, &identity(), &prompter, &args(vec![]), &mut output)
            .unwrap_err();

        assert!(matches!(err, BumpError::NoVersionsFound));
        assert!(prompter.prompts().is_empty());
        assert!(repo.created_tags().is_empty());
        assert!(repo.pushed_tags().is_empty());
        assert!(out.text().is_empty());
    }
}

#[test]
fn test_major_and_patch_flags_offer_only_those() {
    let repo = mock_repo(&["v1.1.1"]);
    let prompter = ScriptedPrompter::answering(BumpKind::Major);

    let result = run_bump_workflow(
        &repo,
        &identity(),
        &prompter,
        &args(vec![BumpKind::Major, BumpKind::Patch]),
        &mut Output::quiet(),
    )
    .unwrap();

    assert_eq!(result.publish.tag, "v2.0.0");
    let prompts = prompter.prompts();
    assert_eq!(prompts.len(), 1);
    assert_eq!(prompts[0].choices, vec![BumpKind::Patch, BumpKind::Major]);
}

#[test]
fn test_aborted_prompt_creates_nothing() {
    let repo = mock_repo(&["v1.1.1"]);
    let prompter = ScriptedPrompter::aborting();

    let err = run_bump_workflow(
        &repo,
        &identity(),
        &prompter,
        &args(vec![]),
        &mut Output::quiet(),
    )
    .unwrap_err();

    assert!(matches!(err, BumpError::SelectionAborted(_)));
    assert!(repo.created_tags().is_empty());
}

#[test]
fn test_push_failure_is_partial_success() {
    let mut repo = mock_repo(&["v1.0.0", "v1.1.0", "v1.1.1"]);
    repo.fail_push("403 Forbidden");
    let prompter = ScriptedPrompter::new([]);
    let (mut output, out, err) = captured_output();

    let error = run_bump_workflow(
        &repo,
        &identity(),
        &prompter,
        &args(vec![BumpKind::Patch]),
        &mut output,
    )
    .unwrap_err();

    assert!(matches!(error, BumpError::PushFailed { .. }));
    assert!(error.to_string().contains("403 Forbidden"));
    assert!(out.text().contains("Bump version to \"v1.1.2\"."));
    assert!(!out.text().contains("Pushed to"));
    assert!(err.text().contains("git push origin v1.1.2"));

    // Re-querying the tags shows the local tag survived
    assert!(repo
        .list_tags()
        .unwrap()
        .contains(&TagRecord::new("v1.1.2", head_oid())));
}

#[test]
fn test_missing_token_warns_but_pushes() {
    let repo = mock_repo(&["v1.1.1"]);
    let prompter = ScriptedPrompter::new([]);
    let (mut output, _, err) = captured_output();
    let mut workflow_args = args(vec![BumpKind::Patch]);
    workflow_args.push.token = None;

    run_bump_workflow(&repo, &identity(), &prompter, &workflow_args, &mut output).unwrap();

    assert!(err.text().contains("GITHUB_TOKEN is not set"));
    assert_eq!(repo.pushed_tags()[0].token, None);
}

#[test]
fn test_remote_progress_goes_to_output() {
    let mut repo = mock_repo(&["v1.1.1"]);
    repo.set_remote_progress("Counting objects: 1, done.\n");
    let prompter = ScriptedPrompter::new([]);
    let (mut output, out, _) = captured_output();

    run_bump_workflow(
        &repo,
        &identity(),
        &prompter,
        &args(vec![BumpKind::Patch]),
        &mut output,
    )
    .unwrap();

    let text = out.text();
    let progress = text.find("Counting objects").unwrap();
    let created = text.find("Bump version to").unwrap();
    let pushed = text.find("Pushed to origin.").unwrap();
    assert!(created < progress && progress < pushed);
}

#[test]
fn test_non_monotonic_history_uses_highest_parsed_version() {
    // Creation order differs from version order; unparseable names never count
    let repo = mock_repo(&["v2.0.0", "v1.9.0", "release-10", "v1.10.0"]);
    let prompter = ScriptedPrompter::new([]);

    let result = run_bump_workflow(
        &repo,
        &identity(),
        &prompter,
        &args(vec![BumpKind::Patch]),
        &mut Output::quiet(),
    )
    .unwrap();

    assert_eq!(result.current.original(), "v2.0.0");
    assert_eq!(result.publish.tag, "v2.0.1");
}

#[test]
fn test_bump_past_component_limit_creates_nothing() {
    let repo = mock_repo(&["v1.0.0", "v18446744073709551615.0.0"]);
    let prompter = ScriptedPrompter::new([]);

    let err = run_bump_workflow(
        &repo,
        &identity(),
        &prompter,
        &args(vec![BumpKind::Major]),
        &mut Output::quiet(),
    )
    .unwrap_err();

    assert!(matches!(err, BumpError::VersionOverflow { .. }));
    assert!(err.to_string().contains("v18446744073709551615.0.0"));
    assert!(repo.created_tags().is_empty());
    assert!(repo.pushed_tags().is_empty());
}
