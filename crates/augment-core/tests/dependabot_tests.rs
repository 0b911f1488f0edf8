//! End-to-end tests for dependabot config augmentation

use augment_core::{
    DependabotEngine, Ecosystem, Engine, UpdateDependabotConfigRequest,
};
use augment_test_utils::fixtures::{DEPENDABOT_NPM_APP, DEPENDABOT_PIP, DEPENDABOT_WITH_ACTIONS};
use pretty_assertions::assert_eq;

fn actions() -> Ecosystem {
    Ecosystem::new("github-actions", "/", "daily")
}

#[test]
fn test_without_github_actions() {
    let outcome = DependabotEngine::new()
        .run(
            DEPENDABOT_NPM_APP,
            &[actions(), Ecosystem::new("npm", "/app", "daily")],
        )
        .unwrap();

    let expected = r#"version: 2
updates:
  - package-ecosystem: npm
    directory: /app
    schedule:
      interval: daily

  - package-ecosystem: github-actions
    directory: /
    schedule:
      interval: daily
"#;
    assert_eq!(outcome.final_text, expected);
    assert!(outcome.changed);
    assert_eq!(outcome.lines_added(), 4);
}

#[test]
fn test_with_github_actions_is_unchanged() {
    let outcome = DependabotEngine::new()
        .run(DEPENDABOT_WITH_ACTIONS, &[actions()])
        .unwrap();

    assert!(!outcome.changed);
    assert_eq!(outcome.final_text, DEPENDABOT_WITH_ACTIONS);
}

#[test]
fn test_missing_file_starts_from_minimal_root() {
    let outcome = DependabotEngine::new().run("", &[actions()]).unwrap();

    let expected = r#"version: 2
updates:
  - package-ecosystem: github-actions
    directory: /
    schedule:
      interval: daily
"#;
    assert_eq!(outcome.final_text, expected);
    assert!(outcome.changed);
}

#[test]
fn test_same_ecosystem_different_directory() {
    let outcome = DependabotEngine::new()
        .run(
            DEPENDABOT_NPM_APP,
            &[actions(), Ecosystem::new("npm", "/sample", "daily")],
        )
        .unwrap();

    let expected = r#"version: 2
updates:
  - package-ecosystem: npm
    directory: /app
    schedule:
      interval: daily

  - package-ecosystem: github-actions
    directory: /
    schedule:
      interval: daily
  - package-ecosystem: npm
    directory: /sample
    schedule:
      interval: daily
"#;
    assert_eq!(outcome.final_text, expected);
    assert!(outcome.changed);
}

#[test]
fn test_new_blocks_sorted_independent_of_detection_order() {
    let npm = Ecosystem::new("npm", "/", "daily");
    let engine = DependabotEngine::new();
    let a = engine
        .run(DEPENDABOT_PIP, &[actions(), npm.clone()])
        .unwrap();
    let b = engine.run(DEPENDABOT_PIP, &[npm, actions()]).unwrap();

    let expected = r#"# Managed by platform team
version: 2
updates:
- package-ecosystem: pip
  directory: /
  schedule:
    interval: weekly

- package-ecosystem: github-actions
  directory: /
  schedule:
    interval: daily
- package-ecosystem: npm
  directory: /
  schedule:
    interval: daily
"#;
    assert_eq!(a.final_text, expected);
    assert_eq!(b.final_text, expected);
}

#[test]
fn test_second_run_is_a_fixed_point() {
    let engine = DependabotEngine::new();
    let ecosystems = [actions(), Ecosystem::new("npm", "/sample", "weekly")];

    for input in ["", DEPENDABOT_NPM_APP, DEPENDABOT_PIP, DEPENDABOT_WITH_ACTIONS] {
        let first = engine.run(input, &ecosystems).unwrap();
        let second = engine.run(&first.final_text, &ecosystems).unwrap();
        assert!(!second.changed, "second run changed:\n{}", first.final_text);
    }
}

#[test]
fn test_updates_key_added_when_missing() {
    let outcome = DependabotEngine::new()
        .run("version: 2\n", &[actions()])
        .unwrap();

    let expected = "version: 2\nupdates:\n  - package-ecosystem: github-actions\n    directory: /\n    schedule:\n      interval: daily\n";
    assert_eq!(outcome.final_text, expected);
}

#[test]
fn test_wire_request_produces_response() {
    let request: UpdateDependabotConfigRequest = serde_json::from_str(
        r#"{"Content":"","Ecosystems":[{"PackageEcosystem":"github-actions","Directory":"/","Interval":"daily"}]}"#,
    )
    .unwrap();
    let response = DependabotEngine::new().update(&request).unwrap();

    assert!(response.is_changed);
    assert_eq!(response.original_input, "");
    assert!(response.final_output.starts_with("version: 2\nupdates:\n"));
    assert!(!response.configfile_fetch_error);
}

#[test]
fn test_column_zero_list_followed_by_comment() {
    let input = "version: 2\nupdates:\n- package-ecosystem: npm\n  directory: /app\n  schedule:\n    interval: daily\n# keep weekly\n";
    let ecosystems = [Ecosystem::new("npm", "/sample", "daily")];
    let outcome = DependabotEngine::new().run(input, &ecosystems).unwrap();

    let expected = format!(
        "{input}\n- package-ecosystem: npm\n  directory: /sample\n  schedule:\n    interval: daily\n"
    );
    assert_eq!(outcome.final_text, expected);

    let second = DependabotEngine::new()
        .run(&outcome.final_text, &ecosystems)
        .unwrap();
    assert!(!second.changed);
}

#[test]
fn test_column_zero_list_followed_by_root_key() {
    let input = "version: 2\nupdates:\n- package-ecosystem: npm\n  directory: /app\n  schedule:\n    interval: daily\nregistries:\n  npm-registry:\n    type: npm-registry\n";
    let ecosystems = [actions()];
    let outcome = DependabotEngine::new().run(input, &ecosystems).unwrap();

    let expected = "version: 2\nupdates:\n- package-ecosystem: npm\n  directory: /app\n  schedule:\n    interval: daily\n- package-ecosystem: github-actions\n  directory: /\n  schedule:\n    interval: daily\nregistries:\n  npm-registry:\n    type: npm-registry\n";
    assert_eq!(outcome.final_text, expected);

    let second = DependabotEngine::new()
        .run(&outcome.final_text, &ecosystems)
        .unwrap();
    assert!(!second.changed);
}
