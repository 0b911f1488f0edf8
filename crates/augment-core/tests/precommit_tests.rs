//! End-to-end tests for pre-commit config augmentation

use augment_core::precommit::PrecommitConfig;
use augment_core::{Catalog, Engine, Error, PrecommitEngine, UpdatePrecommitConfigRequest};
use augment_test_utils::fixtures::{
    CATALOG, JUMANJI, PRECOMMIT_PARTIAL, PRECOMMIT_STYLED, PRECOMMIT_WITH_COMMON,
};
use pretty_assertions::assert_eq;
use rstest::rstest;

fn engine() -> PrecommitEngine {
    PrecommitEngine::new(Catalog::from_yaml_str(CATALOG).unwrap())
}

fn langs(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_empty_document_gets_root_and_sorted_blocks() {
    let outcome = engine().run("", &langs(&["python"])).unwrap();

    let expected = r#"repos:
- repo: https://github.com/gitleaks/gitleaks
  rev: v8.16.3
  hooks:
  - id: gitleaks
- repo: https://github.com/pre-commit/pre-commit-hooks
  rev: v4.4.0
  hooks:
  - id: end-of-file-fixer
  - id: trailing-whitespace
- repo: https://github.com/psf/black
  rev: 22.10.0
  hooks:
  - id: black
"#;
    assert_eq!(outcome.final_text, expected);
    assert!(outcome.changed);
    assert_eq!(outcome.original, "");
}

#[test]
fn test_fully_satisfied_document_is_unchanged() {
    let outcome = engine().run(PRECOMMIT_WITH_COMMON, &[]).unwrap();

    assert!(!outcome.changed);
    assert_eq!(outcome.final_text, PRECOMMIT_WITH_COMMON);
    assert!(outcome.edits.is_empty());
}

#[test]
fn test_existing_block_gets_missing_hooks_after_anchor() {
    let outcome = engine().run(PRECOMMIT_PARTIAL, &[]).unwrap();

    let expected = r#"repos:
- repo: https://github.com/pre-commit/pre-commit-hooks
  rev: v4.4.0
  hooks:
  - id: check-yaml
  - id: end-of-file-fixer
  - id: trailing-whitespace

- repo: https://github.com/gitleaks/gitleaks
  rev: v8.16.3
  hooks:
  - id: gitleaks
"#;
    assert_eq!(outcome.final_text, expected);
    assert!(outcome.changed);
}

#[test]
fn test_styled_document_keeps_comments_and_following_sections() {
    let outcome = engine()
        .run(PRECOMMIT_STYLED, &langs(&["python", "go"]))
        .unwrap();

    let expected = r#"# Lint everything before commit
default_stages: [commit]

repos:
    # Formatting
    -   repo: https://github.com/psf/black
        rev: 22.10.0
        hooks:
            -   id: black
                language_version: python3
    - repo: https://github.com/gitleaks/gitleaks
      rev: v8.16.3
      hooks:
            - id: gitleaks
    - repo: https://github.com/golangci/golangci-lint
      rev: v1.52.2
      hooks:
            - id: golangci-lint
    - repo: https://github.com/pre-commit/pre-commit-hooks
      rev: v4.4.0
      hooks:
            - id: end-of-file-fixer
            - id: trailing-whitespace

ci:
    autofix_prs: true
"#;
    assert_eq!(outcome.final_text, expected);
}

#[test]
fn test_detection_order_does_not_change_output() {
    let a = engine()
        .run(PRECOMMIT_WITH_COMMON, &langs(&["go", "python", "javascript"]))
        .unwrap();
    let b = engine()
        .run(PRECOMMIT_WITH_COMMON, &langs(&["javascript", "go", "python"]))
        .unwrap();
    assert_eq!(a.final_text, b.final_text);
}

#[test]
fn test_languages_sharing_a_repo_produce_one_block() {
    let outcome = engine()
        .run(PRECOMMIT_WITH_COMMON, &langs(&["ruby", "shell"]))
        .unwrap();

    let expected = format!(
        "{PRECOMMIT_WITH_COMMON}\n- repo: {JUMANJI}\n  rev: 3.0.0\n  hooks:\n  - id: rubocop\n  - id: shellcheck\n  - id: shfmt\n"
    );
    assert_eq!(outcome.final_text, expected);
}

#[test]
fn test_first_hook_present_satisfies_language() {
    let input = format!(
        "{PRECOMMIT_WITH_COMMON}- repo: {JUMANJI}\n  rev: 3.0.0\n  hooks:\n  - id: shellcheck\n"
    );
    let outcome = engine().run(&input, &langs(&["shell"])).unwrap();

    assert!(!outcome.changed);
    assert!(!outcome.final_text.contains("shfmt"));
}

#[test]
fn test_hook_declared_under_other_repo_is_not_duplicated() {
    let input = "repos:\n- repo: local\n  hooks:\n  - id: gitleaks\n  - id: end-of-file-fixer\n  - id: trailing-whitespace\n";
    let outcome = engine().run(input, &[]).unwrap();

    assert!(!outcome.changed);
    assert_eq!(outcome.final_text, input);
}

#[test]
fn test_unsupported_language_only_adds_common() {
    let outcome = engine()
        .run(PRECOMMIT_WITH_COMMON, &langs(&["cobol"]))
        .unwrap();
    assert!(!outcome.changed);
}

#[test]
fn test_flow_style_hooks_is_structure_error() {
    let input = "repos:\n- repo: https://github.com/pre-commit/pre-commit-hooks\n  rev: v4.4.0\n  hooks: [{id: check-yaml}]\n";
    let err = engine().run(input, &[]).unwrap_err();
    assert!(matches!(err, Error::StructureError { .. }), "got {err:?}");
}

#[test]
fn test_invalid_yaml_is_parse_error() {
    let err = engine()
        .run("repos:\n- repo: x\n  hooks: [\n", &[])
        .unwrap_err();
    assert!(matches!(err, Error::ParseError { .. }), "got {err:?}");
}

#[test]
fn test_malformed_catalog_is_catalog_error() {
    let err = Catalog::from_yaml_str("hooks:\n  python: [unclosed\n").unwrap_err();
    assert!(matches!(err, Error::CatalogError { .. }));

    let err = Catalog::from_yaml_str("hooks:\n  python: []\n").unwrap_err();
    assert!(matches!(err, Error::CatalogError { .. }));
}

#[rstest]
#[case("")]
#[case("repos:\n")]
#[case("# nothing yet\n")]
#[case(PRECOMMIT_WITH_COMMON)]
#[case(PRECOMMIT_PARTIAL)]
#[case(PRECOMMIT_STYLED)]
fn test_second_run_is_a_fixed_point(#[case] input: &str) {
    let engine = engine();
    let all = langs(&["python", "javascript", "go", "ruby", "shell"]);

    let first = engine.run(input, &all).unwrap();
    let second = engine.run(&first.final_text, &all).unwrap();

    assert!(!second.changed);
    assert_eq!(second.final_text, first.final_text);

    let config = PrecommitConfig::parse(&first.final_text).unwrap();
    let mut ids: Vec<_> = config.hook_ids().collect();
    let total = ids.len();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), total, "hook ids must be unique");
}

#[test]
fn test_wire_request_produces_response() {
    let request: UpdatePrecommitConfigRequest = serde_json::from_str(&format!(
        r#"{{"Content":{},"Languages":["python"]}}"#,
        serde_json::to_string(PRECOMMIT_WITH_COMMON).unwrap()
    ))
    .unwrap();
    let response = engine().update(&request).unwrap();

    assert!(response.is_changed);
    assert_eq!(response.original_input, PRECOMMIT_WITH_COMMON);
    assert!(response.final_output.starts_with(PRECOMMIT_WITH_COMMON));
    assert!(response.final_output.ends_with("  - id: black\n"));
    assert!(!response.configfile_fetch_error);
}

#[test]
fn test_column_zero_list_followed_by_comment() {
    let input = "repos:\n- repo: local\n  hooks:\n  - id: fmt\n# trailing\n";
    let outcome = engine().run(input, &langs(&["python"])).unwrap();

    let expected = r#"repos:
- repo: local
  hooks:
  - id: fmt
# trailing

- repo: https://github.com/gitleaks/gitleaks
  rev: v8.16.3
  hooks:
  - id: gitleaks
- repo: https://github.com/pre-commit/pre-commit-hooks
  rev: v4.4.0
  hooks:
  - id: end-of-file-fixer
  - id: trailing-whitespace
- repo: https://github.com/psf/black
  rev: 22.10.0
  hooks:
  - id: black
"#;
    assert_eq!(outcome.final_text, expected);

    let second = engine().run(&outcome.final_text, &langs(&["python"])).unwrap();
    assert!(!second.changed);
}

#[test]
fn test_column_zero_list_followed_by_root_key() {
    let input = "repos:\n- repo: local\n  hooks:\n  - id: fmt\nci:\n  autofix_prs: true\n";
    let outcome = engine().run(input, &langs(&["python"])).unwrap();

    let expected = r#"repos:
- repo: local
  hooks:
  - id: fmt
- repo: https://github.com/gitleaks/gitleaks
  rev: v8.16.3
  hooks:
  - id: gitleaks
- repo: https://github.com/pre-commit/pre-commit-hooks
  rev: v4.4.0
  hooks:
  - id: end-of-file-fixer
  - id: trailing-whitespace
- repo: https://github.com/psf/black
  rev: 22.10.0
  hooks:
  - id: black
ci:
  autofix_prs: true
"#;
    assert_eq!(outcome.final_text, expected);

    let second = engine().run(&outcome.final_text, &langs(&["python"])).unwrap();
    assert!(!second.changed);
}

#[test]
fn test_crlf_document_keeps_crlf() {
    let input = "repos:\r\n- repo: local\r\n  hooks:\r\n  - id: fmt\r\n";
    let outcome = engine().run(input, &langs(&["python"])).unwrap();

    let expected = r#"repos:
- repo: local
  hooks:
  - id: fmt

- repo: https://github.com/gitleaks/gitleaks
  rev: v8.16.3
  hooks:
  - id: gitleaks
- repo: https://github.com/pre-commit/pre-commit-hooks
  rev: v4.4.0
  hooks:
  - id: end-of-file-fixer
  - id: trailing-whitespace
- repo: https://github.com/psf/black
  rev: 22.10.0
  hooks:
  - id: black
"#
    .replace('\n', "\r\n");
    assert_eq!(outcome.final_text, expected);

    let second = engine().run(&outcome.final_text, &langs(&["python"])).unwrap();
    assert!(!second.changed);
}
