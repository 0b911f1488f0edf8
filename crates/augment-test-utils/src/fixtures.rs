//! Catalog and manifest texts.
//!
//! The catalog mirrors the shape of a real recommendations file: one repo per
//! language plus a `common` list applied to every project.

pub const BLACK: &str = "https://github.com/psf/black";
pub const ESLINT: &str = "https://github.com/pre-commit/mirrors-eslint";
pub const GOLANGCI: &str = "https://github.com/golangci/golangci-lint";
pub const GITLEAKS: &str = "https://github.com/gitleaks/gitleaks";
pub const PRECOMMIT_HOOKS: &str = "https://github.com/pre-commit/pre-commit-hooks";
pub const JUMANJI: &str = "https://github.com/jumanjihouse/pre-commit-hooks";

/// Languages the catalog knows, plus one it does not
pub const LANGUAGES: &[&str] = &["python", "javascript", "go", "ruby", "shell", "cobol"];

pub const CATALOG: &str = r#"hooks:
  python:
  - repo: https://github.com/psf/black
    rev: 22.10.0
    hooks:
    - id: black
  javascript:
  - repo: https://github.com/pre-commit/mirrors-eslint
    rev: v8.38.0
    hooks:
    - id: eslint
  go:
  - repo: https://github.com/golangci/golangci-lint
    rev: v1.52.2
    hooks:
    - id: golangci-lint
  ruby:
  - repo: https://github.com/jumanjihouse/pre-commit-hooks
    rev: 3.0.0
    hooks:
    - id: rubocop
  shell:
  - repo: https://github.com/jumanjihouse/pre-commit-hooks
    rev: 3.0.0
    hooks:
    - id: shellcheck
    - id: shfmt
  common:
  - repo: https://github.com/gitleaks/gitleaks
    rev: v8.16.3
    hooks:
    - id: gitleaks
  - repo: https://github.com/pre-commit/pre-commit-hooks
    rev: v4.4.0
    hooks:
    - id: end-of-file-fixer
    - id: trailing-whitespace
"#;

/// A config that already carries every `common` hook
pub const PRECOMMIT_WITH_COMMON: &str = r#"# See https://pre-commit.com for more information
repos:
- repo: https://github.com/gitleaks/gitleaks
  rev: v8.16.3
  hooks:
  - id: gitleaks
- repo: https://github.com/pre-commit/pre-commit-hooks
  rev: v4.4.0
  hooks:
  - id: end-of-file-fixer
  - id: trailing-whitespace
"#;

/// A config whose pre-commit-hooks block lacks the recommended hooks
pub const PRECOMMIT_PARTIAL: &str = r#"repos:
- repo: https://github.com/pre-commit/pre-commit-hooks
  rev: v4.4.0
  hooks:
  - id: check-yaml
"#;

/// Deeper indentation, comments, and a trailing section after `repos`
pub const PRECOMMIT_STYLED: &str = r#"# Lint everything before commit
default_stages: [commit]

repos:
    # Formatting
    -   repo: https://github.com/psf/black
        rev: 22.10.0
        hooks:
            -   id: black
                language_version: python3

ci:
    autofix_prs: true
"#;

/// Every fixture config, for property tests
pub const PRECOMMIT_CONFIGS: &[&str] = &[
    "",
    "repos:\n",
    "# nothing yet\n",
    PRECOMMIT_WITH_COMMON,
    PRECOMMIT_PARTIAL,
    PRECOMMIT_STYLED,
];

pub const DEPENDABOT_NPM_APP: &str = r#"version: 2
updates:
  - package-ecosystem: npm
    directory: /app
    schedule:
      interval: daily
"#;

pub const DEPENDABOT_WITH_ACTIONS: &str = r#"version: 2
updates:
  - package-ecosystem: github-actions
    directory: /
    schedule:
      interval: daily
"#;

pub const DEPENDABOT_PIP: &str = r#"# Managed by platform team
version: 2
updates:
- package-ecosystem: pip
  directory: /
  schedule:
    interval: weekly
"#;
