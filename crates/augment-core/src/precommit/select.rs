//! Decides which hooks are missing from a pre-commit config

use std::collections::{BTreeMap, BTreeSet};
use tracing::debug;

use super::model::{Hook, PrecommitConfig, Repo};
use crate::catalog::Catalog;

/// Hook ids already declared, or already staged for addition.
///
/// Each step of the selection consumes the previous set and returns the
/// next one; nothing is shared between steps.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Present(BTreeSet<String>);

impl Present {
    /// Ids declared anywhere in the document, regardless of owning repo
    pub fn from_config(config: &PrecommitConfig) -> Self {
        Self(config.hook_ids().map(str::to_owned).collect())
    }

    pub fn contains(&self, id: &str) -> bool {
        self.0.contains(id)
    }

    /// This set extended with `ids`
    #[must_use]
    pub fn with<'a>(mut self, ids: impl IntoIterator<Item = &'a str>) -> Self {
        self.0.extend(ids.into_iter().map(str::to_owned));
        self
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Staged blocks keyed by repo URL, so iteration is sorted by key
#[derive(Debug, Default)]
struct Staged(BTreeMap<String, Repo>);

impl Staged {
    fn stage(&mut self, template: &Repo, hooks: Vec<Hook>) {
        match self.0.get_mut(&template.repo) {
            Some(existing) => existing.hooks.extend(hooks),
            None => {
                let mut repo = template.clone();
                repo.hooks = hooks;
                self.0.insert(template.repo.clone(), repo);
            }
        }
    }
}

/// Keep the hooks of `hooks` not yet in `present`, dropping repeats within the list
fn missing(present: Present, hooks: &[Hook]) -> (Vec<Hook>, Present) {
    hooks
        .iter()
        .fold((Vec::new(), present), |(mut kept, seen), hook| {
            if seen.contains(&hook.id) {
                (kept, seen)
            } else {
                kept.push(hook.clone());
                let seen = seen.with([hook.id.as_str()]);
                (kept, seen)
            }
        })
}

/// Compute the repo blocks to add, sorted by repo URL.
///
/// For each language in order, the catalog's block for it is staged unless
/// its first hook is already present; an attribute is considered satisfied
/// as soon as that first hook exists. Hooks of a staged block that already
/// exist elsewhere are left out so no id is ever declared twice. Blocks with
/// the same repo URL are merged. The catalog's `common` blocks are staged
/// last, hook by hook.
pub fn select(config: &PrecommitConfig, languages: &[String], catalog: &Catalog) -> Vec<Repo> {
    let mut present = Present::from_config(config);
    let mut staged = Staged::default();

    for language in languages {
        let Some(template) = catalog.entry(language) else {
            debug!(language = %language, "No catalog entry, skipping");
            continue;
        };
        let Some(first) = template.hooks.first() else {
            continue;
        };
        if present.contains(&first.id) {
            debug!(language = %language, hook = %first.id, "Already satisfied");
            continue;
        }

        let (hooks, next) = missing(present, &template.hooks);
        debug!(language = %language, repo = %template.repo, hooks = hooks.len(), "Staging repo");
        staged.stage(template, hooks);
        present = next;
    }

    for template in catalog.common() {
        let (hooks, next) = missing(present, &template.hooks);
        present = next;
        if hooks.is_empty() {
            continue;
        }
        debug!(repo = %template.repo, hooks = hooks.len(), "Staging common repo");
        staged.stage(template, hooks);
    }

    staged.0.into_values().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn catalog() -> Catalog {
        let mut entries = BTreeMap::new();
        entries.insert(
            "python".to_string(),
            vec![Repo::new("https://github.com/psf/black", "22.10.0", vec![Hook::new("black")])],
        );
        entries.insert(
            "shell".to_string(),
            vec![Repo::new(
                "https://github.com/jumanjihouse/pre-commit-hooks",
                "3.0.0",
                vec![Hook::new("shellcheck"), Hook::new("shfmt")],
            )],
        );
        entries.insert(
            "ruby".to_string(),
            vec![Repo::new(
                "https://github.com/jumanjihouse/pre-commit-hooks",
                "3.0.0",
                vec![Hook::new("rubocop")],
            )],
        );
        Catalog::from_entries(entries).unwrap()
    }

    fn langs(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn present_with_extends_set() {
        let base = Present::default();
        assert!(base.is_empty());

        let next = base.with(["a", "b"]).with(["b"]);
        assert_eq!(next.len(), 2);
        assert!(next.contains("a"));
        assert!(!next.contains("c"));
    }

    #[test]
    fn staged_hooks_are_deduplicated_within_a_block() {
        let template = [Hook::new("a"), Hook::new("b"), Hook::new("a")];
        let present = Present::default().with(["b"]);

        let (kept, next) = missing(present, &template);
        assert_eq!(kept, vec![Hook::new("a")]);
        assert_eq!(next.len(), 2);
    }

    #[test]
    fn unsupported_language_is_skipped() {
        let staged = select(&PrecommitConfig::default(), &langs(&["cobol"]), &catalog());
        assert!(staged.is_empty());
    }

    #[test]
    fn blocks_with_same_repo_are_merged() {
        let staged = select(
            &PrecommitConfig::default(),
            &langs(&["ruby", "shell"]),
            &catalog(),
        );
        assert_eq!(staged.len(), 1);
        let ids: Vec<_> = staged[0].hooks.iter().map(|h| h.id.as_str()).collect();
        assert_eq!(ids, vec!["rubocop", "shellcheck", "shfmt"]);
    }

    #[test]
    fn first_hook_present_satisfies_attribute() {
        let config = PrecommitConfig::new(vec![Repo::new(
            "https://github.com/jumanjihouse/pre-commit-hooks",
            "3.0.0",
            vec![Hook::new("shellcheck")],
        )]);
        let staged = select(&config, &langs(&["shell"]), &catalog());
        assert!(staged.is_empty(), "shfmt is not individually checked");
    }

    #[test]
    fn later_hooks_already_present_are_not_duplicated() {
        let config = PrecommitConfig::new(vec![Repo::new(
            "local",
            "",
            vec![Hook::new("shfmt")],
        )]);
        let staged = select(&config, &langs(&["shell"]), &catalog());
        assert_eq!(staged.len(), 1);
        assert_eq!(staged[0].hooks, vec![Hook::new("shellcheck")]);
    }

    #[test]
    fn output_sorted_by_repo_regardless_of_detection_order() {
        let a = select(&PrecommitConfig::default(), &langs(&["shell", "python"]), &catalog());
        let b = select(&PrecommitConfig::default(), &langs(&["python", "shell"]), &catalog());
        let keys = |r: &[Repo]| r.iter().map(|r| r.repo.clone()).collect::<Vec<_>>();
        assert_eq!(keys(&a), keys(&b));
        assert_eq!(
            keys(&a),
            vec![
                "https://github.com/jumanjihouse/pre-commit-hooks".to_string(),
                "https://github.com/psf/black".to_string(),
            ]
        );
    }
}
