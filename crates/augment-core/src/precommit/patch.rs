//! Splices staged repo blocks into pre-commit config text

use augment_yaml::lines::indented;
use std::collections::BTreeSet;

use super::model::{BLOCK_KEY, Hook, ITEMS_KEY, PrecommitConfig, ROOT_KEY, Repo};
use crate::error::Result;
use crate::splice::{BlockIndent, Layout, Patched, Splicer};

const LAYOUT: Layout = Layout {
    root_key: ROOT_KEY,
    empty_document: "repos:",
    empty_list_indent: 0,
    items_key: Some(ITEMS_KEY),
};

fn hook_lines(indent: usize, hooks: &[Hook]) -> Vec<String> {
    hooks
        .iter()
        .map(|hook| indented(indent, format!("- id: {}", hook.id)))
        .collect()
}

fn block_lines(repo: &Repo, indent: BlockIndent) -> Vec<String> {
    let mut lines = vec![indented(indent.dash, format!("- repo: {}", repo.repo))];
    if !repo.rev.is_empty() {
        lines.push(indented(indent.field, format!("rev: {}", repo.rev)));
    }
    lines.push(indented(indent.field, "hooks:"));
    lines.extend(hook_lines(indent.item, &repo.hooks));
    lines
}

/// Applies staged repos one at a time.
///
/// Edits are not atomic across a batch: after a failed [`Patcher::apply`],
/// [`Patcher::text`] still holds every edit that succeeded before it.
pub struct Patcher {
    splicer: Splicer,
    existing: BTreeSet<String>,
}

impl Patcher {
    /// `config` is the typed view of `raw`; it decides which repos already exist.
    pub fn new(raw: &str, config: &PrecommitConfig) -> Self {
        Self {
            splicer: Splicer::new(raw, LAYOUT),
            existing: config.repos().iter().map(|r| r.repo.clone()).collect(),
        }
    }

    /// Add one staged repo: extend the existing block or append a new one
    pub fn apply(&mut self, repo: &Repo) -> Result<()> {
        if self.existing.contains(&repo.repo) {
            self.splicer
                .extend_block(BLOCK_KEY, &repo.repo, ITEMS_KEY, |indent| {
                    hook_lines(indent, &repo.hooks)
                })
        } else {
            self.splicer
                .append_block(&repo.repo, |indent| block_lines(repo, indent))
        }
    }

    /// Text with every edit applied so far
    pub fn text(&self) -> String {
        self.splicer.text()
    }

    pub fn finish(self) -> Patched {
        self.splicer.finish()
    }
}

/// Apply every staged repo to `raw`, in order.
///
/// With nothing staged the text is returned untouched and unchanged.
pub fn apply(raw: &str, config: &PrecommitConfig, staged: &[Repo]) -> Result<Patched> {
    if staged.is_empty() {
        return Ok(Patched::unchanged(raw));
    }
    let mut patcher = Patcher::new(raw, config);
    for repo in staged {
        patcher.apply(repo)?;
    }
    Ok(patcher.finish())
}
