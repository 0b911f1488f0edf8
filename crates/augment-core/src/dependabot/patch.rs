//! Splices staged update entries into dependabot config text

use augment_yaml::lines::indented;

use super::model::ROOT_KEY;
use crate::error::Result;
use crate::splice::{BlockIndent, DEFAULT_INDENT, Layout, Patched, Splicer};
use crate::wire::Ecosystem;

const LAYOUT: Layout = Layout {
    root_key: ROOT_KEY,
    empty_document: "version: 2\nupdates:",
    empty_list_indent: DEFAULT_INDENT,
    items_key: None,
};

fn update_lines(ecosystem: &Ecosystem, indent: BlockIndent) -> Vec<String> {
    vec![
        indented(
            indent.dash,
            format!("- package-ecosystem: {}", ecosystem.package_ecosystem),
        ),
        indented(indent.field, format!("directory: {}", ecosystem.directory)),
        indented(indent.field, "schedule:"),
        indented(
            indent.field + DEFAULT_INDENT,
            format!("interval: {}", ecosystem.interval),
        ),
    ]
}

/// Append every staged update to `raw`, in order.
///
/// Every update entry is its own block, so each staged ecosystem becomes a
/// new block at the end of the `updates` list.
pub fn apply(raw: &str, staged: &[Ecosystem]) -> Result<Patched> {
    if staged.is_empty() {
        return Ok(Patched::unchanged(raw));
    }
    let mut splicer = Splicer::new(raw, LAYOUT);
    for ecosystem in staged {
        let key = ecosystem.key().to_string();
        splicer.append_block(&key, |indent| update_lines(ecosystem, indent))?;
    }
    Ok(splicer.finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_document_gets_version_and_updates() {
        let patched = apply("", &[Ecosystem::new("github-actions", "/", "daily")]).unwrap();
        assert_eq!(
            patched.text,
            "version: 2\nupdates:\n  - package-ecosystem: github-actions\n    directory: /\n    schedule:\n      interval: daily\n"
        );
        assert!(patched.changed);
    }
}
