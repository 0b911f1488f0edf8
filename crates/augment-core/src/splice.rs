//! Shared text surgery for manifest patchers.
//!
//! A [`Splicer`] owns the working text. Every operation re-parses that text
//! to get fresh positions, computes an anchor, and rebuilds the line list.
//! The parsed tree is never edited. Work happens on `\n`-terminated text;
//! a CRLF document is normalized on the way in and restored on the way out.

use augment_yaml::lines::{self, LineEnding, item_extent_end};
use augment_yaml::{Edit, PositionedDocument, PositionedNode};
use tracing::debug;

use crate::error::{Error, Result};

/// Width used when the document offers nothing to infer indentation from
pub(crate) const DEFAULT_INDENT: usize = 2;

/// How a manifest variant lays out its list of blocks
#[derive(Debug, Clone, Copy)]
pub(crate) struct Layout {
    /// Root key holding the list of blocks
    pub root_key: &'static str,
    /// Text that replaces an empty document
    pub empty_document: &'static str,
    /// Dash column, relative to the root key, when the root key has no list yet
    pub empty_list_indent: usize,
    /// Key of the nested item list inside each block, if the variant has one
    pub items_key: Option<&'static str>,
}

/// Columns for the lines of a newly appended block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct BlockIndent {
    /// Column of the block's `-`
    pub dash: usize,
    /// Column of the block's own fields
    pub field: usize,
    /// Column of the `-` of nested items
    pub item: usize,
}

enum Placement {
    End,
    After(usize),
}

/// Result of patching a document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Patched {
    /// The new document text
    pub text: String,
    /// True if at least one edit was applied
    pub changed: bool,
    /// Edits in the order they were applied
    pub edits: Vec<Edit>,
}

impl Patched {
    pub fn unchanged(raw: &str) -> Self {
        Self {
            text: raw.to_string(),
            changed: false,
            edits: Vec::new(),
        }
    }
}

pub(crate) struct Splicer {
    layout: Layout,
    ending: LineEnding,
    text: String,
    edits: Vec<Edit>,
    appended: bool,
}

impl Splicer {
    /// Start from `raw`; an empty document is replaced by the layout's minimal root
    pub fn new(raw: &str, layout: Layout) -> Self {
        let mut edits = Vec::new();
        let ending = LineEnding::detect(raw);
        let text = if raw.is_empty() {
            edits.push(Edit::root(layout.empty_document));
            layout.empty_document.to_string()
        } else {
            ending.normalize(raw)
        };
        Self {
            layout,
            ending,
            text,
            edits,
            appended: false,
        }
    }

    /// The working text, in the document's own line endings
    pub fn text(&self) -> String {
        self.ending.restore(&self.text)
    }

    fn parse(&self) -> Result<PositionedDocument> {
        Ok(augment_yaml::parse(&self.text)?)
    }

    fn has_root_key(&self, doc: &PositionedDocument) -> Result<bool> {
        match doc.root() {
            None => Ok(false),
            Some(root) if root.is_mapping() => Ok(root.get(self.layout.root_key).is_some()),
            Some(_) => Err(Error::structure(
                self.layout.root_key,
                "document root is not a mapping",
            )),
        }
    }

    fn push_root_line(&mut self) {
        let line = format!("{}:", self.layout.root_key);
        debug!(root = self.layout.root_key, "Adding missing root key");
        if !self.text.is_empty() && !self.text.ends_with('\n') {
            self.text.push('\n');
        }
        self.text.push_str(&line);
        self.edits.push(Edit::root(line));
    }

    /// Append a new block to the root list.
    ///
    /// The block lands at the end of the text when the root key is the last
    /// root entry, otherwise right after the list's last item.
    pub fn append_block(
        &mut self,
        key: &str,
        render: impl FnOnce(BlockIndent) -> Vec<String>,
    ) -> Result<()> {
        let mut doc = self.parse()?;
        if !self.has_root_key(&doc)? {
            self.push_root_line();
            doc = self.parse()?;
        }
        let root_key = self.layout.root_key;
        let Some((key_node, list)) = doc.root().and_then(|root| root.entry(root_key)) else {
            return Err(Error::structure(root_key, "root key not found after insertion"));
        };
        let is_last = doc.root().is_some_and(|root| root.is_last_key(root_key));

        let mut text_lines = lines::split(&self.text);
        let (dash, placement) = if list.is_sequence() {
            if !list.is_block() {
                return Err(Error::structure(
                    root_key,
                    "flow-style list cannot be extended in place",
                ));
            }
            let dash = list.indent();
            let placement = match list.items().last() {
                Some(last) if !is_last => {
                    Placement::After(item_extent_end(&text_lines, last.line_index(), dash))
                }
                _ => Placement::End,
            };
            (dash, placement)
        } else if list.is_null() {
            let placement = if is_last {
                Placement::End
            } else {
                Placement::After(key_node.line_index())
            };
            (key_node.indent() + self.layout.empty_list_indent, placement)
        } else {
            return Err(Error::structure(root_key, "expected a list of blocks"));
        };

        let field = dash + DEFAULT_INDENT;
        let item = self
            .layout
            .items_key
            .and_then(|items_key| doc.find_sequence_under(items_key))
            .filter(|seq| seq.is_block())
            .map_or(field, |seq| seq.indent().max(field));
        let new_lines = render(BlockIndent { dash, field, item });

        let edit = match placement {
            Placement::End => {
                debug!(key, dash, "Appending block at end of document");
                lines::append(&mut text_lines, new_lines.clone());
                self.appended = true;
                Edit::append(new_lines)
            }
            Placement::After(index) => {
                debug!(key, dash, after = index, "Inserting block after last list item");
                lines::insert_after(&mut text_lines, index, new_lines.clone());
                Edit::insert_after(index, new_lines)
            }
        };
        self.text = lines::join(&text_lines);
        self.edits.push(edit);
        Ok(())
    }

    /// Add items to the block whose `block_field` equals `key`.
    ///
    /// The anchor is the block's `items_key` list; new items go right after
    /// its first item, at the list's column.
    pub fn extend_block(
        &mut self,
        block_field: &str,
        key: &str,
        items_key: &str,
        render: impl FnOnce(usize) -> Vec<String>,
    ) -> Result<()> {
        let doc = self.parse()?;
        let block = doc
            .find_mapping_with(block_field, key)
            .ok_or_else(|| Error::structure(key, format!("no block with {block_field}: {key}")))?;
        let anchor = items_anchor(block, key, items_key)?;

        let mut text_lines = lines::split(&self.text);
        let indent = anchor.indent();
        let end = item_extent_end(&text_lines, anchor.line_index(), indent);
        let new_lines = render(indent);
        debug!(key, after = end, indent, "Inserting items into existing block");
        lines::insert_after(&mut text_lines, end, new_lines.clone());

        self.text = lines::join(&text_lines);
        self.edits.push(Edit::insert_after(end, new_lines));
        Ok(())
    }

    pub fn finish(self) -> Patched {
        let mut text = self.text;
        let changed = !self.edits.is_empty();
        if changed && self.appended {
            text.push('\n');
        }
        Patched {
            text: self.ending.restore(&text),
            changed,
            edits: self.edits,
        }
    }
}

fn items_anchor<'a>(
    block: &'a PositionedNode,
    key: &str,
    items_key: &str,
) -> Result<&'a PositionedNode> {
    let items = block.get(items_key).ok_or_else(|| {
        Error::structure(key, format!("declared but '{items_key}' is missing"))
    })?;
    if !items.is_sequence() {
        return Err(Error::structure(
            key,
            format!("declared but '{items_key}' is not a list"),
        ));
    }
    if !items.is_block() {
        return Err(Error::structure(
            key,
            format!("'{items_key}' is a flow-style list and cannot be extended in place"),
        ));
    }
    Ok(items)
}
