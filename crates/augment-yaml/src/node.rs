//! Read-only YAML node tree with source positions

use serde::{Deserialize, Serialize};

/// Scalar spellings that YAML resolves to null
const NULL_SPELLINGS: &[&str] = &["", "~", "null", "Null", "NULL"];

/// Source position of a node as the parser encountered it.
///
/// `line` and `column` are 1-based; `index` is the character offset from the
/// start of the input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mark {
    pub line: usize,
    pub column: usize,
    pub index: usize,
}

/// Structural tag of a node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NodeKind {
    Mapping,
    Sequence,
    Scalar,
    Alias,
}

/// Whether a collection was written in block (indented) or flow (`[]`/`{}`) style
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CollectionStyle {
    #[default]
    Block,
    Flow,
}

/// A node of the parsed document.
///
/// Mapping children alternate key, value. Sequence children are the items in
/// order. Scalars carry their resolved text in `value`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionedNode {
    pub kind: NodeKind,
    pub style: CollectionStyle,
    pub mark: Mark,
    pub value: Option<String>,
    pub children: Vec<PositionedNode>,
}

impl PositionedNode {
    pub(crate) fn scalar(value: String, mark: Mark) -> Self {
        Self {
            kind: NodeKind::Scalar,
            style: CollectionStyle::Block,
            mark,
            value: Some(value),
            children: Vec::new(),
        }
    }

    pub(crate) fn alias(mark: Mark) -> Self {
        Self {
            kind: NodeKind::Alias,
            style: CollectionStyle::Block,
            mark,
            value: None,
            children: Vec::new(),
        }
    }

    pub(crate) fn collection(kind: NodeKind, style: CollectionStyle, mark: Mark) -> Self {
        Self {
            kind,
            style,
            mark,
            value: None,
            children: Vec::new(),
        }
    }

    pub fn is_mapping(&self) -> bool {
        self.kind == NodeKind::Mapping
    }

    pub fn is_sequence(&self) -> bool {
        self.kind == NodeKind::Sequence
    }

    pub fn is_block(&self) -> bool {
        self.style == CollectionStyle::Block
    }

    /// True for scalars that resolve to null, including an absent value (`key:`)
    pub fn is_null(&self) -> bool {
        self.kind == NodeKind::Scalar
            && self
                .value
                .as_deref()
                .is_some_and(|v| NULL_SPELLINGS.contains(&v))
    }

    /// Scalar text, `None` for collections and aliases
    pub fn as_str(&self) -> Option<&str> {
        match self.kind {
            NodeKind::Scalar => self.value.as_deref(),
            _ => None,
        }
    }

    /// Number of spaces preceding this node on its line
    pub fn indent(&self) -> usize {
        self.mark.column.saturating_sub(1)
    }

    /// 0-based index of the line this node starts on
    pub fn line_index(&self) -> usize {
        self.mark.line.saturating_sub(1)
    }

    /// Key/value pairs of a mapping. Empty for any other kind.
    pub fn entries(&self) -> impl Iterator<Item = (&PositionedNode, &PositionedNode)> {
        let pairs: &[PositionedNode] = if self.is_mapping() {
            self.children.as_slice()
        } else {
            &[]
        };
        pairs.chunks_exact(2).map(|pair| (&pair[0], &pair[1]))
    }

    /// Items of a sequence. Empty for any other kind.
    pub fn items(&self) -> &[PositionedNode] {
        if self.is_sequence() {
            &self.children
        } else {
            &[]
        }
    }

    /// Look up a mapping entry by scalar key, returning the key node and its value
    pub fn entry(&self, key: &str) -> Option<(&PositionedNode, &PositionedNode)> {
        self.entries().find(|(k, _)| k.as_str() == Some(key))
    }

    /// Look up a mapping value by scalar key
    pub fn get(&self, key: &str) -> Option<&PositionedNode> {
        self.entry(key).map(|(_, value)| value)
    }

    /// True if `key` names the last entry of this mapping
    pub fn is_last_key(&self, key: &str) -> bool {
        self.entries()
            .last()
            .is_some_and(|(k, _)| k.as_str() == Some(key))
    }

    /// Depth-first pre-order walk over this node and all descendants
    pub fn walk(&self) -> Walk<'_> {
        Walk { stack: vec![self] }
    }
}

/// Iterator returned by [`PositionedNode::walk`]
pub struct Walk<'a> {
    stack: Vec<&'a PositionedNode>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = &'a PositionedNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}

/// The first document of a YAML stream
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PositionedDocument {
    pub(crate) root: Option<PositionedNode>,
}

impl PositionedDocument {
    /// Root node, `None` for empty or comment-only input
    pub fn root(&self) -> Option<&PositionedNode> {
        self.root.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    fn walk(&self) -> impl Iterator<Item = &PositionedNode> {
        self.root.iter().flat_map(PositionedNode::walk)
    }

    /// First scalar, in document order, whose text equals `value`
    pub fn find_scalar(&self, value: &str) -> Option<&PositionedNode> {
        self.walk().find(|node| node.as_str() == Some(value))
    }

    /// First sequence, in document order, that is the value of a mapping key named `key`
    pub fn find_sequence_under(&self, key: &str) -> Option<&PositionedNode> {
        self.walk()
            .filter_map(|node| node.get(key))
            .find(|value| value.is_sequence())
    }

    /// First mapping, in document order, holding the entry `key: value`
    pub fn find_mapping_with(&self, key: &str, value: &str) -> Option<&PositionedNode> {
        self.walk()
            .find(|node| node.get(key).and_then(PositionedNode::as_str) == Some(value))
    }
}
