//! Builds a [`PositionedDocument`] from the yaml-rust2 marked event stream

use yaml_rust2::parser::{Event, MarkedEventReceiver, Parser};
use yaml_rust2::scanner::Marker;

use crate::error::{Error, Result};
use crate::node::{CollectionStyle, Mark, NodeKind, PositionedDocument, PositionedNode};

/// Parse the first document of `source` into a position-annotated tree.
///
/// Empty and comment-only input yields a document without a root.
///
/// # Example
/// ```
/// let doc = augment_yaml::parse("repos:\n- repo: local\n").unwrap();
/// let repos = doc.root().unwrap().get("repos").unwrap();
/// assert_eq!(repos.mark.line, 2);
/// assert_eq!(repos.mark.column, 1);
/// ```
pub fn parse(source: &str) -> Result<PositionedDocument> {
    let mut builder = TreeBuilder::new(source);
    let mut parser = Parser::new_from_str(source);
    parser.load(&mut builder, false).map_err(|e| {
        let marker = e.marker();
        Error::parse(marker.line(), marker.col() + 1, e.info())
    })?;
    Ok(PositionedDocument { root: builder.root })
}

struct TreeBuilder {
    chars: Vec<char>,
    open: Vec<PositionedNode>,
    root: Option<PositionedNode>,
}

impl TreeBuilder {
    fn new(source: &str) -> Self {
        Self {
            chars: source.chars().collect(),
            open: Vec::new(),
            root: None,
        }
    }

    fn style_at(&self, index: usize, open: char) -> CollectionStyle {
        if self.chars.get(index) == Some(&open) {
            CollectionStyle::Flow
        } else {
            CollectionStyle::Block
        }
    }

    /// Move a block sequence's mark onto its first `-`.
    ///
    /// A sequence whose dash sits at its parent key's column is reported at
    /// the first item's content, past the `- `.
    fn dash_mark(&self, mark: Mark) -> Mark {
        if self.is_entry_indicator(mark.index) {
            return mark;
        }
        let mut index = mark.index;
        while index > 0 && self.chars.get(index - 1) == Some(&' ') {
            index -= 1;
        }
        match index.checked_sub(1) {
            Some(dash) if self.is_entry_indicator(dash) => Mark {
                line: mark.line,
                column: mark.column.saturating_sub(mark.index - dash),
                index: dash,
            },
            _ => mark,
        }
    }

    /// A `-` followed by whitespace or end of input
    fn is_entry_indicator(&self, index: usize) -> bool {
        self.chars.get(index) == Some(&'-')
            && self
                .chars
                .get(index + 1)
                .is_none_or(|c| c.is_whitespace())
    }

    fn attach(&mut self, node: PositionedNode) {
        match self.open.last_mut() {
            Some(parent) => parent.children.push(node),
            None => {
                if self.root.is_none() {
                    self.root = Some(node);
                }
            }
        }
    }
}

impl MarkedEventReceiver for TreeBuilder {
    fn on_event(&mut self, event: Event, marker: Marker) {
        let mark = Mark {
            line: marker.line(),
            column: marker.col() + 1,
            index: marker.index(),
        };
        match event {
            Event::Scalar(value, ..) => self.attach(PositionedNode::scalar(value, mark)),
            Event::Alias(..) => self.attach(PositionedNode::alias(mark)),
            Event::SequenceStart(..) => {
                let style = self.style_at(mark.index, '[');
                let mark = match style {
                    CollectionStyle::Block => self.dash_mark(mark),
                    CollectionStyle::Flow => mark,
                };
                self.open
                    .push(PositionedNode::collection(NodeKind::Sequence, style, mark));
            }
            Event::MappingStart(..) => {
                let style = self.style_at(mark.index, '{');
                self.open
                    .push(PositionedNode::collection(NodeKind::Mapping, style, mark));
            }
            Event::SequenceEnd | Event::MappingEnd => {
                if let Some(node) = self.open.pop() {
                    self.attach(node);
                }
            }
            _ => {}
        }
    }
}
