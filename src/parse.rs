//! Markup parsing behind a narrow interface.
//!
//! The converter's algorithm is specified purely in terms of the node
//! model in [`crate::node`]; which parsing library produces that tree is
//! an injected capability. [`HtmlParser`] is the default implementation,
//! built on html5ever. Because html5ever is error-recovering it produces
//! a tree for any input, so the infallible [`HtmlParser::parse_document`]
//! entry point exists alongside the fallible trait method.

use html5ever::tendril::{StrTendril, TendrilSink};
use html5ever::{parse_document, ParseOpts};
use markup5ever_rcdom::{Handle, NodeData, RcDom};
use smallvec::SmallVec;

use crate::error::DeltaResult;
use crate::node::{Document, Element, Node, Text};

/// The injected parsing capability: markup string in, node tree out.
///
/// Implementations may reject input; the built-in [`HtmlParser`] never
/// does.
pub trait MarkupParser {
    /// Parse a markup string into a body-rooted document tree.
    fn parse(&self, html: &str) -> DeltaResult<Document>;
}

/// Default parser backed by html5ever.
///
/// The full document tree (`html > head/body`) that html5ever constructs
/// is walked once to locate the body; only the body's children enter the
/// node model. Comments, doctypes and processing instructions are
/// dropped. Tag names and attribute names arrive lowercase from
/// html5ever's HTML tokenizer.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlParser;

impl HtmlParser {
    /// Parse a markup string. Never fails: html5ever recovers from any
    /// malformed input, and empty input yields an empty document.
    pub fn parse_document(&self, html: &str) -> Document {
        let dom = parse_document(RcDom::default(), ParseOpts::default())
            .one(StrTendril::from(html));

        match find_body(&dom.document) {
            Some(body) => Document::new(convert_children(&body).into_vec()),
            None => Document::default(),
        }
    }
}

impl MarkupParser for HtmlParser {
    fn parse(&self, html: &str) -> DeltaResult<Document> {
        Ok(self.parse_document(html))
    }
}

/// Locate the `<body>` element html5ever always synthesizes.
fn find_body(handle: &Handle) -> Option<Handle> {
    if let NodeData::Element { ref name, .. } = handle.data {
        if name.local.as_ref() == "body" {
            return Some(handle.clone());
        }
    }
    handle.children.borrow().iter().find_map(find_body)
}

/// Convert an rcdom node's children into the crate's node model.
fn convert_children(handle: &Handle) -> SmallVec<[Node; 8]> {
    handle
        .children
        .borrow()
        .iter()
        .filter_map(convert_node)
        .collect()
}

/// Convert one rcdom node. Returns `None` for node kinds the model does
/// not carry (comments, doctypes, processing instructions).
fn convert_node(handle: &Handle) -> Option<Node> {
    match handle.data {
        NodeData::Text { ref contents } => {
            Some(Node::Text(Text::new(contents.borrow().to_string())))
        }
        NodeData::Element {
            ref name,
            ref attrs,
            ..
        } => {
            let mut element = Element::new(name.local.as_ref());
            element.attrs = attrs
                .borrow()
                .iter()
                .map(|a| (a.name.local.to_string(), a.value.to_string()))
                .collect();
            element.children = convert_children(handle);
            Some(Node::element(element))
        }
        _ => None,
    }
}
