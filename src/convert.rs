//! HTML to Delta conversion.
//!
//! The converter walks a parsed markup tree depth-first in document order
//! and appends operations to an output sequence. It is a pure function:
//! no I/O, no state across calls, identical input always yields a
//! byte-identical operation sequence.
//!
//! # Dispatch
//!
//! Each element tag resolves to a [`TagRule`] variant via [`rule_for`];
//! each rule is handled by a small pure function writing into an explicit
//! `&mut Vec<Op>` accumulator. Tags with no rule fall through to generic
//! descent: their children are visited in order and the element itself
//! contributes nothing.
//!
//! # Known limitation
//!
//! Inline rules (`b`/`strong`, `i`/`em`, `u`, `a`) read the element's
//! *flattened* text, so nested inline formatting collapses into a single
//! operation carrying only the outermost tag's attribute:
//! `<b><i>x</i></b>` becomes `{insert: "x", attributes: {bold: true}}`.
//! Combined inline formatting is not representable here.

use crate::delta::{Attributes, Delta, Op};
use crate::error::DeltaResult;
use crate::node::{Document, Element, Node};
use crate::parse::{HtmlParser, MarkupParser};

// =============================================================================
// Tag rules
// =============================================================================

/// Inline formatting applied by a single tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum InlineFormat {
    Bold,
    Italic,
    Underline,
}

impl InlineFormat {
    fn attributes(self) -> Attributes {
        match self {
            InlineFormat::Bold => Attributes::bold(),
            InlineFormat::Italic => Attributes::italic(),
            InlineFormat::Underline => Attributes::underline(),
        }
    }
}

/// How a tag contributes to the output sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TagRule {
    /// `<p>`: flattened text if non-empty, then always a bare newline.
    Paragraph,
    /// `<br>`: a bare newline.
    LineBreak,
    /// `<b>`/`<strong>`/`<i>`/`<em>`/`<u>`: flattened text with one
    /// attribute; nothing if the text is empty.
    Inline(InlineFormat),
    /// `<a>`: flattened text with a link attribute, only when both a
    /// non-empty `href` and non-empty text exist.
    Link,
    /// `<ul>`: recurse into direct `<li>` children only; other direct
    /// children are ignored entirely.
    BulletList,
    /// `<li>`: generic descent into children, then a bullet terminator.
    ListItem,
    /// `<h1>`..`<h6>`: flattened text if non-empty, then always a header
    /// terminator carrying the level.
    Header(u8),
    /// Anything else: descend into children, contribute nothing.
    Descend,
}

/// Resolve a lowercase tag name to its rule.
fn rule_for(tag: &str) -> TagRule {
    match tag {
        "p" => TagRule::Paragraph,
        "br" => TagRule::LineBreak,
        "b" | "strong" => TagRule::Inline(InlineFormat::Bold),
        "i" | "em" => TagRule::Inline(InlineFormat::Italic),
        "u" => TagRule::Inline(InlineFormat::Underline),
        "a" => TagRule::Link,
        "ul" => TagRule::BulletList,
        "li" => TagRule::ListItem,
        "h1" => TagRule::Header(1),
        "h2" => TagRule::Header(2),
        "h3" => TagRule::Header(3),
        "h4" => TagRule::Header(4),
        "h5" => TagRule::Header(5),
        "h6" => TagRule::Header(6),
        _ => TagRule::Descend,
    }
}

// =============================================================================
// Entry points
// =============================================================================

/// Convert a markup string to a [`Delta`] using the built-in parser.
///
/// Never fails: the built-in parser accepts any input, and empty or
/// whitespace-only markup simply yields few or no operations.
pub fn convert(html: &str) -> Delta {
    convert_document(&HtmlParser.parse_document(html))
}

/// Convert a markup string using an injected parser.
///
/// The algorithm is identical to [`convert`]; only the parsing capability
/// differs, and with it the possibility of a parse error.
pub fn convert_with<P: MarkupParser>(parser: &P, html: &str) -> DeltaResult<Delta> {
    Ok(convert_document(&parser.parse(html)?))
}

/// Convert an already-parsed tree to a [`Delta`].
pub fn convert_document(doc: &Document) -> Delta {
    let mut ops = Vec::new();
    for node in &doc.children {
        visit(node, &mut ops);
    }
    Delta::new(ops)
}

// =============================================================================
// Traversal
// =============================================================================

fn visit(node: &Node, ops: &mut Vec<Op>) {
    match node {
        Node::Text(text) => {
            if !text.is_empty() {
                ops.push(Op::insert(text.content.clone()));
            }
        }
        Node::Element(elem) => match rule_for(&elem.tag) {
            TagRule::Paragraph => paragraph(elem, ops),
            TagRule::LineBreak => ops.push(Op::newline()),
            TagRule::Inline(format) => inline(elem, format, ops),
            TagRule::Link => link(elem, ops),
            TagRule::BulletList => bullet_list(elem, ops),
            TagRule::ListItem => list_item(elem, ops),
            TagRule::Header(level) => header(elem, level, ops),
            TagRule::Descend => descend(elem, ops),
        },
    }
}

fn descend(elem: &Element, ops: &mut Vec<Op>) {
    for child in &elem.children {
        visit(child, ops);
    }
}

/// A paragraph always ends with a bare line break, even when empty.
fn paragraph(elem: &Element, ops: &mut Vec<Op>) {
    let text = elem.flattened_text();
    if !text.is_empty() {
        ops.push(Op::insert(text));
    }
    ops.push(Op::newline());
}

fn inline(elem: &Element, format: InlineFormat, ops: &mut Vec<Op>) {
    let text = elem.flattened_text();
    if !text.is_empty() {
        ops.push(Op::insert_with(text, format.attributes()));
    }
}

/// A link with no `href` (or no text) is dropped entirely, not degraded
/// to plain text.
fn link(elem: &Element, ops: &mut Vec<Op>) {
    let text = elem.flattened_text();
    if let Some(href) = elem.attr("href") {
        if !href.is_empty() && !text.is_empty() {
            ops.push(Op::insert_with(text, Attributes::link(href)));
        }
    }
}

/// Only direct `<li>` children participate; anything else under the list
/// is ignored without descent.
fn bullet_list(elem: &Element, ops: &mut Vec<Op>) {
    for child in elem.child_elements() {
        if child.tag == "li" {
            list_item(child, ops);
        }
    }
}

/// The bullet terminator is unconditional, whatever the children emitted.
fn list_item(elem: &Element, ops: &mut Vec<Op>) {
    descend(elem, ops);
    ops.push(Op::insert_with("\n", Attributes::bullet()));
}

fn header(elem: &Element, level: u8, ops: &mut Vec<Op>) {
    let text = elem.flattened_text();
    if !text.is_empty() {
        ops.push(Op::insert(text));
    }
    ops.push(Op::insert_with("\n", Attributes::header(level)));
}

// =============================================================================
// Tests
// =============================================================================
