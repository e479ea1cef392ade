//! Markup output.
//!
//! `Display` on a [`Node`] or [`Document`] writes indented SVG text:
//! attributes in key order, two spaces per nesting level, and self-closing
//! tags for elements without content.

use std::fmt::{self, Display, Formatter, Write};

use crate::attrs::Attributes;
use crate::document::Document;
use crate::shapes::Element;
use crate::style::Stylesheet;
use crate::tree::Node;

const INDENT: &str = "  ";

impl Display for Node {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_node(f, self, 0)
    }
}

impl Display for Document {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_node(f, self, 0)
    }
}

fn write_node(f: &mut Formatter<'_>, node: &Node, depth: usize) -> fmt::Result {
    let pad = INDENT.repeat(depth);
    write!(f, "{pad}<{}", node.tag())?;
    write_attrs(f, node.attrs())?;

    match node.element() {
        Element::Text(text) => {
            f.write_char('>')?;
            f.write_str(&escape(&text.content))?;
            write!(f, "</{}>", node.tag())
        }
        Element::Style(sheet) => {
            f.write_str(">\n")?;
            write_stylesheet(f, sheet, depth + 1)?;
            write!(f, "{pad}</{}>", node.tag())
        }
        _ if node.children().is_empty() => f.write_str(" />"),
        _ => {
            f.write_str(">\n")?;
            for child in node.children() {
                write_node(f, child, depth + 1)?;
                f.write_char('\n')?;
            }
            write!(f, "{pad}</{}>", node.tag())
        }
    }
}

fn write_attrs(f: &mut Formatter<'_>, attrs: &Attributes) -> fmt::Result {
    for (key, value) in attrs.iter() {
        write!(f, " {key}=\"{}\"", escape(value))?;
    }
    Ok(())
}

fn write_stylesheet(f: &mut Formatter<'_>, sheet: &Stylesheet, depth: usize) -> fmt::Result {
    let pad = INDENT.repeat(depth);
    writeln!(f, "{pad}<![CDATA[")?;
    for (selector, decls) in sheet.rules() {
        write_block(f, selector, decls, depth + 1)?;
    }
    for (name, keyframes) in sheet.all_keyframes() {
        let inner = INDENT.repeat(depth + 1);
        writeln!(f, "{inner}@keyframes {name} {{")?;
        for (offset, decls) in keyframes.stops() {
            write_block(f, offset, decls, depth + 2)?;
        }
        writeln!(f, "{inner}}}")?;
    }
    writeln!(f, "{pad}]]>")
}

/// `selector { key: value; ... }`, one declaration per line
fn write_block(f: &mut Formatter<'_>, selector: &str, decls: &Attributes, depth: usize) -> fmt::Result {
    let pad = INDENT.repeat(depth);
    writeln!(f, "{pad}{selector} {{")?;
    for (key, value) in decls.iter() {
        writeln!(f, "{pad}{INDENT}{key}: {value};")?;
    }
    writeln!(f, "{pad}}}")
}

/// Escape the characters XML does not allow verbatim in attribute values
fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leaf_is_self_closing() {
        let circle = Node::circle(1.0, 2.0, 3.0);
        assert_eq!(circle.to_string(), r#"<circle cx="1.0" cy="2.0" r="3.0" />"#);
    }

    #[test]
    fn nested_children_are_indented() {
        let tree = Node::group() << (Node::group() << Node::rect(0.0, 0.0, 1.0, 1.0));
        assert_eq!(
            tree.to_string(),
            "<g>\n  <g>\n    <rect height=\"1.0\" width=\"1.0\" x=\"0.0\" y=\"0.0\" />\n  </g>\n</g>"
        );
    }

    #[test]
    fn text_content_is_escaped() {
        let text = Node::text(0.0, 10.0, "a < b & c");
        assert_eq!(
            text.to_string(),
            r#"<text x="0.0" y="10.0">a &lt; b &amp; c</text>"#
        );
    }

    #[test]
    fn attribute_values_are_escaped() {
        let mut g = Node::group();
        g.set_str("data-label", r#"say "hi""#);
        assert_eq!(g.to_string(), r#"<g data-label="say &quot;hi&quot;" />"#);
    }
}
