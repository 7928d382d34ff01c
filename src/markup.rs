//! Markup parsing into the element tree.
//!
//! Tokenizing and tree construction are delegated to `html5ever`; this
//! module only turns the resulting `RcDom` into owned [`Node`] values.

use crate::dom::{Element, Node};
use html5ever::tendril::TendrilSink;
use html5ever::{parse_document as html5ever_parse, ParseOpts};
use markup5ever_rcdom::{Handle, NodeData, RcDom};

/// Parse a complete document. The result is the `<html>` element.
pub fn parse_document(html: &str) -> Node {
    let dom = parse_dom(html);
    let children = convert_children(&dom.document);

    // html5ever always synthesizes an <html> root; fall back to a fragment
    // if the sink produced something unexpected.
    let mut elements = children.into_iter().filter(|n| n.as_element().is_some());
    match (elements.next(), elements.next()) {
        (Some(root), None) => root,
        (Some(first), Some(second)) => {
            let mut rest = vec![first, second];
            rest.extend(elements);
            Element::fragment(rest).into()
        }
        _ => Element::fragment(Vec::new()).into(),
    }
}

/// Parse a body fragment. The result is a synthetic fragment root holding
/// the body's children.
pub fn parse_fragment(html: &str) -> Node {
    let dom = parse_dom(html);
    let children = match find_body(&dom.document) {
        Some(body) => convert_children(&body),
        None => convert_children(&dom.document),
    };
    Element::fragment(children).into()
}

fn parse_dom(html: &str) -> RcDom {
    html5ever_parse(RcDom::default(), ParseOpts::default()).one(html)
}

fn find_body(node: &Handle) -> Option<Handle> {
    if let NodeData::Element { name, .. } = &node.data {
        if name.local.to_string().eq_ignore_ascii_case("body") {
            return Some(node.clone());
        }
    }
    for child in node.children.borrow().iter() {
        if let Some(body) = find_body(child) {
            return Some(body);
        }
    }
    None
}

fn convert_children(handle: &Handle) -> Vec<Node> {
    handle
        .children
        .borrow()
        .iter()
        .filter_map(convert_node)
        .collect()
}

fn convert_node(handle: &Handle) -> Option<Node> {
    match &handle.data {
        NodeData::Element { name, attrs, .. } => {
            let mut el = Element::new(name.local.to_string());
            for attr in attrs.borrow().iter() {
                el.attributes.insert(
                    attr.name.local.to_string().to_ascii_lowercase(),
                    attr.value.to_string(),
                );
            }
            el.children = convert_children(handle);
            Some(Node::Element(el))
        }
        // html5ever already resolved character references; escape the
        // ampersands back so text stays in source form.
        NodeData::Text { contents } => {
            Some(Node::Text(contents.borrow().to_string().replace('&', "&amp;")))
        }
        NodeData::Document => Some(Element::fragment(convert_children(handle)).into()),
        NodeData::Doctype { .. }
        | NodeData::Comment { .. }
        | NodeData::ProcessingInstruction { .. } => None,
    }
}
