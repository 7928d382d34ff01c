//! Parsed element tree consumed by the converter.
//!
//! The tree is produced once (by [`crate::markup`] or by hand) and never
//! mutated by conversion. Text nodes keep their source form: character
//! references such as `&amp;` are resolved by the converter, not here.

use std::collections::HashMap;

/// Tag name of the synthetic root that wraps a parsed fragment.
pub const FRAGMENT_TAG: &str = "#fragment";

/// A node of the element tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// An element with attributes and children
    Element(Element),

    /// Raw text content
    Text(String),
}

impl Node {
    /// Create a text node.
    pub fn text(text: impl Into<String>) -> Self {
        Node::Text(text.into())
    }

    /// Get the element if this node is one.
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(el) => Some(el),
            Node::Text(_) => None,
        }
    }
}

impl From<Element> for Node {
    fn from(el: Element) -> Self {
        Node::Element(el)
    }
}

/// An element: lower-case tag name, attributes and ordered children.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    /// Tag name, lower-cased
    pub tag: String,

    /// Attributes by lower-cased name
    pub attributes: HashMap<String, String>,

    /// Child nodes in document order
    pub children: Vec<Node>,
}

impl Element {
    /// Create an element with no attributes or children.
    pub fn new(tag: impl AsRef<str>) -> Self {
        Self {
            tag: tag.as_ref().to_ascii_lowercase(),
            attributes: HashMap::new(),
            children: Vec::new(),
        }
    }

    /// Create the synthetic root of a fragment.
    pub fn fragment(children: Vec<Node>) -> Self {
        Self {
            tag: FRAGMENT_TAG.to_string(),
            attributes: HashMap::new(),
            children,
        }
    }

    /// Set an attribute and return self.
    pub fn attr(mut self, name: impl AsRef<str>, value: impl Into<String>) -> Self {
        self.attributes
            .insert(name.as_ref().to_ascii_lowercase(), value.into());
        self
    }

    /// Append a child and return self.
    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    /// Append a text child and return self.
    pub fn with_text(self, text: impl Into<String>) -> Self {
        self.child(Node::text(text))
    }

    /// Get an attribute value by name.
    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Check whether this is the synthetic fragment root.
    pub fn is_fragment(&self) -> bool {
        self.tag == FRAGMENT_TAG
    }

    /// Find the first descendant (or self) with the given tag, depth-first.
    pub fn find(&self, tag: &str) -> Option<&Element> {
        if self.tag == tag {
            return Some(self);
        }
        self.children
            .iter()
            .filter_map(Node::as_element)
            .find_map(|child| child.find(tag))
    }
}
