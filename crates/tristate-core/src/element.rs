//! A minimal host-element tree for DOM-target rendering.
//!
//! Bricks build an [`Element`] and serialize it with [`Element::to_html`].
//! Attribute values are escaped; text nodes are escaped; void elements
//! (`input`, `img`, ...) never get a closing tag.

use crate::class_list::ClassList;
use crate::error::{CoreError, CoreResult};
use std::fmt::Write as _;

const VOID_TAGS: &[&str] = &["area", "br", "col", "hr", "img", "input", "link", "meta", "source"];

/// A validated, lowercase HTML tag name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ElementTag(String);

impl ElementTag {
    /// Parse a tag name such as `"div"`, `"a"`, or `"my-widget"`.
    pub fn parse(name: &str) -> CoreResult<Self> {
        let name = name.trim();
        let mut chars = name.chars();
        let valid_start = chars.next().is_some_and(|c| c.is_ascii_alphabetic());
        let valid_rest = chars.all(|c| c.is_ascii_alphanumeric() || c == '-');
        if !valid_start || !valid_rest {
            return Err(CoreError::InvalidTag(name.to_string()));
        }
        Ok(Self(name.to_ascii_lowercase()))
    }

    /// Tag name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the element has no content and no closing tag.
    #[must_use]
    pub fn is_void(&self) -> bool {
        VOID_TAGS.contains(&self.0.as_str())
    }
}

impl Default for ElementTag {
    fn default() -> Self {
        Self("div".to_string())
    }
}

/// A child node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Nested element
    Element(Element),
    /// Text content
    Text(String),
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Self::Element(element)
    }
}

/// A host element: tag, class list, attributes, children.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    tag: ElementTag,
    classes: ClassList,
    // `None` value renders as a boolean attribute.
    attributes: Vec<(String, Option<String>)>,
    children: Vec<Node>,
}

impl Element {
    /// Create an element with a validated tag.
    #[must_use]
    pub fn new(tag: ElementTag) -> Self {
        Self {
            tag,
            ..Self::default()
        }
    }

    /// Create an element from a tag name.
    pub fn parse(tag: &str) -> CoreResult<Self> {
        ElementTag::parse(tag).map(Self::new)
    }

    /// Tag of this element.
    #[must_use]
    pub const fn tag(&self) -> &ElementTag {
        &self.tag
    }

    /// Add classes from a whitespace-separated string.
    #[must_use]
    pub fn class(mut self, classes: &str) -> Self {
        self.classes.extend_str(classes);
        self
    }

    /// Class list.
    #[must_use]
    pub const fn classes(&self) -> &ClassList {
        &self.classes
    }

    /// Mutable class list.
    pub fn classes_mut(&mut self) -> &mut ClassList {
        &mut self.classes
    }

    /// Set a valued attribute.
    pub fn set_attr(&mut self, name: &str, value: impl Into<String>) -> CoreResult<()> {
        self.put(name, Some(value.into()))
    }

    /// Set a boolean attribute (`checked`, `disabled`).
    pub fn set_flag(&mut self, name: &str) -> CoreResult<()> {
        self.put(name, None)
    }

    /// Builder form of [`set_attr`](Self::set_attr).
    pub fn attr(mut self, name: &str, value: impl Into<String>) -> CoreResult<Self> {
        self.set_attr(name, value)?;
        Ok(self)
    }

    /// Look up an attribute. Boolean attributes return `Some("")`.
    #[must_use]
    pub fn get_attr(&self, name: &str) -> Option<&str> {
        if name == "class" {
            return None;
        }
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_deref().unwrap_or(""))
    }

    /// Append a child node.
    #[must_use]
    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    /// Append a text child.
    #[must_use]
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Node::Text(text.into()));
        self
    }

    /// Child nodes.
    #[must_use]
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Mutable child nodes.
    pub fn children_mut(&mut self) -> &mut Vec<Node> {
        &mut self.children
    }

    /// Serialize to HTML.
    #[must_use]
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn put(&mut self, name: &str, value: Option<String>) -> CoreResult<()> {
        let valid = !name.is_empty()
            && name
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid || name == "class" {
            return Err(CoreError::InvalidAttribute(name.to_string()));
        }
        if let Some(slot) = self.attributes.iter_mut().find(|(n, _)| n == name) {
            slot.1 = value;
        } else {
            self.attributes.push((name.to_string(), value));
        }
        Ok(())
    }

    fn write_html(&self, out: &mut String) {
        let _ = write!(out, "<{}", self.tag.as_str());
        if !self.classes.is_empty() {
            let _ = write!(out, " class=\"{}\"", escape(&self.classes.to_string()));
        }
        for (name, value) in &self.attributes {
            match value {
                Some(v) => {
                    let _ = write!(out, " {name}=\"{}\"", escape(v));
                }
                None => {
                    let _ = write!(out, " {name}");
                }
            }
        }
        if self.tag.is_void() {
            out.push_str("/>");
            return;
        }
        out.push('>');
        for child in &self.children {
            match child {
                Node::Element(e) => e.write_html(out),
                Node::Text(t) => out.push_str(&escape(t)),
            }
        }
        let _ = write!(out, "</{}>", self.tag.as_str());
    }
}

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
