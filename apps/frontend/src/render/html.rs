//! Minimal HTML tree builder.
//!
//! Text and attribute values go through askama's HTML escaper when the tree
//! is written out, so callers can hand payload strings over verbatim.

use std::fmt::{self, Write};

use askama::{Html, MarkupDisplay};

/// Elements written without a closing tag.
const VOID_ELEMENTS: &[&str] = &["br", "hr", "img", "input", "link", "meta"];

#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Element),
    Text(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    tag: &'static str,
    attrs: Vec<(&'static str, String)>,
    children: Vec<Node>,
}

impl Element {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attrs.push((name, value.into()));
        self
    }

    pub fn class(self, class: impl Into<String>) -> Self {
        self.attr("class", class)
    }

    pub fn id(self, id: impl Into<String>) -> Self {
        self.attr("id", id)
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Node::Text(text.into()));
        self
    }

    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Appends `child` only when present.
    pub fn optional(self, child: Option<Element>) -> Self {
        match child {
            Some(c) => self.child(c),
            None => self,
        }
    }

    pub fn children<I, N>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<Node>,
    {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl From<Element> for Node {
    fn from(e: Element) -> Self {
        Node::Element(e)
    }
}

impl From<String> for Node {
    fn from(s: String) -> Self {
        Node::Text(s)
    }
}

impl From<&str> for Node {
    fn from(s: &str) -> Self {
        Node::Text(s.to_string())
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Element(e) => fmt::Display::fmt(e, f),
            Node::Text(t) => write_escaped(f, t),
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}", self.tag)?;
        for (name, value) in &self.attrs {
            write!(f, " {name}=\"")?;
            write_escaped(f, value)?;
            f.write_char('"')?;
        }
        f.write_char('>')?;

        if VOID_ELEMENTS.contains(&self.tag) {
            return Ok(());
        }

        for child in &self.children {
            fmt::Display::fmt(child, f)?;
        }
        write!(f, "</{}>", self.tag)
    }
}

fn write_escaped(f: &mut fmt::Formatter<'_>, text: &str) -> fmt::Result {
    fmt::Display::fmt(&MarkupDisplay::new_unsafe(text, Html), f)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_elements() {
        let html = Element::new("div")
            .class("section")
            .child(Element::new("h3").text("Skills"))
            .child(Element::new("p").text("Rust"))
            .render();
        assert_eq!(
            html,
            r#"<div class="section"><h3>Skills</h3><p>Rust</p></div>"#
        );
    }

    #[test]
    fn test_text_is_escaped() {
        let html = Element::new("p")
            .text("<script>alert('x')</script> & co")
            .render();
        assert_eq!(
            html,
            "<p>&lt;script&gt;alert(&#x27;x&#x27;)&lt;/script&gt; &amp; co</p>"
        );
    }

    #[test]
    fn test_attribute_values_are_escaped() {
        let html = Element::new("a")
            .attr("href", "\" onmouseover=\"evil()")
            .text("link")
            .render();
        assert_eq!(
            html,
            r#"<a href="&quot; onmouseover=&quot;evil()">link</a>"#
        );
    }

    #[test]
    fn test_void_elements_have_no_closing_tag() {
        let html = Element::new("p")
            .text("a")
            .child(Element::new("br"))
            .text("b")
            .render();
        assert_eq!(html, "<p>a<br>b</p>");
    }

    #[test]
    fn test_optional_child() {
        let with = Element::new("div").optional(Some(Element::new("span"))).render();
        let without = Element::new("div").optional(None).render();
        assert_eq!(with, "<div><span></span></div>");
        assert_eq!(without, "<div></div>");
    }

    #[test]
    fn test_children_from_iterator() {
        let html = Element::new("ul")
            .children(["a", "b"].iter().map(|s| Element::new("li").text(*s)))
            .render();
        assert_eq!(html, "<ul><li>a</li><li>b</li></ul>");
    }

    #[test]
    fn test_plain_text_is_untouched() {
        assert_eq!(Node::from("plain text 100%").to_string(), "plain text 100%");
    }
}
