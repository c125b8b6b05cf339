//! Read-only document tree consumed by rules.
//!
//! [`Document`] is an arena of element and text nodes. Rules never see the
//! parser that produced it; they only use the query surface on [`Element`]
//! (find-by-tag, attributes, text content, children, markup serialization).
//! Any HTML parser can feed the engine by building a `Document` through
//! [`Document::create_root`], [`Document::append_element`] and
//! [`Document::append_text`].

#[cfg(feature = "scraper")]
mod html;

use std::fmt::Write;

/// Elements serialized without a closing tag.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source",
    "track", "wbr",
];

/// Index of a node inside a [`Document`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

#[derive(Debug, Clone)]
enum NodeData {
    Element {
        name: String,
        attrs: Vec<(String, String)>,
    },
    Text(String),
}

#[derive(Debug, Clone)]
struct Node {
    data: NodeData,
    children: Vec<NodeId>,
}

/// An owned, read-only HTML tree.
///
/// A document without a root element is considered invalid by the engine.
#[derive(Debug, Clone, Default)]
pub struct Document {
    nodes: Vec<Node>,
    root: Option<NodeId>,
}

impl Document {
    /// Creates an empty document with no root element.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the root element, replacing any previous root.
    ///
    /// Tag names are stored lowercase. Repeated attribute keys keep the
    /// first value.
    pub fn create_root<N, A, K, V>(&mut self, name: N, attrs: A) -> NodeId
    where
        N: Into<String>,
        A: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let id = self.push_element(name, attrs);
        self.root = Some(id);
        id
    }

    /// Appends an element as the last child of `parent`.
    ///
    /// # Panics
    ///
    /// Panics if `parent` was not returned by this document.
    pub fn append_element<N, A, K, V>(&mut self, parent: NodeId, name: N, attrs: A) -> NodeId
    where
        N: Into<String>,
        A: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let id = self.push_element(name, attrs);
        self.nodes[parent.0].children.push(id);
        id
    }

    /// Appends a text node as the last child of `parent`.
    ///
    /// # Panics
    ///
    /// Panics if `parent` was not returned by this document.
    pub fn append_text(&mut self, parent: NodeId, text: impl Into<String>) {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            data: NodeData::Text(text.into()),
            children: Vec::new(),
        });
        self.nodes[parent.0].children.push(id);
    }

    fn push_element<N, A, K, V>(&mut self, name: N, attrs: A) -> NodeId
    where
        N: Into<String>,
        A: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut unique: Vec<(String, String)> = Vec::new();
        for (key, value) in attrs {
            let key = key.into().to_ascii_lowercase();
            if !unique.iter().any(|(k, _)| *k == key) {
                unique.push((key, value.into()));
            }
        }

        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            data: NodeData::Element {
                name: name.into().to_ascii_lowercase(),
                attrs: unique,
            },
            children: Vec::new(),
        });
        id
    }

    /// Returns the root element, if any.
    #[must_use]
    pub fn root(&self) -> Option<Element<'_>> {
        self.root.map(|id| Element { doc: self, id })
    }

    /// Returns every element in depth-first pre-order, starting at the root.
    #[must_use]
    pub fn elements(&self) -> Vec<Element<'_>> {
        self.root().map(|root| root.descendants()).unwrap_or_default()
    }

    /// Returns every element whose tag is one of `tags`, in document order.
    #[must_use]
    pub fn elements_by_tag(&self, tags: &[&str]) -> Vec<Element<'_>> {
        self.root()
            .map(|root| root.find_all(tags))
            .unwrap_or_default()
    }

    /// Returns the first element with the given tag, in document order.
    #[must_use]
    pub fn first_by_tag(&self, tag: &str) -> Option<Element<'_>> {
        self.elements_by_tag(&[tag]).into_iter().next()
    }
}

/// A lightweight handle to one element of a [`Document`].
#[derive(Debug, Clone, Copy)]
pub struct Element<'a> {
    doc: &'a Document,
    id: NodeId,
}

impl<'a> Element<'a> {
    fn node(&self) -> &'a Node {
        &self.doc.nodes[self.id.0]
    }

    fn element_parts(&self) -> (&'a str, &'a [(String, String)]) {
        match &self.node().data {
            NodeData::Element { name, attrs } => (name.as_str(), attrs.as_slice()),
            NodeData::Text(_) => ("", &[]),
        }
    }

    /// Returns the node id of this element.
    #[must_use]
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Returns the lowercase tag name.
    #[must_use]
    pub fn name(&self) -> &'a str {
        self.element_parts().0
    }

    /// Returns the value of an attribute.
    #[must_use]
    pub fn attr(&self, name: &str) -> Option<&'a str> {
        self.element_parts()
            .1
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Returns true if the attribute is present, whatever its value.
    #[must_use]
    pub fn has_attr(&self, name: &str) -> bool {
        self.attr(name).is_some()
    }

    /// Returns all attributes in their stored order.
    pub fn attrs(&self) -> impl Iterator<Item = (&'a str, &'a str)> {
        self.element_parts()
            .1
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Returns the direct element children.
    #[must_use]
    pub fn children(&self) -> Vec<Element<'a>> {
        let doc = self.doc;
        self.node()
            .children
            .iter()
            .filter(|id| matches!(doc.nodes[id.0].data, NodeData::Element { .. }))
            .map(|&id| Element { doc, id })
            .collect()
    }

    /// Returns true if a direct child has the given tag.
    #[must_use]
    pub fn has_child(&self, tag: &str) -> bool {
        self.children().iter().any(|c| c.name() == tag)
    }

    /// Returns this element and all element descendants in pre-order.
    #[must_use]
    pub fn descendants(&self) -> Vec<Element<'a>> {
        let doc = self.doc;
        let mut out = Vec::new();
        let mut stack = vec![self.id];

        while let Some(id) = stack.pop() {
            let node = &doc.nodes[id.0];
            if let NodeData::Element { .. } = node.data {
                out.push(Element { doc, id });
                stack.extend(node.children.iter().rev().copied());
            }
        }

        out
    }

    /// Returns descendants (including self) whose tag is one of `tags`.
    #[must_use]
    pub fn find_all(&self, tags: &[&str]) -> Vec<Element<'a>> {
        self.descendants()
            .into_iter()
            .filter(|e| tags.contains(&e.name()))
            .collect()
    }

    /// Concatenated text of every descendant text node.
    #[must_use]
    pub fn text_content(&self) -> String {
        let doc = self.doc;
        let mut text = String::new();
        let mut stack = vec![self.id];

        while let Some(id) = stack.pop() {
            let node = &doc.nodes[id.0];
            match &node.data {
                NodeData::Text(t) => text.push_str(t),
                NodeData::Element { .. } => stack.extend(node.children.iter().rev().copied()),
            }
        }

        text
    }

    /// Serializes the opening tag with its attributes.
    #[must_use]
    pub fn opening_tag(&self) -> String {
        opening_tag(self.name(), self.element_parts().1)
    }

    /// Serializes the element and its subtree as HTML.
    #[must_use]
    pub fn outer_html(&self) -> String {
        let mut out = Markup::new(usize::MAX);
        serialize(self.doc, self.id, &mut out);
        out.text
    }

    /// Serializes at most `max_chars` characters of [`Element::outer_html`],
    /// appending `...` when the markup was cut.
    ///
    /// Serialization stops once the budget is spent, so large subtrees are
    /// not walked in full.
    #[must_use]
    pub fn html_excerpt(&self, max_chars: usize) -> String {
        let mut out = Markup::new(max_chars);
        serialize(self.doc, self.id, &mut out);
        if out.cut {
            out.text.push_str("...");
        }
        out.text
    }
}

/// Serialization buffer holding at most `limit` characters.
struct Markup {
    text: String,
    chars: usize,
    limit: usize,
    cut: bool,
}

impl Markup {
    fn new(limit: usize) -> Self {
        Self {
            text: String::new(),
            chars: 0,
            limit,
            cut: false,
        }
    }

    fn push_str(&mut self, s: &str) {
        if self.cut {
            return;
        }
        let room = self.limit - self.chars;
        match s.char_indices().nth(room) {
            Some((end, _)) => {
                self.text.push_str(&s[..end]);
                self.chars = self.limit;
                self.cut = true;
            }
            None => {
                self.text.push_str(s);
                self.chars += s.chars().count();
            }
        }
    }
}

fn opening_tag(name: &str, attrs: &[(String, String)]) -> String {
    let mut out = format!("<{name}");
    for (key, value) in attrs {
        let _ = write!(out, " {key}=\"{}\"", escape(value, true));
    }
    out.push('>');
    out
}

fn serialize(doc: &Document, id: NodeId, out: &mut Markup) {
    if out.cut {
        return;
    }
    let node = &doc.nodes[id.0];
    match &node.data {
        NodeData::Text(t) => out.push_str(&escape(t, false)),
        NodeData::Element { name, attrs } => {
            out.push_str(&opening_tag(name, attrs));
            if VOID_ELEMENTS.contains(&name.as_str()) {
                return;
            }
            for &child in &node.children {
                serialize(doc, child, out);
                if out.cut {
                    return;
                }
            }
            out.push_str(&format!("</{name}>"));
        }
    }
}

fn escape(raw: &str, in_attribute: bool) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' if in_attribute => out.push_str("&quot;"),
            '<' if !in_attribute => out.push_str("&lt;"),
            '>' if !in_attribute => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}
