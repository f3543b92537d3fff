//! Minimal markup tree used for rendered fragments and the page document.

use std::fmt::Write as _;

/// A child of an [`Element`]
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Element),
    /// Text content, escaped when serialized
    Text(String),
    /// Trusted markup appended verbatim (terminal output, line breaks)
    Raw(String),
}

/// An element with an optional id, classes, attributes and children
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Element {
    pub tag: String,
    pub id: Option<String>,
    /// Address a document assigns to an element without an id. Never serialized.
    pub handle: Option<String>,
    pub classes: Vec<String>,
    pub attributes: Vec<(String, String)>,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            ..Self::default()
        }
    }

    pub fn div(class: &str) -> Self {
        Self::new("div").class(class)
    }

    pub fn span(class: &str) -> Self {
        Self::new("span").class(class)
    }

    /// `<i>` icon element, e.g. `icon("fas fa-code-branch")`
    pub fn icon(classes: &str) -> Self {
        Self::new("i").class(classes)
    }

    pub fn id(mut self, id: &str) -> Self {
        self.id = Some(id.to_string());
        self
    }

    /// Add one or more space-separated classes
    pub fn class(mut self, classes: &str) -> Self {
        for class in classes.split_whitespace() {
            if !self.has_class(class) {
                self.classes.push(class.to_string());
            }
        }
        self
    }

    pub fn attr(mut self, name: &str, value: &str) -> Self {
        self.set_attribute(name, value);
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Node::Text(text.into()));
        self
    }

    pub fn child(mut self, child: Element) -> Self {
        self.children.push(Node::Element(child));
        self
    }

    /// Append `child` only when it is `Some`
    pub fn child_opt(self, child: Option<Element>) -> Self {
        match child {
            Some(child) => self.child(child),
            None => self,
        }
    }

    pub fn children(mut self, children: impl IntoIterator<Item = Element>) -> Self {
        self.children.extend(children.into_iter().map(Node::Element));
        self
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn set_class(&mut self, class: &str, enabled: bool) {
        if enabled {
            if !self.has_class(class) {
                self.classes.push(class.to_string());
            }
        } else {
            self.classes.retain(|c| c != class);
        }
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn set_attribute(&mut self, name: &str, value: &str) {
        match self.attributes.iter_mut().find(|(n, _)| n == name) {
            Some((_, v)) => *v = value.to_string(),
            None => self.attributes.push((name.to_string(), value.to_string())),
        }
    }

    /// Direct element children, skipping text
    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|node| match node {
            Node::Element(el) => Some(el),
            _ => None,
        })
    }

    /// Descendants carrying `class`, in document order (self excluded)
    pub fn find_by_class(&self, class: &str) -> Vec<&Element> {
        let mut found = Vec::new();
        self.collect_by_class(class, &mut found);
        found
    }

    fn collect_by_class<'a>(&'a self, class: &str, found: &mut Vec<&'a Element>) {
        for child in self.child_elements() {
            if child.has_class(class) {
                found.push(child);
            }
            child.collect_by_class(class, found);
        }
    }

    /// The id if there is one, otherwise the document-assigned handle
    pub fn key(&self) -> Option<&str> {
        self.id.as_deref().or(self.handle.as_deref())
    }

    /// This element or the first descendant whose [`key`](Self::key) is `id`
    pub fn find_by_id(&self, id: &str) -> Option<&Element> {
        if self.key() == Some(id) {
            return Some(self);
        }
        self.child_elements().find_map(|child| child.find_by_id(id))
    }

    pub fn find_by_id_mut(&mut self, id: &str) -> Option<&mut Element> {
        if self.key() == Some(id) {
            return Some(self);
        }
        self.children.iter_mut().find_map(|node| match node {
            Node::Element(child) => child.find_by_id_mut(id),
            _ => None,
        })
    }

    /// Remove the descendant with the given id. Returns false if not found.
    pub fn remove_by_id(&mut self, id: &str) -> bool {
        let before = self.children.len();
        self.children
            .retain(|node| !matches!(node, Node::Element(el) if el.key() == Some(id)));
        if self.children.len() != before {
            return true;
        }
        self.children.iter_mut().any(|node| match node {
            Node::Element(child) => child.remove_by_id(id),
            _ => false,
        })
    }

    /// Keys of this element and its descendants carrying `class`.
    /// Elements with neither an id nor a handle are skipped.
    pub fn keys_with_class(&self, class: &str) -> Vec<String> {
        let mut keys = Vec::new();
        if self.has_class(class) {
            keys.extend(self.key().map(str::to_string));
        }
        for el in self.find_by_class(class) {
            keys.extend(el.key().map(str::to_string));
        }
        keys
    }

    /// Concatenated text and raw content, the way `textContent` would read
    /// once raw markup is kept verbatim
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        for node in &self.children {
            match node {
                Node::Element(el) => el.collect_text(out),
                Node::Text(text) | Node::Raw(text) => out.push_str(text),
            }
        }
    }

    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        let _ = write!(out, "<{}", self.tag);
        if let Some(id) = &self.id {
            let _ = write!(out, " id=\"{}\"", escape(id));
        }
        if !self.classes.is_empty() {
            let _ = write!(out, " class=\"{}\"", escape(&self.classes.join(" ")));
        }
        for (name, value) in &self.attributes {
            let _ = write!(out, " {}=\"{}\"", name, escape(value));
        }
        out.push('>');
        for node in &self.children {
            match node {
                Node::Element(el) => el.write_html(out),
                Node::Text(text) => out.push_str(&escape(text)),
                Node::Raw(raw) => out.push_str(raw),
            }
        }
        let _ = write!(out, "</{}>", self.tag);
    }
}

/// Escape text for inclusion in markup
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}
