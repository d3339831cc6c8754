//! In-memory XML element tree.
//!
//! Documents are built as plain values first and serialized separately
//! (see [`super::writer`]), so structure can be inspected in tests without
//! parsing XML back.

/// A child of an [`Element`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    /// Unescaped character data.
    Text(String),
}

/// An XML element with ordered attributes and children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub name: String,
    pub attributes: Vec<(String, String)>,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    pub fn child(mut self, child: Element) -> Self {
        self.children.push(Node::Element(child));
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = Element>) -> Self {
        self.children
            .extend(children.into_iter().map(Node::Element));
        self
    }

    /// Append text content. Empty text adds nothing, so the element stays
    /// self-closing.
    pub fn text(mut self, text: impl Into<String>) -> Self {
        let text = text.into();
        if !text.is_empty() {
            self.children.push(Node::Text(text));
        }
        self
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Concatenated direct text children.
    pub fn text_content(&self) -> String {
        self.children
            .iter()
            .filter_map(|n| match n {
                Node::Text(t) => Some(t.as_str()),
                Node::Element(_) => None,
            })
            .collect()
    }

    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|n| match n {
            Node::Element(e) => Some(e),
            Node::Text(_) => None,
        })
    }

    /// First direct child element with the given name.
    pub fn find(&self, name: &str) -> Option<&Element> {
        self.child_elements().find(|e| e.name == name)
    }

    /// All descendant elements with the given name, in document order.
    pub fn descendants(&self, name: &str) -> Vec<&Element> {
        let mut found = Vec::new();
        collect_descendants(self, name, &mut found);
        found
    }
}

fn collect_descendants<'a>(element: &'a Element, name: &str, found: &mut Vec<&'a Element>) {
    for child in element.child_elements() {
        if child.name == name {
            found.push(child);
        }
        collect_descendants(child, name, found);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Element {
        Element::new("root")
            .attr("id", "r")
            .child(Element::new("a").text("one"))
            .child(Element::new("b").child(Element::new("a").text("two")))
    }

    #[test]
    fn test_builder_keeps_order() {
        let root = sample();
        let names: Vec<&str> = root.child_elements().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b"]);
        assert_eq!(root.get_attr("id"), Some("r"));
        assert_eq!(root.get_attr("missing"), None);
    }

    #[test]
    fn test_empty_text_adds_no_child() {
        let e = Element::new("fieldentry").text("");
        assert!(e.children.is_empty());
    }

    #[test]
    fn test_descendants_in_document_order() {
        let root = sample();
        let texts: Vec<String> = root.descendants("a").iter().map(|e| e.text_content()).collect();
        assert_eq!(texts, vec!["one", "two"]);
    }

    #[test]
    fn test_find_direct_child_only() {
        let root = sample();
        assert_eq!(root.find("a").map(|e| e.text_content()), Some("one".to_string()));
        assert!(root.find("missing").is_none());
    }
}
