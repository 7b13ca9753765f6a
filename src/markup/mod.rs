//! Minimal markup tree.
//!
//! Stands in for the page DOM. It is the source for hydration and the target
//! of post rendering. Only what the feed needs is here: tags, classes,
//! attributes, text, children, and descendant selectors made of
//! `tag.class#id` compounds.
//!
//! Documents are plain JSON:
//!
//! ```json
//! { "tag": "post-element", "children": [
//!     { "tag": "span", "classes": ["full-name"], "text": "Rida F'kih" } ] }
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One element.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkupNode {
    /// Element name.
    pub tag: String,
    /// Class list, without duplicates.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub classes: Vec<String>,
    /// Attributes by name.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: BTreeMap<String, String>,
    /// Text directly inside this element, before any children.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Child elements in document order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<MarkupNode>,
}

impl MarkupNode {
    /// Empty element.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Self::default()
        }
    }

    /// Add a class. Empty names are skipped so callers can pass conditional classes.
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        let class = class.into();
        if !class.is_empty() && !self.has_class(&class) {
            self.classes.push(class);
        }
        self
    }

    /// Set an attribute.
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Set the own text.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Append a child.
    pub fn with_child(mut self, child: MarkupNode) -> Self {
        self.children.push(child);
        self
    }

    /// Append several children.
    pub fn with_children(mut self, children: impl IntoIterator<Item = MarkupNode>) -> Self {
        self.children.extend(children);
        self
    }

    /// Whether the class list holds `class`.
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Attribute value by name.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Own text followed by every descendant's text, in document order.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        if let Some(text) = &self.text {
            out.push_str(text);
        }
        for child in &self.children {
            child.collect_text(out);
        }
    }

    /// First descendant matching `selector`, in document order.
    pub fn select(&self, selector: &str) -> Option<&MarkupNode> {
        self.select_all(selector).into_iter().next()
    }

    /// Every descendant matching `selector`, in document order.
    ///
    /// The node itself is never a match, but it can satisfy an ancestor
    /// compound.
    pub fn select_all(&self, selector: &str) -> Vec<&MarkupNode> {
        let selector = Selector::parse(selector);
        let mut found = Vec::new();
        if selector.is_empty() {
            return found;
        }
        let mut ancestors = vec![self];
        for child in &self.children {
            child.walk(&selector, &mut ancestors, &mut found);
        }
        found
    }

    fn walk<'a>(
        &'a self,
        selector: &Selector,
        ancestors: &mut Vec<&'a MarkupNode>,
        found: &mut Vec<&'a MarkupNode>,
    ) {
        if selector.matches(self, ancestors) {
            found.push(self);
        }
        ancestors.push(self);
        for child in &self.children {
            child.walk(selector, ancestors, found);
        }
        ancestors.pop();
    }
}

/// Parsed descendant selector, e.g. `.cover-container img`.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Selector {
    compounds: Vec<Compound>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Compound {
    tag: Option<String>,
    id: Option<String>,
    classes: Vec<String>,
}

impl Selector {
    fn parse(input: &str) -> Self {
        let compounds = input
            .split_whitespace()
            .map(Compound::parse)
            .filter(|c| *c != Compound::default())
            .collect();
        Self { compounds }
    }

    fn is_empty(&self) -> bool {
        self.compounds.is_empty()
    }

    fn matches(&self, node: &MarkupNode, ancestors: &[&MarkupNode]) -> bool {
        let Some((last, rest)) = self.compounds.split_last() else {
            return false;
        };
        if !last.matches(node) {
            return false;
        }

        // Greedy nearest-ancestor matching is exact for descendant combinators.
        let mut remaining = rest.iter().rev().peekable();
        for ancestor in ancestors.iter().rev() {
            match remaining.peek() {
                Some(compound) if compound.matches(ancestor) => {
                    remaining.next();
                }
                Some(_) => {}
                None => break,
            }
        }
        remaining.peek().is_none()
    }
}

fn push_part(kind: char, value: &mut String, compound: &mut Compound) {
    if value.is_empty() {
        return;
    }
    let value = std::mem::take(value);
    match kind {
        '.' => compound.classes.push(value),
        '#' => compound.id = Some(value),
        _ => compound.tag = Some(value),
    }
}

impl Compound {
    fn parse(part: &str) -> Self {
        let mut compound = Compound::default();
        let mut current = String::new();
        let mut kind = 't';

        for c in part.chars() {
            if c == '.' || c == '#' {
                push_part(kind, &mut current, &mut compound);
                kind = c;
            } else {
                current.push(c);
            }
        }
        push_part(kind, &mut current, &mut compound);
        compound
    }

    fn matches(&self, node: &MarkupNode) -> bool {
        if let Some(tag) = &self.tag {
            if !node.tag.eq_ignore_ascii_case(tag) {
                return false;
            }
        }
        if let Some(id) = &self.id {
            if node.attr("id") != Some(id.as_str()) {
                return false;
            }
        }
        self.classes.iter().all(|class| node.has_class(class))
    }
}
