//! Minimal document model the client behaviour runs against.
//!
//! Only what the filter and widget code touches is modelled: a class list,
//! string attributes and child elements.

use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    classes: Vec<String>,
    attributes: BTreeMap<String, String>,
    children: Vec<Element>,
}

impl Element {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds an element from a space separated class list, like `class="a b"`.
    pub fn with_classes(classes: &str) -> Self {
        let mut element = Self::new();
        for class in classes.split_whitespace() {
            element.add_class(class);
        }
        element
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attribute(name, value);
        self
    }

    pub fn child(mut self, child: Self) -> Self {
        self.children.push(child);
        self
    }

    pub fn push_child(&mut self, child: Self) {
        self.children.push(child);
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Adding a class that is already present is a no-op.
    pub fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_owned());
        }
    }

    pub fn remove_class(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }

    /// Returns whether the class is present afterwards.
    pub fn toggle_class(&mut self, class: &str) -> bool {
        if self.has_class(class) {
            self.remove_class(class);
            false
        } else {
            self.add_class(class);
            true
        }
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attributes.insert(name.into(), value.into());
    }

    pub fn children(&self) -> &[Self] {
        &self.children
    }

    pub fn children_mut(&mut self) -> &mut [Self] {
        &mut self.children
    }

    /// Descendants carrying `class`, in document order. The element itself is
    /// not included.
    pub fn elements_by_class(&self, class: &str) -> Vec<&Self> {
        self.select_all(&[class])
    }

    /// Descendants carrying every class in `classes`, in document order.
    pub fn select_all(&self, classes: &[&str]) -> Vec<&Self> {
        let mut found = Vec::new();
        for child in &self.children {
            child.collect_matching(classes, &mut found);
        }
        found
    }

    /// Calls `f` on every descendant carrying every class in `classes`, in
    /// document order.
    pub fn for_each_matching_mut(&mut self, classes: &[&str], f: &mut impl FnMut(&mut Self)) {
        for child in &mut self.children {
            if child.matches(classes) {
                f(child);
            }
            child.for_each_matching_mut(classes, f);
        }
    }

    fn matches(&self, classes: &[&str]) -> bool {
        classes.iter().all(|class| self.has_class(class))
    }

    fn collect_matching<'a>(&'a self, classes: &[&str], found: &mut Vec<&'a Self>) {
        if self.matches(classes) {
            found.push(self);
        }
        for child in &self.children {
            child.collect_matching(classes, found);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_list_operations() {
        let mut element = Element::with_classes("card  card--hide");
        assert!(element.has_class("card--hide"));

        element.add_class("card");
        assert_eq!(element.classes(), ["card", "card--hide"]);

        assert!(!element.toggle_class("card--hide"));
        assert!(element.toggle_class("card--hide"));

        element.remove_class("card--hide");
        assert!(!element.has_class("card--hide"));
    }

    #[test]
    fn test_select_all_requires_every_class() {
        let root = Element::new()
            .child(Element::with_classes("header header--base"))
            .child(
                Element::with_classes("body")
                    .child(Element::with_classes("header header--large").attr("id", "l")),
            );

        assert_eq!(root.elements_by_class("header").len(), 2);

        let large = root.select_all(&["header", "header--large"]);
        assert_eq!(large.len(), 1);
        assert_eq!(large[0].attribute("id"), Some("l"));
        assert!(root.select_all(&["header", "missing"]).is_empty());
    }
}
