//! Global presentation state: the document root's class markers and custom
//! style properties.

use std::collections::{BTreeMap, BTreeSet};

/// Where theme side effects land.
pub trait StyleSurface {
    /// Add a class marker to the document root.
    fn add_root_class(&mut self, class: &str);

    /// Remove a class marker from the document root. Missing markers are ignored.
    fn remove_root_class(&mut self, class: &str);

    /// Assign a custom style property such as `--primary`.
    fn set_property(&mut self, name: &str, value: &str);
}

/// In-memory document root.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentStyle {
    classes: BTreeSet<String>,
    properties: BTreeMap<String, String>,
}

impl DocumentStyle {
    /// Create an empty document root.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if the root carries `class`.
    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }

    /// All class markers, sorted.
    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.classes.iter().map(String::as_str)
    }

    /// Value of a custom property.
    #[must_use]
    pub fn property(&self, name: &str) -> Option<&str> {
        self.properties.get(name).map(String::as_str)
    }

    /// All custom properties, sorted by name.
    pub fn properties(&self) -> impl Iterator<Item = (&str, &str)> {
        self.properties
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl StyleSurface for DocumentStyle {
    fn add_root_class(&mut self, class: &str) {
        self.classes.insert(class.to_owned());
    }

    fn remove_root_class(&mut self, class: &str) {
        self.classes.remove(class);
    }

    fn set_property(&mut self, name: &str, value: &str) {
        self.properties.insert(name.to_owned(), value.to_owned());
    }
}
