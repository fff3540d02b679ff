//! Store References
//!
//! A `Reference` names one node of the hierarchical store, e.g. `items/-NxA1`.

use std::fmt;

/// Handle identifying a path within the store
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Reference {
    segments: Vec<String>,
}

impl Reference {
    /// The root of the store
    pub fn root() -> Self {
        Self::default()
    }

    /// Parse a slash-separated path. Empty segments are ignored.
    pub fn new(path: &str) -> Self {
        Self::root().child(path)
    }

    /// Reference to a descendant; `path` may contain several segments
    pub fn child(&self, path: &str) -> Self {
        let mut segments = self.segments.clone();
        segments.extend(
            path.split('/')
                .filter(|s| !s.is_empty())
                .map(str::to_string),
        );
        Self { segments }
    }

    /// Last segment, `None` at the root
    pub fn key(&self) -> Option<&str> {
        self.segments.last().map(String::as_str)
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Slash-joined path without leading slash
    pub fn path(&self) -> String {
        self.segments.join("/")
    }
}

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}", self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_child() {
        let items = Reference::new("/items/");
        assert_eq!(items.path(), "items");
        let item = items.child("-NxA1");
        assert_eq!(item.path(), "items/-NxA1");
        assert_eq!(item.key(), Some("-NxA1"));
        assert_eq!(item.to_string(), "/items/-NxA1");
    }

    #[test]
    fn test_multi_segment_child() {
        let r = Reference::root().child("a//b/c");
        assert_eq!(r.segments(), &["a", "b", "c"]);
    }

    #[test]
    fn test_root() {
        let root = Reference::new("");
        assert!(root.is_root());
        assert_eq!(root.key(), None);
        assert_eq!(root.to_string(), "/");
    }
}
