//! Ordered, duplicate-free CSS class lists.

use std::fmt;

/// A whitespace-separated CSS class list that never holds the same class twice.
///
/// Order is first-insertion order, so merging a required class into an
/// owner-supplied list keeps the owner's classes where they were.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassList {
    classes: Vec<String>,
}

impl ClassList {
    /// Create an empty class list.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            classes: Vec::new(),
        }
    }

    /// Parse a `class` attribute value. Repeated tokens collapse to one.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        let mut list = Self::new();
        list.extend_str(value);
        list
    }

    /// Add a single class. Returns `false` if it was already present.
    pub fn add(&mut self, class: &str) -> bool {
        let class = class.trim();
        if class.is_empty() || self.contains(class) {
            return false;
        }
        self.classes.push(class.to_string());
        true
    }

    /// Add every class in a whitespace-separated string.
    pub fn extend_str(&mut self, value: &str) {
        for token in value.split_whitespace() {
            self.add(token);
        }
    }

    /// Merge another list into this one.
    pub fn merge(&mut self, other: &Self) {
        for class in &other.classes {
            self.add(class);
        }
    }

    /// Whether the list contains a class.
    #[must_use]
    pub fn contains(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Iterate classes in order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.classes.iter().map(String::as_str)
    }

    /// Number of distinct classes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    /// Whether the list is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

impl fmt::Display for ClassList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.classes.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_parse_collapses_duplicates_and_whitespace() {
        let list = ClassList::parse("  a  b a\tc ");
        assert_eq!(list.to_string(), "a b c");
    }

    #[test]
    fn test_add_reports_duplicates() {
        let mut list = ClassList::parse("CircleBadge-icon");
        assert!(!list.add("CircleBadge-icon"));
        assert!(list.add("primer"));
        assert_eq!(list.to_string(), "CircleBadge-icon primer");
    }

    #[test]
    fn test_merge_preserves_existing_order() {
        let mut list = ClassList::parse("primer rounded");
        list.merge(&ClassList::parse("CircleBadge-icon primer"));
        assert_eq!(list.to_string(), "primer rounded CircleBadge-icon");
    }

    #[test]
    fn test_empty_tokens_ignored() {
        let mut list = ClassList::new();
        assert!(!list.add("   "));
        assert!(list.is_empty());
    }

    proptest! {
        #[test]
        fn prop_merge_is_idempotent(a in "[a-z ]{0,24}", b in "[a-z ]{0,24}") {
            let mut once = ClassList::parse(&a);
            once.merge(&ClassList::parse(&b));
            let mut twice = once.clone();
            twice.merge(&ClassList::parse(&b));
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn prop_no_duplicates(a in "[a-c ]{0,32}") {
            let list = ClassList::parse(&a);
            let mut seen: Vec<&str> = list.iter().collect();
            seen.sort_unstable();
            seen.dedup();
            prop_assert_eq!(seen.len(), list.len());
        }
    }
}
