//! Progress Set
//!
//! Story milestones ("tags") completed during a playthrough. Tags are only ever added.
use std::collections::BTreeSet;

use log::info;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProgressSet {
    tags: BTreeSet<String>,
}
impl ProgressSet {
    pub fn new() -> ProgressSet {
        ProgressSet::default()
    }

    /// Returns `true` if the given tag has been completed.
    pub fn contains(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }

    /// Returns `true` if every tag in `tags` has been completed (vacuously true when empty).
    pub fn has_all<'a>(&self, tags: impl IntoIterator<Item = &'a String>) -> bool {
        tags.into_iter().all(|tag| self.tags.contains(tag))
    }

    /// Returns `true` if none of `tags` has been completed (vacuously true when empty).
    pub fn has_none<'a>(&self, tags: impl IntoIterator<Item = &'a String>) -> bool {
        !tags.into_iter().any(|tag| self.tags.contains(tag))
    }

    /// Mark tags as completed. Tags already present are left as they are.
    pub fn add<'a>(&mut self, tags: impl IntoIterator<Item = &'a String>) {
        for tag in tags {
            if self.tags.insert(tag.clone()) {
                info!("progress: task '{tag}' completed");
            }
        }
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Iterate over completed tags in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| (*n).to_string()).collect()
    }

    #[test]
    fn empty_queries_are_vacuously_true() {
        let progress = ProgressSet::new();
        assert!(progress.has_all(&Vec::<String>::new()));
        assert!(progress.has_none(&Vec::<String>::new()));
    }

    #[test]
    fn has_all_requires_every_tag() {
        let mut progress = ProgressSet::new();
        progress.add(&tags(&["tip", "necklace"]));
        assert!(progress.has_all(&tags(&["tip"])));
        assert!(progress.has_all(&tags(&["tip", "necklace"])));
        assert!(!progress.has_all(&tags(&["tip", "necklace", "stories"])));
    }

    #[test]
    fn has_none_fails_on_any_overlap() {
        let mut progress = ProgressSet::new();
        progress.add(&tags(&["weapon"]));
        assert!(progress.has_none(&tags(&["chest"])));
        assert!(!progress.has_none(&tags(&["chest", "weapon"])));
    }

    #[test]
    fn add_is_idempotent() {
        let mut once = ProgressSet::new();
        once.add(&tags(&["weapon"]));

        let mut twice = ProgressSet::new();
        twice.add(&tags(&["weapon"]));
        twice.add(&tags(&["weapon", "weapon"]));

        assert_eq!(once, twice);
        assert_eq!(twice.len(), 1);
    }

    #[test]
    fn iter_is_sorted() {
        let mut progress = ProgressSet::new();
        progress.add(&tags(&["tip", "chest", "necklace"]));
        assert_eq!(progress.iter().collect::<Vec<_>>(), vec!["chest", "necklace", "tip"]);
    }
}
