//! Reveal-on-scroll tracking.
//!
//! Each element is revealed once, the first time it intersects; after that the
//! caller stops observing it. Users who prefer reduced motion get everything
//! revealed up front.

use hashbrown::HashSet;

use crate::highlight::IntersectionEntry;

#[derive(Debug, Clone)]
pub struct RevealTracker {
    pending: HashSet<String>,
    revealed: Vec<String>,
}

impl RevealTracker {
    /// Track `ids`. With `reduced_motion` every element is revealed at once.
    pub fn new(ids: Vec<String>, reduced_motion: bool) -> Self {
        if reduced_motion {
            return Self {
                pending: HashSet::new(),
                revealed: ids,
            };
        }
        Self {
            pending: ids.into_iter().collect(),
            revealed: Vec::new(),
        }
    }

    /// Elements still waiting to be revealed; these need observing.
    pub fn pending(&self) -> impl Iterator<Item = &str> {
        self.pending.iter().map(String::as_str)
    }

    pub fn is_pending(&self, id: &str) -> bool {
        self.pending.contains(id)
    }

    /// Every element revealed so far, in reveal order.
    pub fn revealed(&self) -> &[String] {
        &self.revealed
    }

    pub fn is_done(&self) -> bool {
        self.pending.is_empty()
    }

    /// Reveal intersecting entries. Returns ids newly revealed by this batch;
    /// the caller should mark them visible and stop observing them.
    pub fn on_intersection(&mut self, batch: &[IntersectionEntry]) -> Vec<String> {
        let mut newly = Vec::new();
        for entry in batch.iter().filter(|e| e.intersecting) {
            if self.pending.remove(entry.target_id.as_str()) {
                self.revealed.push(entry.target_id.clone());
                newly.push(entry.target_id.clone());
            }
        }
        newly
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_reduced_motion_reveals_everything() {
        let tracker = RevealTracker::new(ids(&["a", "b"]), true);
        assert!(tracker.is_done());
        assert_eq!(tracker.revealed(), ids(&["a", "b"]).as_slice());
        assert_eq!(tracker.pending().count(), 0);
    }

    #[test]
    fn test_each_element_revealed_once() {
        let mut tracker = RevealTracker::new(ids(&["a", "b", "c"]), false);

        let first = tracker.on_intersection(&[
            IntersectionEntry::entering("a"),
            IntersectionEntry::leaving("b"),
        ]);
        assert_eq!(first, ids(&["a"]));
        assert!(!tracker.is_pending("a"));
        assert!(tracker.is_pending("b"));

        let second = tracker.on_intersection(&[
            IntersectionEntry::entering("a"),
            IntersectionEntry::entering("c"),
        ]);
        assert_eq!(second, ids(&["c"]));
        assert_eq!(tracker.revealed(), ids(&["a", "c"]).as_slice());
        assert!(!tracker.is_done());
    }

    #[test]
    fn test_unknown_ids_are_ignored() {
        let mut tracker = RevealTracker::new(ids(&["a"]), false);
        assert!(tracker.on_intersection(&[IntersectionEntry::entering("z")]).is_empty());
        assert!(tracker.is_pending("a"));
    }
}
