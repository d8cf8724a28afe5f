//! Scroll-driven navigation highlighting.
//!
//! A fixed set of page sections is watched against a viewport band; whenever a
//! section starts satisfying the band predicate, its nav entry becomes the only
//! active one.
//!
//! Within a single notification batch the last intersecting entry wins. The
//! order of entries inside a batch is whatever the host delivers, so two
//! sections crossing the threshold together are resolved by delivery order and
//! not by position on the page.

mod geometry;

pub use geometry::{ObserverOptions, Rect};

use hashbrown::{HashMap, HashSet};

use crate::anchor::anchor_target;
use crate::marker::Marker;

/// One record of an intersection notification batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntersectionEntry {
    pub target_id: String,
    pub intersecting: bool,
}

impl IntersectionEntry {
    pub fn entering(id: impl Into<String>) -> Self {
        Self {
            target_id: id.into(),
            intersecting: true,
        }
    }

    pub fn leaving(id: impl Into<String>) -> Self {
        Self {
            target_id: id.into(),
            intersecting: false,
        }
    }
}

/// A navigation link and its display marker.
#[derive(Debug, Clone)]
pub struct NavEntry<M> {
    /// Link target, e.g. `#about`
    pub target: String,
    pub marker: M,
}

impl<M> NavEntry<M> {
    pub fn new(target: impl Into<String>, marker: M) -> Self {
        Self {
            target: target.into(),
            marker,
        }
    }

    /// Section id this entry points at, if it is an in-page link.
    pub fn section_id(&self) -> Option<&str> {
        anchor_target(&self.target)
    }
}

/// Mirrors the section currently in the viewport band onto one nav entry.
pub struct HighlightObserver<M: Marker> {
    sections: Vec<String>,
    nav: Vec<NavEntry<M>>,
    /// Section id -> index of the first nav entry targeting it
    nav_by_section: HashMap<String, usize>,
    options: ObserverOptions,
    active: Option<usize>,
    /// Sections satisfying the predicate at the last `scan`
    in_band: HashSet<String>,
}

impl<M: Marker> HighlightObserver<M> {
    /// Build an observer over `sections` (ids) and `nav` entries.
    ///
    /// With no sections or no nav entries the observer is disabled and every
    /// handler is a no-op.
    pub fn new(sections: Vec<String>, nav: Vec<NavEntry<M>>, options: ObserverOptions) -> Self {
        let mut nav_by_section = HashMap::new();
        for (idx, entry) in nav.iter().enumerate() {
            if let Some(id) = entry.section_id() {
                nav_by_section.entry(id.to_string()).or_insert(idx);
            }
        }

        if sections.is_empty() || nav.is_empty() {
            tracing::debug!(
                sections = sections.len(),
                nav = nav.len(),
                "Section highlighting disabled"
            );
        }

        Self {
            sections,
            nav,
            nav_by_section,
            options,
            active: None,
            in_band: HashSet::new(),
        }
    }

    pub fn is_enabled(&self) -> bool {
        !self.sections.is_empty() && !self.nav.is_empty()
    }

    pub fn nav_entries(&self) -> &[NavEntry<M>] {
        &self.nav
    }

    /// Section whose nav entry is currently active.
    pub fn active(&self) -> Option<&str> {
        self.active
            .and_then(|idx| self.nav.get(idx))
            .and_then(NavEntry::section_id)
    }

    /// Apply one notification batch.
    ///
    /// Every intersecting entry with a matching nav entry clears all markers and
    /// activates its own; the last one in the batch is left active. Entries
    /// that stop intersecting change nothing.
    pub fn on_intersection(&mut self, batch: &[IntersectionEntry]) -> Option<&str> {
        if !self.is_enabled() {
            return None;
        }

        for entry in batch {
            let Some(&idx) = self.nav_by_section.get(entry.target_id.as_str()) else {
                tracing::trace!(section = %entry.target_id, "No nav entry for section");
                continue;
            };
            if entry.intersecting {
                for (i, nav) in self.nav.iter_mut().enumerate() {
                    nav.marker.set_active(i == idx);
                }
                self.active = Some(idx);
            }
        }

        self.active()
    }

    /// Evaluate section geometry and deliver the sections whose predicate
    /// changed since the previous scan as one batch, in the order given.
    ///
    /// Rects for ids that are not observed sections are ignored.
    pub fn scan<'a>(
        &mut self,
        rects: impl IntoIterator<Item = (&'a str, Rect)>,
        viewport_height: f64,
    ) -> Option<&str> {
        let mut batch = Vec::new();
        for (id, rect) in rects {
            if !self.sections.iter().any(|s| s == id) {
                continue;
            }
            let now = self.options.is_intersecting(rect, viewport_height);
            let before = self.in_band.contains(id);
            if now != before {
                if now {
                    self.in_band.insert(id.to_string());
                    batch.push(IntersectionEntry::entering(id));
                } else {
                    self.in_band.remove(id);
                    batch.push(IntersectionEntry::leaving(id));
                }
            }
        }

        if batch.is_empty() {
            return self.active();
        }
        self.on_intersection(&batch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::marker::ActiveFlag;
    use folio_types::HighlightConfig;

    fn observer(ids: &[&str]) -> HighlightObserver<ActiveFlag> {
        let sections = ids.iter().map(|s| s.to_string()).collect();
        let nav = ids
            .iter()
            .map(|id| NavEntry::new(format!("#{id}"), ActiveFlag::new(*id)))
            .collect();
        HighlightObserver::new(sections, nav, ObserverOptions::from(&HighlightConfig::default()))
    }

    fn active_labels(obs: &HighlightObserver<ActiveFlag>) -> Vec<&str> {
        obs.nav_entries()
            .iter()
            .filter(|e| e.marker.active)
            .map(|e| e.marker.label.as_str())
            .collect()
    }

    #[test]
    fn test_projects_intersecting_activates_only_projects() {
        let mut obs = observer(&["about", "skills", "projects"]);
        obs.on_intersection(&[IntersectionEntry::entering("projects")]);

        assert_eq!(active_labels(&obs), vec!["projects"]);
        assert_eq!(obs.active(), Some("projects"));
    }

    #[test]
    fn test_new_section_replaces_previous_highlight() {
        let mut obs = observer(&["about", "skills", "projects"]);
        obs.on_intersection(&[IntersectionEntry::entering("about")]);
        obs.on_intersection(&[IntersectionEntry::entering("skills")]);

        assert_eq!(active_labels(&obs), vec!["skills"]);
    }

    #[test]
    fn test_batch_resolves_to_exactly_one_in_any_order() {
        let orders: [[&str; 3]; 6] = [
            ["about", "skills", "projects"],
            ["about", "projects", "skills"],
            ["skills", "about", "projects"],
            ["skills", "projects", "about"],
            ["projects", "about", "skills"],
            ["projects", "skills", "about"],
        ];

        for order in orders {
            let mut obs = observer(&["about", "skills", "projects"]);
            let batch: Vec<_> = order.iter().map(|id| IntersectionEntry::entering(*id)).collect();
            obs.on_intersection(&batch);

            let active = active_labels(&obs);
            assert_eq!(active.len(), 1, "order {order:?}");
            // Last in batch wins
            assert_eq!(active[0], order[2], "order {order:?}");
        }
    }

    #[test]
    fn test_leaving_section_keeps_highlight() {
        let mut obs = observer(&["about", "skills"]);
        obs.on_intersection(&[IntersectionEntry::entering("about")]);
        obs.on_intersection(&[IntersectionEntry::leaving("about")]);

        assert_eq!(active_labels(&obs), vec!["about"]);
    }

    #[test]
    fn test_unmatched_section_is_ignored() {
        let mut obs = observer(&["about", "skills"]);
        obs.on_intersection(&[IntersectionEntry::entering("about")]);
        obs.on_intersection(&[IntersectionEntry::entering("contact")]);

        assert_eq!(active_labels(&obs), vec!["about"]);
    }

    #[test]
    fn test_empty_inputs_disable_observer() {
        let mut no_nav: HighlightObserver<ActiveFlag> = HighlightObserver::new(
            vec!["about".to_string()],
            Vec::new(),
            ObserverOptions::from(&HighlightConfig::default()),
        );
        assert!(!no_nav.is_enabled());
        assert_eq!(no_nav.on_intersection(&[IntersectionEntry::entering("about")]), None);

        let mut no_sections = HighlightObserver::new(
            Vec::new(),
            vec![NavEntry::new("#about", ActiveFlag::new("about"))],
            ObserverOptions::from(&HighlightConfig::default()),
        );
        assert!(!no_sections.is_enabled());
        no_sections.on_intersection(&[IntersectionEntry::entering("about")]);
        assert!(active_labels(&no_sections).is_empty());
    }

    #[test]
    fn test_non_anchor_nav_entries_never_activate() {
        let sections = vec!["about".to_string()];
        let nav = vec![
            NavEntry::new("/blog", ActiveFlag::new("blog")),
            NavEntry::new("#about", ActiveFlag::new("about")),
        ];
        let mut obs =
            HighlightObserver::new(sections, nav, ObserverOptions::from(&HighlightConfig::default()));
        obs.on_intersection(&[IntersectionEntry::entering("about")]);

        assert_eq!(active_labels(&obs), vec!["about"]);
    }

    #[test]
    fn test_scan_reports_only_changes() {
        let mut obs = observer(&["about", "skills", "projects"]);

        // Viewport 1000 px: band is the top 400 px
        let first = [
            ("about", Rect::new(0.0, 600.0)),
            ("skills", Rect::new(600.0, 600.0)),
            ("projects", Rect::new(1200.0, 600.0)),
        ];
        assert_eq!(obs.scan(first, 1000.0), Some("about"));

        // Manually move the highlight; an unchanged scan must not undo it
        obs.on_intersection(&[IntersectionEntry::entering("projects")]);
        assert_eq!(obs.scan(first, 1000.0), Some("projects"));

        let scrolled = [
            ("about", Rect::new(-600.0, 600.0)),
            ("skills", Rect::new(0.0, 600.0)),
            ("projects", Rect::new(600.0, 600.0)),
        ];
        assert_eq!(obs.scan(scrolled, 1000.0), Some("skills"));
        assert_eq!(active_labels(&obs), vec!["skills"]);
    }

    #[test]
    fn test_scan_ignores_unobserved_ids() {
        let mut obs = observer(&["about"]);
        let rects = [("hero", Rect::new(0.0, 400.0))];
        assert_eq!(obs.scan(rects, 1000.0), None);
    }
}
