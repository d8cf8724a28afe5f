//! Display-state seams between the state machines and whatever renders them.
//!
//! The browser crate implements these on DOM elements (toggling CSS classes);
//! tests and the CLI use [`ActiveFlag`].

/// A boolean "active" display flag, e.g. the `is-active` class.
pub trait Marker {
    fn set_active(&mut self, active: bool);
}

/// A boolean "hidden" display flag, e.g. the `is-hidden` class.
pub trait Visibility {
    fn set_hidden(&mut self, hidden: bool);
}

/// Set exactly one marker active (or none when `active` is `None`).
pub fn mark_only<M: Marker>(markers: &mut [M], active: Option<usize>) {
    for (i, marker) in markers.iter_mut().enumerate() {
        marker.set_active(Some(i) == active);
    }
}

/// In-memory marker/visibility state for headless use.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActiveFlag {
    pub label: String,
    pub active: bool,
    pub hidden: bool,
}

impl ActiveFlag {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Self::default()
        }
    }
}

impl Marker for ActiveFlag {
    fn set_active(&mut self, active: bool) {
        self.active = active;
    }
}

impl Visibility for ActiveFlag {
    fn set_hidden(&mut self, hidden: bool) {
        self.hidden = hidden;
    }
}

/// Indices of the active flags, for assertions and CLI output.
pub fn active_indices(flags: &[ActiveFlag]) -> Vec<usize> {
    flags
        .iter()
        .enumerate()
        .filter(|(_, f)| f.active)
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mark_only_sets_single_active() {
        let mut flags = vec![ActiveFlag::new("a"), ActiveFlag::new("b"), ActiveFlag::new("c")];
        flags[0].active = true;

        mark_only(&mut flags, Some(2));
        assert_eq!(active_indices(&flags), vec![2]);

        mark_only(&mut flags, None);
        assert!(active_indices(&flags).is_empty());
    }
}
