//! Mobile navigation toggle.

/// Renders the expanded state, e.g. `aria-expanded` plus the `is-open` class.
pub trait NavView {
    fn set_expanded(&mut self, expanded: bool);
}

pub struct MobileNav<V: NavView> {
    view: V,
    expanded: bool,
}

impl<V: NavView> MobileNav<V> {
    /// `expanded` is the state the page was rendered with.
    pub fn new(view: V, expanded: bool) -> Self {
        Self { view, expanded }
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    /// Flip the menu. Returns the new state.
    pub fn toggle(&mut self) -> bool {
        self.expanded = !self.expanded;
        self.view.set_expanded(self.expanded);
        self.expanded
    }

    /// A link inside the menu was followed.
    pub fn on_link_click(&mut self) {
        self.expanded = false;
        self.view.set_expanded(false);
    }
}

/// Value for the `aria-expanded` attribute.
pub fn aria_expanded(expanded: bool) -> &'static str {
    if expanded { "true" } else { "false" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder(Vec<bool>);

    impl NavView for Recorder {
        fn set_expanded(&mut self, expanded: bool) {
            self.0.push(expanded);
        }
    }

    #[test]
    fn test_toggle_flips_state() {
        let mut nav = MobileNav::new(Recorder::default(), false);
        assert!(nav.toggle());
        assert!(!nav.toggle());
        assert_eq!(nav.view().0, vec![true, false]);
    }

    #[test]
    fn test_link_click_closes() {
        let mut nav = MobileNav::new(Recorder::default(), true);
        nav.on_link_click();
        assert!(!nav.is_expanded());
        // Toggling after a close opens again
        assert!(nav.toggle());
    }

    #[test]
    fn test_aria_value() {
        assert_eq!(aria_expanded(true), "true");
        assert_eq!(aria_expanded(false), "false");
    }
}
