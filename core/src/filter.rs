//! Tag filters for skill and project cards.

use folio_types::FILTER_SHOW_ALL;

use crate::marker::{Marker, Visibility};

/// Whether a card with `tags` is shown under `filter`.
pub fn matches(filter: &str, tags: &[String]) -> bool {
    filter == FILTER_SHOW_ALL || tags.iter().any(|t| t == filter)
}

/// Split a space-separated tag attribute.
pub fn parse_tags(attr: &str) -> Vec<String> {
    attr.split_whitespace().map(String::from).collect()
}

pub struct FilterButton<M> {
    pub value: String,
    pub marker: M,
}

pub struct FilterCard<V> {
    pub tags: Vec<String>,
    pub view: V,
}

/// One set of filter buttons and the cards they control.
pub struct FilterGroup<M: Marker, V: Visibility> {
    name: String,
    buttons: Vec<FilterButton<M>>,
    cards: Vec<FilterCard<V>>,
    selected: Option<usize>,
}

impl<M: Marker, V: Visibility> FilterGroup<M, V> {
    pub fn new(
        name: impl Into<String>,
        buttons: Vec<FilterButton<M>>,
        cards: Vec<FilterCard<V>>,
    ) -> Self {
        let name = name.into();
        if buttons.is_empty() || cards.is_empty() {
            tracing::debug!(group = %name, "Filter group disabled");
        }
        Self {
            name,
            buttons,
            cards,
            selected: None,
        }
    }

    pub fn is_enabled(&self) -> bool {
        !self.buttons.is_empty() && !self.cards.is_empty()
    }

    pub fn buttons(&self) -> &[FilterButton<M>] {
        &self.buttons
    }

    pub fn cards(&self) -> &[FilterCard<V>] {
        &self.cards
    }

    /// Value of the selected button.
    pub fn selected(&self) -> Option<&str> {
        self.selected
            .and_then(|idx| self.buttons.get(idx))
            .map(|b| b.value.as_str())
    }

    /// Activate button `idx` and hide every non-matching card.
    /// Returns the number of visible cards, or `None` if nothing changed.
    pub fn select(&mut self, idx: usize) -> Option<usize> {
        if !self.is_enabled() {
            return None;
        }
        let filter = self.buttons.get(idx)?.value.clone();

        for (i, button) in self.buttons.iter_mut().enumerate() {
            button.marker.set_active(i == idx);
        }
        self.selected = Some(idx);

        let mut visible = 0;
        for card in &mut self.cards {
            let show = matches(&filter, &card.tags);
            card.view.set_hidden(!show);
            visible += usize::from(show);
        }
        tracing::debug!(group = %self.name, filter = %filter, visible, "Filter applied");
        Some(visible)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::marker::ActiveFlag;

    fn group() -> FilterGroup<ActiveFlag, ActiveFlag> {
        let buttons = ["all", "rust", "design"]
            .into_iter()
            .map(|v| FilterButton {
                value: v.to_string(),
                marker: ActiveFlag::new(v),
            })
            .collect();
        let cards = [("cli", "rust systems"), ("brand", "design"), ("site", "design rust")]
            .into_iter()
            .map(|(label, tags)| FilterCard {
                tags: parse_tags(tags),
                view: ActiveFlag::new(label),
            })
            .collect();
        FilterGroup::new("skill", buttons, cards)
    }

    fn hidden(g: &FilterGroup<ActiveFlag, ActiveFlag>) -> Vec<&str> {
        g.cards()
            .iter()
            .filter(|c| c.view.hidden)
            .map(|c| c.view.label.as_str())
            .collect()
    }

    #[test]
    fn test_matches() {
        let tags = parse_tags("rust  wasm");
        assert!(matches("rust", &tags));
        assert!(matches("all", &tags));
        assert!(!matches("go", &tags));
        assert!(!matches("go", &[]));
    }

    #[test]
    fn test_tag_filter_hides_untagged_cards() {
        let mut g = group();
        assert_eq!(g.select(1), Some(2));
        assert_eq!(hidden(&g), vec!["brand"]);
        assert_eq!(g.selected(), Some("rust"));

        assert_eq!(g.select(2), Some(2));
        assert_eq!(hidden(&g), vec!["cli"]);
    }

    #[test]
    fn test_all_shows_every_card() {
        let mut g = group();
        g.select(2);
        assert_eq!(g.select(0), Some(3));
        assert!(hidden(&g).is_empty());
    }

    #[test]
    fn test_active_button_follows_selection() {
        let mut g = group();
        g.select(1);
        g.select(2);
        let active: Vec<_> = g
            .buttons()
            .iter()
            .filter(|b| b.marker.active)
            .map(|b| b.value.as_str())
            .collect();
        assert_eq!(active, vec!["design"]);
    }

    #[test]
    fn test_out_of_range_and_disabled() {
        let mut g = group();
        assert_eq!(g.select(9), None);
        assert!(hidden(&g).is_empty());

        let mut empty: FilterGroup<ActiveFlag, ActiveFlag> =
            FilterGroup::new("project", vec![], vec![]);
        assert!(!empty.is_enabled());
        assert_eq!(empty.select(0), None);
    }
}
