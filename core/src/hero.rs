//! Rotating hero word.

use folio_types::HeroConfig;

/// Cycles through a fixed word list.
#[derive(Debug, Clone)]
pub struct HeroRotator {
    words: Vec<String>,
    index: usize,
    interval_ms: u32,
}

impl HeroRotator {
    pub fn new(config: &HeroConfig) -> Self {
        Self {
            words: config.words.clone(),
            index: 0,
            interval_ms: config.interval_ms,
        }
    }

    pub fn is_enabled(&self) -> bool {
        !self.words.is_empty()
    }

    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    /// Current word, then step to the following one.
    pub fn next_word(&mut self) -> Option<&str> {
        if self.words.is_empty() {
            return None;
        }
        let current = self.index;
        self.index = (self.index + 1) % self.words.len();
        self.words.get(current).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotation_starts_with_first_word_and_wraps() {
        let mut hero = HeroRotator::new(&HeroConfig::default());
        let seen: Vec<String> = (0..5)
            .filter_map(|_| hero.next_word().map(String::from))
            .collect();
        assert_eq!(seen, vec!["belonging", "signal", "feedback", "trust", "belonging"]);
        assert_eq!(hero.interval_ms(), 2100);
    }

    #[test]
    fn test_empty_word_list_is_disabled() {
        let config = HeroConfig {
            words: vec![],
            interval_ms: 2100,
        };
        let mut hero = HeroRotator::new(&config);
        assert!(!hero.is_enabled());
        assert_eq!(hero.next_word(), None);
    }
}
