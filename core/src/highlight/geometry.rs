//! Viewport-band intersection predicate.
//!
//! Mirrors IntersectionObserver semantics for a root margin that only trims the
//! bottom of the viewport. Only the vertical axis matters for a single-column
//! page, so rectangles are reduced to `top` + `height`.

use folio_types::{HighlightConfig, RevealConfig};

/// Vertical extent of an element relative to the top of the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub top: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

/// Band and threshold for one observer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObserverOptions {
    /// Percentage trimmed from the bottom of the viewport
    pub bottom_margin_pct: f64,
    /// Minimum visible fraction of the target inside the band
    pub threshold: f64,
}

impl ObserverOptions {
    /// `rootMargin` string for the browser observer.
    pub fn root_margin(&self) -> String {
        format!("0px 0px -{}% 0px", self.bottom_margin_pct)
    }

    /// Bottom edge of the band for a viewport of `viewport_height`.
    pub fn band_bottom(&self, viewport_height: f64) -> f64 {
        viewport_height * (100.0 - self.bottom_margin_pct) / 100.0
    }

    /// Fraction of `rect` visible inside the band, in `[0, 1]`.
    pub fn ratio(&self, rect: Rect, viewport_height: f64) -> f64 {
        let band_bottom = self.band_bottom(viewport_height);
        if rect.height <= 0.0 {
            // Zero-area targets count as fully visible when inside the band
            let inside = rect.top >= 0.0 && rect.top <= band_bottom;
            return if inside { 1.0 } else { 0.0 };
        }
        let overlap = rect.bottom().min(band_bottom) - rect.top.max(0.0);
        (overlap.max(0.0) / rect.height).min(1.0)
    }

    /// Whether `rect` satisfies the predicate.
    pub fn is_intersecting(&self, rect: Rect, viewport_height: f64) -> bool {
        self.meets_threshold(self.ratio(rect, viewport_height))
    }

    /// Whether an already-measured ratio satisfies the predicate.
    pub fn meets_threshold(&self, ratio: f64) -> bool {
        ratio > 0.0 && ratio >= self.threshold
    }
}

impl From<&HighlightConfig> for ObserverOptions {
    fn from(config: &HighlightConfig) -> Self {
        Self {
            bottom_margin_pct: config.bottom_margin_pct,
            threshold: config.threshold,
        }
    }
}

impl From<&RevealConfig> for ObserverOptions {
    fn from(config: &RevealConfig) -> Self {
        Self {
            bottom_margin_pct: config.bottom_margin_pct,
            threshold: config.threshold,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn highlight() -> ObserverOptions {
        ObserverOptions::from(&HighlightConfig::default())
    }

    #[test]
    fn test_root_margin_string() {
        assert_eq!(highlight().root_margin(), "0px 0px -60% 0px");
        assert_eq!(
            ObserverOptions::from(&RevealConfig::default()).root_margin(),
            "0px 0px -8% 0px"
        );
    }

    #[test]
    fn test_band_is_top_forty_percent() {
        assert_eq!(highlight().band_bottom(1000.0), 400.0);
    }

    #[test]
    fn test_threshold_boundary() {
        let opts = highlight();
        // 120 of 400 px inside the band
        assert!(opts.is_intersecting(Rect::new(280.0, 400.0), 1000.0));
        // 116 of 400 px inside the band
        assert!(!opts.is_intersecting(Rect::new(284.0, 400.0), 1000.0));
    }

    #[test]
    fn test_section_below_band_is_not_intersecting() {
        let opts = highlight();
        // Fully on screen, but entirely in the bottom 60%
        let rect = Rect::new(500.0, 300.0);
        assert_eq!(opts.ratio(rect, 1000.0), 0.0);
        assert!(!opts.is_intersecting(rect, 1000.0));
    }

    #[test]
    fn test_section_scrolled_past_top() {
        let opts = highlight();
        // 1000 px tall section whose top is 800 px above the viewport
        let rect = Rect::new(-800.0, 1000.0);
        assert!((opts.ratio(rect, 1000.0) - 0.2).abs() < 1e-9);
        assert!(!opts.is_intersecting(rect, 1000.0));
    }

    #[test]
    fn test_zero_height_target() {
        let opts = highlight();
        assert_eq!(opts.ratio(Rect::new(100.0, 0.0), 1000.0), 1.0);
        assert_eq!(opts.ratio(Rect::new(900.0, 0.0), 1000.0), 0.0);
    }
}
