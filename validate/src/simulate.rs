//! Headless simulations on the manual clock.

use folio_core::marker::active_indices;
use folio_core::{
    ActiveFlag, Carousel, HighlightObserver, ManualClock, NavEntry, ObserverOptions, Rect,
};

/// Pointer event applied to the carousel wrapper during a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoverEvent {
    Enter,
    Leave,
}

/// Longest simulated run; longer requests are cut to one day.
pub const MAX_RUN_MS: u64 = 24 * 60 * 60 * 1000;

/// One line of simulation output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub at_ms: u64,
    pub what: String,
}

/// Run autoplay for `run_ms` with the given hover events, recording every
/// change of the active item and every hover transition.
pub fn run_carousel(
    items: usize,
    period_ms: u32,
    run_ms: u64,
    hovers: &[(u64, HoverEvent)],
) -> Vec<Step> {
    let flags = (0..items).map(|i| ActiveFlag::new(format!("#{i}"))).collect();
    let mut carousel = Carousel::initialize(flags, ManualClock::new(), period_ms);
    let mut steps = Vec::new();

    if run_ms > MAX_RUN_MS {
        tracing::warn!(run_ms, max = MAX_RUN_MS, "Run length clamped");
    }
    let run_ms = run_ms.min(MAX_RUN_MS);

    if !carousel.is_enabled() {
        steps.push(Step {
            at_ms: 0,
            what: "disabled (no items)".to_string(),
        });
        return steps;
    }
    steps.push(show_step(0, &carousel));

    let mut hovers = hovers.to_vec();
    hovers.sort_by_key(|(at, _)| *at);
    let mut pending = hovers.into_iter().peekable();

    loop {
        let now = carousel.timer().now_ms();
        let next_tick = carousel.timer().until_next_tick().map(|d| now + d);
        let next_hover = pending.peek().map(|(at, _)| (*at).max(now));
        let Some(next) = [next_tick, next_hover].into_iter().flatten().min() else {
            break;
        };
        if next > run_ms {
            break;
        }

        if carousel.advance_clock(next - now) > 0 {
            steps.push(show_step(next, &carousel));
        }

        while let Some(&(at, event)) = pending.peek() {
            if at > next {
                break;
            }
            pending.next();
            match event {
                HoverEvent::Enter => carousel.on_hover_enter(),
                HoverEvent::Leave => carousel.on_hover_leave(),
            }
            steps.push(Step {
                at_ms: next,
                what: format!(
                    "hover {} -> autoplay {:?}",
                    if event == HoverEvent::Enter { "enter" } else { "leave" },
                    carousel.autoplay()
                ),
            });
        }
    }

    steps
}

fn show_step(at_ms: u64, carousel: &Carousel<ActiveFlag, ManualClock>) -> Step {
    Step {
        at_ms,
        what: format!("show {:?}", active_indices(carousel.items())),
    }
}

/// Parse `id:top:height`.
pub fn parse_section(spec: &str) -> Result<(String, Rect), String> {
    let mut parts = spec.split(':');
    let (Some(id), Some(top), Some(height), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(format!("expected id:top:height, got '{spec}'"));
    };
    if id.is_empty() {
        return Err(format!("missing section id in '{spec}'"));
    }
    let top: f64 = top.parse().map_err(|_| format!("bad top '{top}' in '{spec}'"))?;
    let height: f64 = height
        .parse()
        .map_err(|_| format!("bad height '{height}' in '{spec}'"))?;
    Ok((id.to_string(), Rect::new(top, height)))
}

/// Scan the given sections once and return the highlighted section.
pub fn run_highlight(
    sections: &[(String, Rect)],
    viewport_height: f64,
    options: ObserverOptions,
) -> Option<String> {
    let ids = sections.iter().map(|(id, _)| id.clone()).collect();
    let nav = sections
        .iter()
        .map(|(id, _)| NavEntry::new(format!("#{id}"), ActiveFlag::new(id.clone())))
        .collect();
    let mut observer = HighlightObserver::new(ids, nav, options);
    observer
        .scan(sections.iter().map(|(id, rect)| (id.as_str(), *rect)), viewport_height)
        .map(String::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_types::HighlightConfig;

    fn lines(steps: &[Step]) -> Vec<(u64, &str)> {
        steps.iter().map(|s| (s.at_ms, s.what.as_str())).collect()
    }

    #[test]
    fn test_carousel_autoplay_run() {
        let steps = run_carousel(3, 1000, 3500, &[]);
        assert_eq!(
            lines(&steps),
            vec![
                (0, "show [0]"),
                (1000, "show [1]"),
                (2000, "show [2]"),
                (3000, "show [0]"),
            ]
        );
    }

    #[test]
    fn test_carousel_hover_pauses_and_restarts_period() {
        let steps = run_carousel(
            3,
            1000,
            3000,
            &[(1500, HoverEvent::Leave), (500, HoverEvent::Enter)],
        );
        assert_eq!(
            lines(&steps),
            vec![
                (0, "show [0]"),
                (500, "hover enter -> autoplay Paused"),
                (1500, "hover leave -> autoplay Running"),
                (2500, "show [1]"),
            ]
        );
    }

    #[test]
    fn test_carousel_without_items() {
        let steps = run_carousel(0, 1000, 5000, &[]);
        assert_eq!(lines(&steps), vec![(0, "disabled (no items)")]);
    }

    #[test]
    fn test_carousel_run_length_is_clamped() {
        let steps = run_carousel(2, 60_000, u64::MAX, &[]);
        assert_eq!(steps.len(), 1 + (MAX_RUN_MS / 60_000) as usize);
        assert_eq!(steps.last().map(|s| s.at_ms), Some(MAX_RUN_MS));
    }

    #[test]
    fn test_parse_section() {
        assert_eq!(
            parse_section("about:-120:800"),
            Ok(("about".to_string(), Rect::new(-120.0, 800.0)))
        );
        assert!(parse_section("about:1").is_err());
        assert!(parse_section("about:1:2:3").is_err());
        assert!(parse_section(":1:2").is_err());
        assert!(parse_section("about:x:2").is_err());
    }

    #[test]
    fn test_highlight_scan() {
        let sections = vec![
            ("about".to_string(), Rect::new(-700.0, 800.0)),
            ("skills".to_string(), Rect::new(100.0, 600.0)),
            ("projects".to_string(), Rect::new(700.0, 600.0)),
        ];
        let options = ObserverOptions::from(&HighlightConfig::default());
        assert_eq!(run_highlight(&sections, 1000.0, options), Some("skills".to_string()));
        assert_eq!(run_highlight(&sections[2..], 1000.0, options), None);
    }
}
