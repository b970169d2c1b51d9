use crate::catalog::NAV_LINKS;
use crate::config::PageConfig;

/// Vertical extent of a `section[id]`, in document pixels.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionSpan {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl SectionSpan {
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self { id: id.into(), top, height }
    }

    fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.top + self.height
    }
}

/// Everything the page derives from the window's scroll position.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScrollState {
    pub navbar_scrolled: bool,
    pub back_to_top_visible: bool,
    pub active_section: Option<String>,
}

impl ScrollState {
    /// Recomputes the flags for scroll offset `y`. The active section only
    /// moves when some linked section contains the probe point; otherwise
    /// the previous highlight stays.
    pub fn next(&self, y: f64, spans: &[SectionSpan], config: &PageConfig) -> ScrollState {
        let active = active_section(y + config.section_probe_offset, spans)
            .map(str::to_string)
            .or_else(|| self.active_section.clone());

        ScrollState {
            navbar_scrolled: y > config.navbar_scroll_threshold,
            back_to_top_visible: y > config.back_to_top_threshold,
            active_section: active,
        }
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active_section.as_deref() == Some(id)
    }
}

/// First section with a nav link whose span contains `probe`.
pub fn active_section(probe: f64, spans: &[SectionSpan]) -> Option<&str> {
    spans
        .iter()
        .filter(|span| NAV_LINKS.iter().any(|link| link.id == span.id))
        .find(|span| span.contains(probe))
        .map(|span| span.id.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page() -> Vec<SectionSpan> {
        vec![
            SectionSpan::new("home", 0.0, 700.0),
            SectionSpan::new("services", 700.0, 600.0),
            SectionSpan::new("newsletter", 1300.0, 200.0),
            SectionSpan::new("packages", 1500.0, 800.0),
        ]
    }

    #[test]
    fn thresholds_are_strict() {
        let config = PageConfig::default();
        let base = ScrollState::default();
        for (y, scrolled, visible) in [
            (0.0, false, false),
            (60.0, false, false),
            (60.5, true, false),
            (400.0, true, false),
            (401.0, true, true),
        ] {
            let next = base.next(y, &[], &config);
            assert_eq!(next.navbar_scrolled, scrolled, "navbar at {}", y);
            assert_eq!(next.back_to_top_visible, visible, "back-to-top at {}", y);
        }
    }

    #[test]
    fn probe_is_offset_by_config() {
        let config = PageConfig::default();
        // 620 + 100 lands inside services
        let next = ScrollState::default().next(620.0, &page(), &config);
        assert_eq!(next.active_section.as_deref(), Some("services"));
        assert!(next.is_active("services"));
        assert!(!next.is_active("home"));
    }

    #[test]
    fn unlinked_sections_keep_previous_highlight() {
        let config = PageConfig::default();
        let on_services = ScrollState::default().next(700.0, &page(), &config);
        let on_newsletter = on_services.next(1250.0, &page(), &config);
        assert_eq!(on_newsletter.active_section.as_deref(), Some("services"));
    }

    #[test]
    fn section_end_is_exclusive() {
        let spans = page();
        assert_eq!(active_section(699.9, &spans), Some("home"));
        assert_eq!(active_section(700.0, &spans), Some("services"));
    }
}
