use log::{info, warn, Level};
use serde::Deserialize;

use crate::error::PageError;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose while developing locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Id of the optional inline JSON block that overrides the defaults below.
pub const CONFIG_ELEMENT_ID: &str = "page-config";

/// Tunables for the page. Every field has a default, so an override block
/// only needs the keys it wants to change.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub navbar_scroll_threshold: f64,
    pub back_to_top_threshold: f64,
    pub section_probe_offset: f64,
    pub toast_duration_ms: u32,
    pub hero_scroll_delay_ms: u32,
    pub booking_delay_ms: u32,
    pub highlight_ms: u32,
    pub counter_steps: u32,
    pub counter_tick_ms: u32,
    pub reveal_threshold: f64,
    pub reveal_root_margin: String,
    pub stats_threshold: f64,
    pub booking_section: String,
    pub support_phone: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            navbar_scroll_threshold: 60.0,
            back_to_top_threshold: 400.0,
            section_probe_offset: 100.0,
            toast_duration_ms: 4000,
            hero_scroll_delay_ms: 1200,
            booking_delay_ms: 1800,
            highlight_ms: 1800,
            counter_steps: 60,
            counter_tick_ms: 25,
            reveal_threshold: 0.1,
            reveal_root_margin: "0px 0px -50px 0px".to_string(),
            stats_threshold: 0.5,
            booking_section: "booking".to_string(),
            support_phone: "+91 98765 43210".to_string(),
        }
    }
}

impl PageConfig {
    pub fn from_json(raw: &str) -> Result<Self, PageError> {
        let mut config: PageConfig = serde_json::from_str(raw)?;
        // A zero step count would divide by zero in the counter
        config.counter_steps = config.counter_steps.max(1);
        Ok(config)
    }

    /// Reads the inline override block if the page has one.
    pub fn load() -> Self {
        let raw = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());

        match raw {
            Some(raw) if !raw.trim().is_empty() => match Self::from_json(&raw) {
                Ok(config) => {
                    info!("Loaded page config from #{}", CONFIG_ELEMENT_ID);
                    config
                }
                Err(e) => {
                    warn!("Ignoring page config: {}", e);
                    Self::default()
                }
            },
            _ => {
                info!("Using default page config");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_override_keeps_other_defaults() {
        let config = PageConfig::from_json(r#"{"toast_duration_ms": 2500, "support_phone": "+91 11111 22222"}"#).unwrap();
        assert_eq!(config.toast_duration_ms, 2500);
        assert_eq!(config.support_phone, "+91 11111 22222");
        assert_eq!(config.navbar_scroll_threshold, 60.0);
        assert_eq!(config.booking_section, "booking");
    }

    #[test]
    fn empty_object_is_default() {
        assert_eq!(PageConfig::from_json("{}").unwrap(), PageConfig::default());
    }

    #[test]
    fn zero_counter_steps_is_clamped() {
        let config = PageConfig::from_json(r#"{"counter_steps": 0}"#).unwrap();
        assert_eq!(config.counter_steps, 1);
    }

    #[test]
    fn invalid_json_is_an_error() {
        let err = PageConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, PageError::Config(_)));
    }
}
