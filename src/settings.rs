// SPDX-License-Identifier: MPL-2.0
//! The viewer settings record and its permissive boolean parsing.
//!
//! A browser host reads these options from URL query parameters; the CLI
//! takes them as flags. The embedding front-end consumes the resolved record;
//! this crate only owns assembling it from persisted configuration and
//! command-line overrides.

use crate::config::Config;

/// Locator loaded when none is given on the command line or in the config.
pub const DEFAULT_PANO_LOCATOR: &str = "panos/default.jpg";

/// Resolved viewer options for one session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewerSettings {
    /// Invert the mouse-drag direction.
    pub alt_drag_direction: bool,
    /// Slowly auto-rotate the view until the user interacts.
    pub auto_rotate: bool,
    /// Accept images dragged and dropped onto the page.
    pub drag_drop: bool,
    /// Prefer device-orientation controls on mobile hosts.
    pub device_orientation: bool,
    /// Host is a mobile device.
    pub mobile: bool,
    /// Show the on-screen button UI.
    pub show_ui: bool,
    /// Run the immersive-VR render loop.
    pub vr: bool,
    /// Panorama locator (URL or file path).
    pub panorama: String,
}

impl Default for ViewerSettings {
    fn default() -> Self {
        Self {
            alt_drag_direction: false,
            auto_rotate: true,
            drag_drop: true,
            device_orientation: true,
            mobile: false,
            show_ui: true,
            vr: false,
            panorama: DEFAULT_PANO_LOCATOR.to_string(),
        }
    }
}

impl ViewerSettings {
    /// Builds settings from persisted configuration, falling back to the
    /// defaults above for anything unset. Command-line overrides are applied
    /// on top by the caller.
    pub fn from_config(config: &Config) -> Self {
        let defaults = Self::default();
        Self {
            alt_drag_direction: config
                .alt_drag_direction
                .unwrap_or(defaults.alt_drag_direction),
            auto_rotate: config.auto_rotate.unwrap_or(defaults.auto_rotate),
            drag_drop: config.drag_drop.unwrap_or(defaults.drag_drop),
            device_orientation: config
                .device_orientation
                .unwrap_or(defaults.device_orientation),
            mobile: defaults.mobile,
            show_ui: config.show_ui.unwrap_or(defaults.show_ui),
            vr: defaults.vr,
            panorama: config.panorama.clone().unwrap_or(defaults.panorama),
        }
    }
}

/// Parses the boolean literals accepted for viewer options: `1`, `true`,
/// and `y` (case-insensitive) are true, everything else is false.
pub fn parse_bool_literal(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "y"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_settings_favor_an_interactive_session() {
        let settings = ViewerSettings::default();
        assert!(!settings.alt_drag_direction);
        assert!(settings.auto_rotate);
        assert!(settings.drag_drop);
        assert!(settings.device_orientation);
        assert!(!settings.mobile);
        assert!(settings.show_ui);
        assert!(!settings.vr);
        assert_eq!(settings.panorama, DEFAULT_PANO_LOCATOR);
    }

    #[test]
    fn from_config_applies_persisted_values() {
        let config = Config {
            panorama: Some("panos/garden.jpg".to_string()),
            auto_rotate: Some(false),
            ..Default::default()
        };
        let settings = ViewerSettings::from_config(&config);
        assert_eq!(settings.panorama, "panos/garden.jpg");
        assert!(!settings.auto_rotate);
        assert!(settings.drag_drop); // unset falls back to default
    }

    #[test]
    fn bool_literal_accepts_the_three_true_forms() {
        assert!(parse_bool_literal("1"));
        assert!(parse_bool_literal("true"));
        assert!(parse_bool_literal("TRUE"));
        assert!(parse_bool_literal("y"));
        assert!(parse_bool_literal("Y"));
    }

    #[test]
    fn bool_literal_rejects_everything_else() {
        assert!(!parse_bool_literal("0"));
        assert!(!parse_bool_literal("false"));
        assert!(!parse_bool_literal("yes"));
        assert!(!parse_bool_literal(""));
        assert!(!parse_bool_literal("on"));
    }
}
