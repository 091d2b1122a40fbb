//! Switch appearance configuration.
//!
//! A [`SwitchStyle`] is immutable after construction. Hosts that carry
//! declarative styling resolve a [`SwitchAttrs`] (every field optional)
//! against the built-in defaults with [`SwitchStyle::from_attrs`]; hosts that
//! style in code use the builder setters.

use flick_core::Color;
use log::debug;
use serde::{Deserialize, Serialize};

/// Default label shown in the on state.
pub const DEFAULT_ON_LABEL: &str = "ON";
/// Default label shown in the off state.
pub const DEFAULT_OFF_LABEL: &str = "OFF";

/// Appearance configuration for a switch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwitchStyle {
    /// Track background color
    pub background: Color,
    /// Thumb color
    pub thumb: Color,
    /// Label text color
    pub text: Color,
    /// Label shown in the on state
    pub on_label: String,
    /// Label shown in the off state
    pub off_label: String,
}

impl Default for SwitchStyle {
    fn default() -> Self {
        Self {
            background: Color::GRAY,
            thumb: Color::LIGHT_GRAY,
            text: Color::WHITE,
            on_label: DEFAULT_ON_LABEL.to_string(),
            off_label: DEFAULT_OFF_LABEL.to_string(),
        }
    }
}

impl SwitchStyle {
    /// Create the default style.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve host-provided styling attributes against the defaults.
    ///
    /// Missing attributes fall back rather than fail.
    #[must_use]
    pub fn from_attrs(attrs: SwitchAttrs) -> Self {
        let defaults = Self::default();
        let style = Self {
            background: attrs.background.unwrap_or(defaults.background),
            thumb: attrs.thumb.unwrap_or(defaults.thumb),
            text: attrs.text.unwrap_or(defaults.text),
            on_label: attrs.on_label.unwrap_or(defaults.on_label),
            off_label: attrs.off_label.unwrap_or(defaults.off_label),
        };
        debug!(
            "resolved switch style: on={:?}, off={:?}",
            style.on_label, style.off_label
        );
        style
    }

    /// Set the track background color.
    #[must_use]
    pub const fn background(mut self, color: Color) -> Self {
        self.background = color;
        self
    }

    /// Set the thumb color.
    #[must_use]
    pub const fn thumb(mut self, color: Color) -> Self {
        self.thumb = color;
        self
    }

    /// Set the label text color.
    #[must_use]
    pub const fn text(mut self, color: Color) -> Self {
        self.text = color;
        self
    }

    /// Set the on-state label.
    #[must_use]
    pub fn on_label(mut self, label: impl Into<String>) -> Self {
        self.on_label = label.into();
        self
    }

    /// Set the off-state label.
    #[must_use]
    pub fn off_label(mut self, label: impl Into<String>) -> Self {
        self.off_label = label.into();
        self
    }
}

/// Host-provided styling attributes, each optional.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SwitchAttrs {
    /// Track background color
    #[serde(default)]
    pub background: Option<Color>,
    /// Thumb color
    #[serde(default)]
    pub thumb: Option<Color>,
    /// Label text color
    #[serde(default)]
    pub text: Option<Color>,
    /// Label shown in the on state
    #[serde(default)]
    pub on_label: Option<String>,
    /// Label shown in the off state
    #[serde(default)]
    pub off_label: Option<String>,
}
