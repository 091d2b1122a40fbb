//! Layout constraints for widgets.

use crate::geometry::Size;
use serde::{Deserialize, Serialize};

/// Layout constraints that specify minimum and maximum sizes.
///
/// A host that wants an exact size passes a tight axis (min == max); a host
/// that only caps the size passes a loose axis. Widgets resolve their final
/// size against these with [`Constraints::resolve_width`] and
/// [`Constraints::resolve_height`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Constraints {
    /// Minimum width
    pub min_width: f32,
    /// Maximum width
    pub max_width: f32,
    /// Minimum height
    pub min_height: f32,
    /// Maximum height
    pub max_height: f32,
}

impl Constraints {
    /// Create new constraints.
    #[must_use]
    pub const fn new(min_width: f32, max_width: f32, min_height: f32, max_height: f32) -> Self {
        Self {
            min_width,
            max_width,
            min_height,
            max_height,
        }
    }

    /// Create tight constraints that allow only the exact size.
    #[must_use]
    pub fn tight(size: Size) -> Self {
        Self::new(size.width, size.width, size.height, size.height)
    }

    /// Create loose constraints that allow any size up to the given maximum.
    #[must_use]
    pub fn loose(size: Size) -> Self {
        Self::new(0.0, size.width, 0.0, size.height)
    }

    /// Create unbounded constraints.
    #[must_use]
    pub fn unbounded() -> Self {
        Self::new(0.0, f32::INFINITY, 0.0, f32::INFINITY)
    }

    /// Constrain a size to fit within these constraints.
    #[must_use]
    pub fn constrain(&self, size: Size) -> Size {
        Size::new(
            size.width.clamp(self.min_width, self.max_width),
            size.height.clamp(self.min_height, self.max_height),
        )
    }

    /// Check if constraints specify an exact size.
    #[must_use]
    pub fn is_tight(&self) -> bool {
        self.min_width == self.max_width && self.min_height == self.max_height
    }

    /// Check if the width axis is exact.
    #[must_use]
    pub fn has_tight_width(&self) -> bool {
        self.min_width == self.max_width
    }

    /// Check if the height axis is exact.
    #[must_use]
    pub fn has_tight_height(&self) -> bool {
        self.min_height == self.max_height
    }

    /// Resolve a final width: an exact axis wins, otherwise the preferred
    /// width clamped into range.
    #[must_use]
    pub fn resolve_width(&self, preferred: f32) -> f32 {
        if self.has_tight_width() {
            self.max_width
        } else {
            preferred.clamp(self.min_width, self.max_width)
        }
    }

    /// Resolve a final height: an exact axis wins, otherwise the preferred
    /// height clamped into range.
    #[must_use]
    pub fn resolve_height(&self, preferred: f32) -> f32 {
        if self.has_tight_height() {
            self.max_height
        } else {
            preferred.clamp(self.min_height, self.max_height)
        }
    }

    /// Resolve both axes against a preferred size.
    #[must_use]
    pub fn resolve(&self, preferred: Size) -> Size {
        Size::new(
            self.resolve_width(preferred.width),
            self.resolve_height(preferred.height),
        )
    }
}

impl Default for Constraints {
    fn default() -> Self {
        Self::unbounded()
    }
}
