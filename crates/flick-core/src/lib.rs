//! Core types and traits for the Flick widget toolkit.
//!
//! This crate provides the seam between a widget and the host GUI framework:
//! - Geometric primitives: [`Point`], [`Size`], [`Rect`], [`CornerRadius`]
//! - Color representation: [`Color`] with WCAG contrast calculations
//! - Layout constraints: [`Constraints`] with per-axis resolution
//! - Pointer input events: [`Event`]
//! - Time-driven animation: [`Easing`], [`Timeline`], [`Animated`]
//! - The widget lifecycle: [`Widget`], [`Canvas`], [`draw::DrawCommand`]
//! - A recording backend for tests and serialization: [`RecordingCanvas`]
//!
//! Everything runs on the single thread that owns the widget tree; the host
//! drives the lifecycle (measure, layout, paint, event, tick) and nothing
//! here blocks or spawns.

mod animation;
mod canvas;
mod color;
mod constraints;
pub mod draw;
mod event;
mod geometry;
pub mod widget;

pub use animation::{Animated, Easing, Timeline};
pub use canvas::RecordingCanvas;
pub use color::{Color, ColorParseError};
pub use constraints::Constraints;
pub use event::{Event, MouseButton, TouchId};
pub use geometry::{CornerRadius, Point, Rect, Size};
pub use widget::{
    AccessibleRole, Canvas, FontStyle, FontWeight, LayoutResult, TextStyle, TypeId, Widget,
    WidgetId,
};
