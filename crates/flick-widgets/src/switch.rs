//! Animated on/off switch widget.
//!
//! A tap (or programmatic [`Switch::toggle`]) slides the thumb to the other
//! resting position over a fixed-duration timeline; the new status commits
//! and the registered listener fires only when the slide completes. Taps that
//! land while a slide is in flight are ignored.

use crate::style::SwitchStyle;
use flick_core::widget::LayoutResult;
use flick_core::{
    AccessibleRole, Animated, Canvas, Constraints, Event, Point, Rect, Size, TextStyle, Timeline,
    TypeId, Widget, WidgetId,
};
use std::fmt;

/// Fixed track width in pixels.
const TRACK_WIDTH: f32 = 200.0;
/// Fixed track height in pixels.
const TRACK_HEIGHT: f32 = 100.0;
/// Thumb radius; the thumb spans the full track height.
const THUMB_RADIUS: f32 = TRACK_HEIGHT / 2.0;
/// Horizontal distance between the two resting thumb centers.
const TRAVEL: f32 = TRACK_WIDTH - 2.0 * THUMB_RADIUS;
/// Slide duration in seconds.
const SLIDE_DURATION: f64 = 0.2;
/// Label size is 2/5 of the track height.
const LABEL_SIZE: f32 = TRACK_HEIGHT * 2.0 / 5.0;

/// Committed state of a switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Switch is on
    On,
    /// Switch is off
    Off,
}

impl Status {
    /// Whether this status is [`Status::On`].
    #[must_use]
    pub const fn is_on(self) -> bool {
        matches!(self, Self::On)
    }

    /// The opposite status.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::On => Self::Off,
            Self::Off => Self::On,
        }
    }
}

/// Notification delivered when a slide completes and the status commits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwitchChanged {
    /// The switch that changed
    pub widget: WidgetId,
    /// The committed state
    pub on: bool,
}

/// Listener invoked once per completed toggle, after the status commits.
type ChangeListener = Box<dyn FnMut(SwitchChanged)>;

/// Thumb motion state.
///
/// A slide always knows its target, so an animation without a destination is
/// unrepresentable. The committed status lives outside, on the widget.
#[derive(Debug, Clone, PartialEq)]
enum Motion {
    /// Thumb at rest
    Idle,
    /// Thumb sliding toward `target`
    Sliding {
        /// Status the slide commits on completion
        target: Status,
        /// Thumb center x when the slide started
        start_x: f32,
        /// Progress timeline
        timeline: Timeline,
    },
}

/// Animated on/off switch widget (fixed 200x100 track).
pub struct Switch {
    id: WidgetId,
    style: SwitchStyle,
    status: Status,
    motion: Motion,
    /// Thumb center x in track-local coordinates
    thumb_x: f32,
    /// Label baseline origin in track-local coordinates
    label_origin: Point,
    bounds: Rect,
    listener: Option<ChangeListener>,
}

impl Default for Switch {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Switch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Switch")
            .field("id", &self.id)
            .field("status", &self.status)
            .field("motion", &self.motion)
            .field("thumb_x", &self.thumb_x)
            .field("bounds", &self.bounds)
            .field("listener", &self.listener.is_some())
            .finish_non_exhaustive()
    }
}

impl Switch {
    /// Create a switch with the default style, off and at rest.
    #[must_use]
    pub fn new() -> Self {
        Self::with_style(SwitchStyle::default())
    }

    /// Create a switch with the given style, off and at rest.
    #[must_use]
    pub fn with_style(style: SwitchStyle) -> Self {
        let mut switch = Self {
            id: WidgetId::new(0),
            style,
            status: Status::Off,
            motion: Motion::Idle,
            thumb_x: Self::resting_x(Status::Off),
            label_origin: Point::ORIGIN,
            bounds: Rect::default(),
            listener: None,
        };
        switch.relayout_label();
        switch
    }

    /// Set the widget identifier reported in [`SwitchChanged`].
    #[must_use]
    pub fn id(mut self, id: WidgetId) -> Self {
        self.id = id;
        self
    }

    /// Set the initial state without animating.
    #[must_use]
    pub fn on(mut self, on: bool) -> Self {
        self.set_on(on);
        self
    }

    /// Register the change listener, replacing any previous registration.
    pub fn on_checked_change<F>(&mut self, listener: F)
    where
        F: FnMut(SwitchChanged) + 'static,
    {
        self.listener = Some(Box::new(listener));
    }

    /// Get the committed state.
    #[must_use]
    pub const fn is_on(&self) -> bool {
        self.status.is_on()
    }

    /// Get the committed status.
    #[must_use]
    pub const fn status(&self) -> Status {
        self.status
    }

    /// Get the style.
    #[must_use]
    pub const fn style(&self) -> &SwitchStyle {
        &self.style
    }

    /// Thumb center x in track-local coordinates.
    #[must_use]
    pub const fn thumb_position(&self) -> f32 {
        self.thumb_x
    }

    /// Start an animated toggle. Returns whether a slide started; a request
    /// made while a slide is in flight is ignored.
    pub fn toggle(&mut self) -> bool {
        if self.motion != Motion::Idle {
            return false;
        }
        self.motion = Motion::Sliding {
            target: self.status.toggled(),
            start_x: self.thumb_x,
            timeline: Timeline::new(SLIDE_DURATION),
        };
        true
    }

    /// Snap to a state without animating and without notifying the listener.
    ///
    /// Cancels any slide in flight; the host uses this for external resets
    /// and when detaching a mid-slide widget.
    pub fn set_on(&mut self, on: bool) {
        self.motion = Motion::Idle;
        self.status = if on { Status::On } else { Status::Off };
        self.thumb_x = Self::resting_x(self.status);
        self.relayout_label();
    }

    /// Resting thumb center for a status.
    const fn resting_x(status: Status) -> f32 {
        match status {
            Status::On => TRACK_WIDTH - THUMB_RADIUS,
            Status::Off => THUMB_RADIUS,
        }
    }

    /// Label for the committed status.
    fn label(&self) -> &str {
        match self.status {
            Status::On => &self.style.on_label,
            Status::Off => &self.style.off_label,
        }
    }

    fn label_style(&self) -> TextStyle {
        TextStyle {
            size: LABEL_SIZE,
            color: self.style.text,
            ..Default::default()
        }
    }

    /// Recompute the label baseline origin for the committed status.
    ///
    /// The label is centered in the track half opposite the thumb: the left
    /// half when on (thumb right), the right half when off. Idempotent for an
    /// unchanged status.
    fn relayout_label(&mut self) {
        let text_size = self.label_style().measure(self.label());
        let half = TRACK_WIDTH - 2.0 * THUMB_RADIUS;
        let x = match self.status {
            Status::On => (half - text_size.width) / 2.0,
            Status::Off => 2.0 * THUMB_RADIUS + (half - text_size.width) / 2.0,
        };
        let y = (TRACK_HEIGHT + text_size.height) / 2.0;
        self.label_origin = Point::new(x, y);
    }
}

impl Widget for Switch {
    fn type_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    fn measure(&self, constraints: Constraints) -> Size {
        constraints.resolve(Size::new(TRACK_WIDTH, TRACK_HEIGHT))
    }

    fn layout(&mut self, bounds: Rect) -> LayoutResult {
        self.bounds = bounds;
        LayoutResult {
            size: bounds.size(),
        }
    }

    fn paint(&self, canvas: &mut dyn Canvas) {
        let origin = self.bounds.origin();

        let track = Rect::new(origin.x, origin.y, TRACK_WIDTH, TRACK_HEIGHT);
        canvas.fill_rounded_rect(track, TRACK_HEIGHT / 2.0, self.style.background);

        let thumb_center = Point::new(origin.x + self.thumb_x, origin.y + THUMB_RADIUS);
        canvas.fill_circle(thumb_center, THUMB_RADIUS, self.style.thumb);

        // The label would collide with the moving thumb; hide it mid-slide.
        if self.motion == Motion::Idle {
            canvas.draw_text(
                self.label(),
                origin + self.label_origin,
                &self.label_style(),
            );
        }
    }

    fn event(&mut self, event: &Event) -> bool {
        if let Some(position) = event.press_position() {
            if self.bounds.contains_point(&position) {
                self.toggle();
            }
        }
        // Pointer events are consumed whether or not they started a slide.
        true
    }

    fn is_interactive(&self) -> bool {
        true
    }

    fn is_focusable(&self) -> bool {
        true
    }

    fn accessible_name(&self) -> Option<&str> {
        Some(self.label())
    }

    fn accessible_role(&self) -> AccessibleRole {
        AccessibleRole::Switch
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }
}

impl Animated for Switch {
    fn tick(&mut self, dt: f64) -> bool {
        let Motion::Sliding {
            target,
            start_x,
            ref mut timeline,
        } = self.motion
        else {
            return false;
        };

        timeline.update(dt);
        let eased = timeline.eased() as f32;
        let finished = timeline.is_complete();

        let displacement = if target.is_on() {
            TRAVEL * eased
        } else {
            -(TRAVEL * eased)
        };
        self.thumb_x = start_x + displacement;

        if finished {
            // Land exactly on the resting position, never an interpolant.
            self.thumb_x = Self::resting_x(target);
            self.status = target;
            self.motion = Motion::Idle;
            self.relayout_label();
            let changed = SwitchChanged {
                widget: self.id,
                on: self.status.is_on(),
            };
            if let Some(listener) = self.listener.as_mut() {
                listener(changed);
            }
        }
        true
    }

    fn is_animating(&self) -> bool {
        matches!(self.motion, Motion::Sliding { .. })
    }
}
