//! Input events for widgets.

use crate::geometry::Point;
use serde::{Deserialize, Serialize};

/// Pointer input event types.
///
/// The host translates its native mouse/touch streams into these and
/// dispatches them to the widget that owns the hit region. Widgets report
/// consumption through [`crate::Widget::event`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Event {
    /// Mouse moved to position
    MouseMove {
        /// New position
        position: Point,
    },
    /// Mouse button pressed
    MouseDown {
        /// Position of click
        position: Point,
        /// Button pressed
        button: MouseButton,
    },
    /// Mouse button released
    MouseUp {
        /// Position of release
        position: Point,
        /// Button released
        button: MouseButton,
    },
    /// Touch started
    TouchStart {
        /// Touch identifier
        id: TouchId,
        /// Touch position
        position: Point,
        /// Touch pressure (0.0 to 1.0)
        pressure: f32,
    },
    /// Touch moved
    TouchMove {
        /// Touch identifier
        id: TouchId,
        /// New position
        position: Point,
        /// Touch pressure
        pressure: f32,
    },
    /// Touch ended
    TouchEnd {
        /// Touch identifier
        id: TouchId,
        /// Final position
        position: Point,
    },
    /// Touch cancelled (e.g., palm rejection)
    TouchCancel {
        /// Touch identifier
        id: TouchId,
    },
}

impl Event {
    /// Position of the press-down phase, if this event is one.
    ///
    /// A left mouse button press and a touch start are the press-down phase;
    /// every other phase returns `None`.
    #[must_use]
    pub fn press_position(&self) -> Option<Point> {
        match self {
            Self::MouseDown {
                position,
                button: MouseButton::Left,
            }
            | Self::TouchStart { position, .. } => Some(*position),
            _ => None,
        }
    }
}

/// Touch identifier for multi-touch tracking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct TouchId(pub u32);

/// Mouse button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum MouseButton {
    /// Left button
    #[default]
    Left,
    /// Right button
    Right,
    /// Middle button
    Middle,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_position_left_mouse_down() {
        let event = Event::MouseDown {
            position: Point::new(10.0, 20.0),
            button: MouseButton::Left,
        };
        assert_eq!(event.press_position(), Some(Point::new(10.0, 20.0)));
    }

    #[test]
    fn test_press_position_touch_start() {
        let event = Event::TouchStart {
            id: TouchId(0),
            position: Point::new(5.0, 5.0),
            pressure: 1.0,
        };
        assert_eq!(event.press_position(), Some(Point::new(5.0, 5.0)));
    }

    #[test]
    fn test_press_position_rejects_other_phases() {
        let position = Point::new(1.0, 1.0);
        let not_presses = [
            Event::MouseMove { position },
            Event::MouseUp {
                position,
                button: MouseButton::Left,
            },
            Event::MouseDown {
                position,
                button: MouseButton::Right,
            },
            Event::TouchMove {
                id: TouchId(1),
                position,
                pressure: 0.5,
            },
            Event::TouchEnd {
                id: TouchId(1),
                position,
            },
            Event::TouchCancel { id: TouchId(1) },
        ];
        for event in not_presses {
            assert_eq!(event.press_position(), None, "{event:?}");
        }
    }

    #[test]
    fn test_event_serde_roundtrip() {
        let event = Event::TouchStart {
            id: TouchId(3),
            position: Point::new(12.0, 34.0),
            pressure: 0.75,
        };
        let json = serde_json::to_string(&event).expect("serialize");
        let back: Event = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, event);
    }
}
