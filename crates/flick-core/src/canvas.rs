//! Canvas implementations for rendering.

use crate::draw::{BoxStyle, DrawCommand, StrokeStyle};
use crate::widget::{Canvas, TextStyle};
use crate::{Color, CornerRadius, Point, Rect};

/// A Canvas implementation that records draw operations as `DrawCommand`s.
///
/// This is useful for:
/// - Testing (verify what was painted)
/// - Serialization (send commands to a remote renderer)
/// - Diffing (compare render outputs)
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    commands: Vec<DrawCommand>,
}

impl RecordingCanvas {
    /// Create a new empty recording canvas.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the recorded draw commands.
    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Take ownership of the recorded commands, clearing the canvas.
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Get the number of recorded commands.
    #[must_use]
    pub fn command_count(&self) -> usize {
        self.commands.len()
    }

    /// Check if no commands have been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Clear all recorded commands.
    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl Canvas for RecordingCanvas {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::filled_rect(rect, color));
    }

    fn stroke_rect(&mut self, rect: Rect, color: Color, width: f32) {
        self.commands.push(DrawCommand::Rect {
            bounds: rect,
            radius: CornerRadius::ZERO,
            style: BoxStyle::stroke(StrokeStyle { color, width }),
        });
    }

    fn fill_rounded_rect(&mut self, rect: Rect, radius: f32, color: Color) {
        self.commands
            .push(DrawCommand::rounded_rect(rect, radius, color));
    }

    fn fill_circle(&mut self, center: Point, radius: f32, color: Color) {
        self.commands
            .push(DrawCommand::filled_circle(center, radius, color));
    }

    fn draw_text(&mut self, text: &str, position: Point, style: &TextStyle) {
        self.commands.push(DrawCommand::Text {
            content: text.to_string(),
            position,
            style: style.clone(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_canvas_new() {
        let canvas = RecordingCanvas::new();
        assert!(canvas.is_empty());
        assert_eq!(canvas.command_count(), 0);
    }

    #[test]
    fn test_fill_rect() {
        let mut canvas = RecordingCanvas::new();
        canvas.fill_rect(Rect::new(10.0, 20.0, 100.0, 50.0), Color::GRAY);

        assert_eq!(canvas.command_count(), 1);
        match &canvas.commands()[0] {
            DrawCommand::Rect { bounds, style, .. } => {
                assert_eq!(bounds.x, 10.0);
                assert_eq!(bounds.y, 20.0);
                assert_eq!(bounds.width, 100.0);
                assert_eq!(bounds.height, 50.0);
                assert_eq!(style.fill, Some(Color::GRAY));
            }
            _ => panic!("Expected Rect command"),
        }
    }

    #[test]
    fn test_stroke_rect() {
        let mut canvas = RecordingCanvas::new();
        canvas.stroke_rect(Rect::new(0.0, 0.0, 50.0, 50.0), Color::WHITE, 2.0);

        assert_eq!(canvas.command_count(), 1);
        match &canvas.commands()[0] {
            DrawCommand::Rect { style, .. } => {
                assert!(style.fill.is_none());
                let stroke = style.stroke.as_ref().expect("stroke present");
                assert_eq!(stroke.color, Color::WHITE);
                assert_eq!(stroke.width, 2.0);
            }
            _ => panic!("Expected Rect command"),
        }
    }

    #[test]
    fn test_fill_rounded_rect() {
        let mut canvas = RecordingCanvas::new();
        canvas.fill_rounded_rect(Rect::new(0.0, 0.0, 200.0, 100.0), 50.0, Color::GRAY);

        assert_eq!(canvas.command_count(), 1);
        match &canvas.commands()[0] {
            DrawCommand::Rect { radius, style, .. } => {
                assert_eq!(radius.top_left, 50.0);
                assert!(radius.is_uniform());
                assert_eq!(style.fill, Some(Color::GRAY));
            }
            _ => panic!("Expected Rect command"),
        }
    }

    #[test]
    fn test_fill_circle() {
        let mut canvas = RecordingCanvas::new();
        canvas.fill_circle(Point::new(50.0, 50.0), 25.0, Color::LIGHT_GRAY);

        assert_eq!(canvas.command_count(), 1);
        match &canvas.commands()[0] {
            DrawCommand::Circle {
                center,
                radius,
                style,
            } => {
                assert_eq!(*center, Point::new(50.0, 50.0));
                assert_eq!(*radius, 25.0);
                assert_eq!(style.fill, Some(Color::LIGHT_GRAY));
            }
            _ => panic!("Expected Circle command"),
        }
    }

    #[test]
    fn test_draw_text() {
        let mut canvas = RecordingCanvas::new();
        let style = TextStyle {
            size: 40.0,
            color: Color::WHITE,
            ..Default::default()
        };
        canvas.draw_text("ON", Point::new(25.0, 70.0), &style);

        assert_eq!(canvas.command_count(), 1);
        match &canvas.commands()[0] {
            DrawCommand::Text {
                content,
                position,
                style: text_style,
            } => {
                assert_eq!(content, "ON");
                assert_eq!(position.x, 25.0);
                assert_eq!(position.y, 70.0);
                assert_eq!(text_style.size, 40.0);
                assert_eq!(text_style.color, Color::WHITE);
            }
            _ => panic!("Expected Text command"),
        }
    }

    #[test]
    fn test_multiple_commands_order() {
        let mut canvas = RecordingCanvas::new();

        canvas.fill_rounded_rect(Rect::new(0.0, 0.0, 200.0, 100.0), 50.0, Color::GRAY);
        canvas.fill_circle(Point::new(50.0, 50.0), 50.0, Color::LIGHT_GRAY);
        canvas.draw_text("ON", Point::new(125.0, 70.0), &TextStyle::default());

        assert_eq!(canvas.command_count(), 3);
        assert!(matches!(canvas.commands()[0], DrawCommand::Rect { .. }));
        assert!(matches!(canvas.commands()[1], DrawCommand::Circle { .. }));
        assert!(matches!(canvas.commands()[2], DrawCommand::Text { .. }));
    }

    #[test]
    fn test_take_commands() {
        let mut canvas = RecordingCanvas::new();
        canvas.fill_rect(Rect::new(0.0, 0.0, 10.0, 10.0), Color::GRAY);
        canvas.fill_rect(Rect::new(20.0, 20.0, 10.0, 10.0), Color::WHITE);

        assert_eq!(canvas.command_count(), 2);

        let commands = canvas.take_commands();
        assert_eq!(commands.len(), 2);
        assert!(canvas.is_empty());
    }

    #[test]
    fn test_clear() {
        let mut canvas = RecordingCanvas::new();
        canvas.fill_rect(Rect::new(0.0, 0.0, 10.0, 10.0), Color::GRAY);
        assert!(!canvas.is_empty());

        canvas.clear();
        assert!(canvas.is_empty());
    }

    #[test]
    fn test_empty_text_recorded() {
        let mut canvas = RecordingCanvas::new();
        canvas.draw_text("", Point::ORIGIN, &TextStyle::default());
        assert_eq!(canvas.command_count(), 1);
        match &canvas.commands()[0] {
            DrawCommand::Text { content, .. } => assert!(content.is_empty()),
            _ => panic!("Expected Text command"),
        }
    }

    #[test]
    fn test_zero_radius_circle_recorded() {
        let mut canvas = RecordingCanvas::new();
        canvas.fill_circle(Point::new(50.0, 50.0), 0.0, Color::GRAY);
        assert_eq!(canvas.command_count(), 1);
    }
}
