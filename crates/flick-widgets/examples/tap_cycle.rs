//! Drives a switch through two full tap cycles without a host framework:
//! press event in, synthetic 60fps ticks, draw commands out.
//!
//! Run with `RUST_LOG=debug cargo run --example tap_cycle` to also see the
//! style-resolution logging.

use flick_core::{Animated, Event, MouseButton, Point, Rect, RecordingCanvas, Widget};
use flick_widgets::{Switch, SwitchAttrs, SwitchStyle};

fn main() {
    env_logger::init();

    let attrs = SwitchAttrs {
        on_label: Some("YES".to_string()),
        off_label: Some("NO".to_string()),
        ..Default::default()
    };
    let mut switch = Switch::with_style(SwitchStyle::from_attrs(attrs));
    switch.layout(Rect::new(0.0, 0.0, 200.0, 100.0));
    switch.on_checked_change(|changed| {
        println!("listener: checked changed to {}", changed.on);
    });

    for tap in 1..=2 {
        switch.event(&Event::MouseDown {
            position: Point::new(100.0, 50.0),
            button: MouseButton::Left,
        });
        println!("tap {tap}: sliding...");

        let mut frames = 0;
        while switch.is_animating() {
            switch.tick(1.0 / 60.0);
            frames += 1;
        }

        let mut canvas = RecordingCanvas::new();
        switch.paint(&mut canvas);
        println!(
            "tap {tap}: settled after {frames} frames, on={}, thumb_x={}, {} draw commands",
            switch.is_on(),
            switch.thumb_position(),
            canvas.command_count()
        );
    }
}
