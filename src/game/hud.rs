// Health bars, countdown timer and game-over banner

use crate::core::math::Rect;
use crate::engine::renderer::{Color, DrawingSink, TextStyle};

pub const HEALTH_BAR_WIDTH: f32 = 400.0;
pub const HEALTH_BAR_HEIGHT: f32 = 20.0;
pub const HEALTH_BAR_Y: f32 = 10.0;
/// Gap between a bar and the canvas edge
pub const HEALTH_BAR_MARGIN: f32 = 10.0;
const HEALTH_BAR_OUTLINE: f32 = 5.0;

const TIMER_HEIGHT: f32 = 30.0;
/// Baseline of the timer text, just under the bars
pub const TIMER_Y: f32 = HEALTH_BAR_Y + HEALTH_BAR_HEIGHT + 10.0;
const TIMER_STYLE: TextStyle = TextStyle::new(24.0);
const TIMER_PADDING: f32 = 10.0;

const BANNER_STYLE: TextStyle = TextStyle::new(48.0);

fn empty_color() -> Color {
    Color::from_rgb8(0xff, 0x4d, 0x4d)
}

fn full_color() -> Color {
    Color::from_rgb8(0x66, 0xff, 0x66)
}

fn plate_color() -> Color {
    Color::WHITE.with_alpha(0.2)
}

/// Bar fill colour, red when empty through to green when full
pub fn health_color(fraction: f32) -> Color {
    empty_color().lerp(full_color(), fraction.clamp(0.0, 1.0))
}

/// Draw one health bar with its left edge at `x`
///
/// A `reverse` bar is anchored on its right edge so it drains towards the
/// centre of the screen.
pub fn draw_health_bar(
    sink: &mut dyn DrawingSink,
    health: i32,
    max_health: i32,
    x: f32,
    reverse: bool,
) {
    let frame = Rect::new(x, HEALTH_BAR_Y, HEALTH_BAR_WIDTH, HEALTH_BAR_HEIGHT);
    sink.fill_rect(frame, plate_color());

    let fraction = if max_health > 0 {
        health.max(0) as f32 / max_health as f32
    } else {
        0.0
    };
    let fill_width = fraction.min(1.0) * HEALTH_BAR_WIDTH;
    let fill_x = if reverse {
        x + (HEALTH_BAR_WIDTH - fill_width)
    } else {
        x
    };
    if fill_width > 0.0 {
        sink.fill_rect(
            Rect::new(fill_x, HEALTH_BAR_Y, fill_width, HEALTH_BAR_HEIGHT),
            health_color(fraction),
        );
    }

    sink.stroke_rect(frame, HEALTH_BAR_OUTLINE, Color::WHITE);
}

pub fn timer_text(seconds: u32) -> String {
    format!("Time Left: {seconds}s")
}

/// Draw the countdown centred horizontally on a translucent plate
pub fn draw_timer(sink: &mut dyn DrawingSink, seconds: u32, canvas_width: f32) {
    let text = timer_text(seconds);
    let text_width = sink.measure_text_width(&text, TIMER_STYLE);
    let text_x = canvas_width / 2.0 - text_width / 2.0;

    sink.fill_rect(
        Rect::new(
            text_x - TIMER_PADDING,
            TIMER_Y - TIMER_HEIGHT + 5.0,
            text_width + TIMER_PADDING * 2.0,
            TIMER_HEIGHT,
        ),
        plate_color(),
    );
    sink.draw_text(&text, text_x, TIMER_Y, TIMER_STYLE, Color::WHITE);
}

/// Draw `text` centred on the canvas over a dimmed backdrop
pub fn draw_banner(sink: &mut dyn DrawingSink, text: &str, canvas_width: f32, canvas_height: f32) {
    sink.fill_rect(
        Rect::new(0.0, 0.0, canvas_width, canvas_height),
        Color::BLACK.with_alpha(0.4),
    );
    let width = sink.measure_text_width(text, BANNER_STYLE);
    let baseline = canvas_height / 2.0 + BANNER_STYLE.size / 3.0;
    sink.draw_text(
        text,
        canvas_width / 2.0 - width / 2.0,
        baseline,
        BANNER_STYLE,
        Color::WHITE,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::renderer::recording::{DrawCommand, RecordingSink};

    #[test]
    fn test_health_color_endpoints() {
        assert_eq!(health_color(0.0).to_rgba8(), [0xff, 0x4d, 0x4d, 0xff]);
        assert_eq!(health_color(1.0).to_rgba8(), [0x66, 0xff, 0x66, 0xff]);
        assert_eq!(health_color(7.0), health_color(1.0));
    }

    #[test]
    fn test_left_bar_drains_from_right() {
        let mut sink = RecordingSink::new();
        draw_health_bar(&mut sink, 50, 100, 10.0, false);

        let fills = sink.fills();
        assert_eq!(fills.len(), 2);
        assert_eq!(fills[0].0, Rect::new(10.0, 10.0, 400.0, 20.0));
        assert_eq!(fills[1].0, Rect::new(10.0, 10.0, 200.0, 20.0));
        assert_eq!(sink.strokes(), vec![Rect::new(10.0, 10.0, 400.0, 20.0)]);
    }

    #[test]
    fn test_reversed_bar_drains_toward_centre() {
        let mut sink = RecordingSink::new();
        draw_health_bar(&mut sink, 25, 100, 614.0, true);
        assert_eq!(sink.fills()[1].0, Rect::new(914.0, 10.0, 100.0, 20.0));
    }

    #[test]
    fn test_empty_bar_has_no_fill() {
        let mut sink = RecordingSink::new();
        draw_health_bar(&mut sink, 0, 100, 10.0, false);
        assert_eq!(sink.fills().len(), 1);
    }

    #[test]
    fn test_timer_is_centred_on_plate() {
        let mut sink = RecordingSink::new();
        draw_timer(&mut sink, 30, 1024.0);

        // "Time Left: 30s" is 14 chars, measured at 12px each
        let text_width = 168.0;
        assert_eq!(
            sink.fills(),
            vec![(
                Rect::new(512.0 - 84.0 - 10.0, 15.0, text_width + 20.0, 30.0),
                Color::WHITE.with_alpha(0.2)
            )]
        );
        assert!(sink.commands.iter().any(|c| matches!(
            c,
            DrawCommand::Text { text, x, y, size, .. }
                if text == "Time Left: 30s" && *x == 428.0 && *y == 40.0 && *size == 24.0
        )));
    }

    #[test]
    fn test_banner_text() {
        let mut sink = RecordingSink::new();
        draw_banner(&mut sink, "Tie", 1024.0, 576.0);
        assert_eq!(sink.texts(), vec!["Tie"]);
    }
}
