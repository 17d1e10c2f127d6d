//! Dial geometry and the canvas-backed speedometer component.
//!
//! The geometry helpers are pure functions of (value, max_value) so the
//! needle mapping is testable without a browser; `draw_gauge` replays
//! the whole drawing from a cleared surface on every change.

use std::f64::consts::PI;

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};
use yew::prelude::*;

use live_speedometer::defaults;

use crate::config::{
    ARC_COLOR, ARC_LINE_WIDTH, CANVAS_HEIGHT, CANVAS_WIDTH, CENTER_Y_FACTOR, DIAL_RADIUS,
    INK_COLOR, NEEDLE_LENGTH_FACTOR, NEEDLE_LINE_WIDTH, PIVOT_RADIUS, READOUT_FONT,
    READOUT_OFFSET, TICK_COUNT, TICK_FONT, TICK_LABEL_OFFSET, TICK_LENGTH,
};

/// Needle angle for a value on a dial sweeping [π, 2π].
///
/// Linear mapping, no clamping: `π + (value / max_value) · π`.
pub fn needle_angle(value: f64, max_value: f64) -> f64 {
    PI + (value / max_value) * PI
}

/// Clamp a value to the dial range so the needle never leaves the arc.
pub fn clamp_to_dial(value: f64, max_value: f64) -> f64 {
    value.clamp(0.0, max_value)
}

/// Point at `radius` along `angle` from the dial center.
pub fn point_on_dial(cx: f64, cy: f64, radius: f64, angle: f64) -> (f64, f64) {
    (cx + radius * angle.cos(), cy + radius * angle.sin())
}

/// (angle, label value) for each major tick, evenly spaced over the
/// half-circle from 0 to `max_value`.
pub fn tick_layout(max_value: f64) -> Vec<(f64, f64)> {
    (0..TICK_COUNT)
        .map(|i| {
            let frac = i as f64 / (TICK_COUNT - 1) as f64;
            (PI + frac * PI, frac * max_value)
        })
        .collect()
}

#[derive(Properties, PartialEq)]
pub struct SpeedometerProps {
    pub value: f64,
    #[prop_or(defaults::MAX_VALUE)]
    pub max_value: f64,
    pub units: AttrValue,
}

/// Analog half-circle dial drawn on a 2D canvas.
///
/// Redraws in full whenever (value, max_value, units) changes.
#[function_component(Speedometer)]
pub fn speedometer(props: &SpeedometerProps) -> Html {
    let canvas_ref = use_node_ref();

    {
        let canvas_ref = canvas_ref.clone();
        let value = props.value;
        let max_value = props.max_value;
        let units = props.units.clone();
        use_effect_with((value, max_value, units.clone()), move |_| {
            if let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() {
                draw_gauge(&canvas, value, max_value, &units);
            }
            || ()
        });
    }

    html! { <canvas ref={canvas_ref}></canvas> }
}

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()?
        .dyn_into::<CanvasRenderingContext2d>()
        .ok()
}

/// Full redraw: clear, background arc, ticks, needle, pivot, readout.
fn draw_gauge(canvas: &HtmlCanvasElement, value: f64, max_value: f64, units: &str) {
    canvas.set_width(CANVAS_WIDTH);
    canvas.set_height(CANVAS_HEIGHT);

    let Some(ctx) = context_2d(canvas) else {
        return;
    };

    let width = CANVAS_WIDTH as f64;
    let height = CANVAS_HEIGHT as f64;
    let cx = width / 2.0;
    let cy = height * CENTER_Y_FACTOR;

    ctx.clear_rect(0.0, 0.0, width, height);

    // Background arc
    ctx.begin_path();
    let _ = ctx.arc(cx, cy, DIAL_RADIUS, PI, 2.0 * PI);
    ctx.set_stroke_style_str(ARC_COLOR);
    ctx.set_line_width(ARC_LINE_WIDTH);
    ctx.stroke();

    // Major ticks with rotated labels just outside the arc
    ctx.set_font(TICK_FONT);
    ctx.set_text_align("center");
    ctx.set_stroke_style_str(INK_COLOR);
    ctx.set_fill_style_str(INK_COLOR);
    ctx.set_line_width(1.0);
    for (angle, label_value) in tick_layout(max_value) {
        let (x0, y0) = point_on_dial(cx, cy, DIAL_RADIUS, angle);
        let (x1, y1) = point_on_dial(cx, cy, DIAL_RADIUS + TICK_LENGTH, angle);
        ctx.begin_path();
        ctx.move_to(x0, y0);
        ctx.line_to(x1, y1);
        ctx.stroke();

        let (lx, ly) = point_on_dial(cx, cy, DIAL_RADIUS + TICK_LABEL_OFFSET, angle);
        ctx.save();
        let _ = ctx.translate(lx, ly);
        let _ = ctx.rotate(angle + PI / 2.0);
        let _ = ctx.fill_text(&format!("{:.0}", label_value), 0.0, 0.0);
        ctx.restore();
    }

    // Needle, clamped so it cannot be drawn past the dial ends
    let angle = needle_angle(clamp_to_dial(value, max_value), max_value);
    let (tip_x, tip_y) = point_on_dial(cx, cy, DIAL_RADIUS * NEEDLE_LENGTH_FACTOR, angle);
    ctx.begin_path();
    ctx.move_to(cx, cy);
    ctx.line_to(tip_x, tip_y);
    ctx.set_stroke_style_str(INK_COLOR);
    ctx.set_line_width(NEEDLE_LINE_WIDTH);
    ctx.stroke();

    // Pivot dot
    ctx.begin_path();
    let _ = ctx.arc(cx, cy, PIVOT_RADIUS, 0.0, 2.0 * PI);
    ctx.fill();

    // Readout beneath the pivot shows the unclamped value
    ctx.set_font(READOUT_FONT);
    ctx.set_text_align("center");
    let _ = ctx.fill_text(&format!("{:.1} {}", value, units), cx, cy + READOUT_OFFSET);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-12, "{} != {}", a, b);
    }

    #[test]
    fn needle_angle_maps_range_ends_and_midpoint() {
        let max = defaults::MAX_VALUE;
        assert_close(needle_angle(0.0, max), PI);
        assert_close(needle_angle(max, max), 2.0 * PI);
        assert_close(needle_angle(max / 2.0, max), 1.5 * PI);
    }

    #[test]
    fn needle_angle_is_unclamped_by_itself() {
        assert_close(needle_angle(300.0, 200.0), PI + 1.5 * PI);
        assert_close(needle_angle(-100.0, 200.0), PI - 0.5 * PI);
    }

    #[test]
    fn display_value_clamps_to_dial_range() {
        assert_eq!(clamp_to_dial(-5.0, 200.0), 0.0);
        assert_eq!(clamp_to_dial(250.0, 200.0), 200.0);
        assert_eq!(clamp_to_dial(42.0, 200.0), 42.0);
    }

    #[test]
    fn tick_layout_spans_the_half_circle() {
        let ticks = tick_layout(200.0);
        assert_eq!(ticks.len(), TICK_COUNT);
        assert_close(ticks[0].0, PI);
        assert_close(ticks[0].1, 0.0);
        assert_close(ticks[TICK_COUNT - 1].0, 2.0 * PI);
        assert_close(ticks[TICK_COUNT - 1].1, 200.0);
        // evenly spaced steps of max / 10
        assert_close(ticks[1].1 - ticks[0].1, 20.0);
    }

    #[test]
    fn point_on_dial_projects_along_the_angle() {
        let (x, y) = point_on_dial(200.0, 200.0, 90.0, PI);
        assert_close(x, 110.0);
        assert_close(y, 200.0);
        let (x, y) = point_on_dial(200.0, 200.0, 90.0, 1.5 * PI);
        assert_close(x, 200.0);
        assert_close(y, 110.0);
    }
}
