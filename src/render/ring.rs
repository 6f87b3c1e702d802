// SPDX-License-Identifier: GPL-3.0-only

use std::f64::consts::{FRAC_PI_2, TAU};

use tiny_skia::PathBuilder;
use tracing::debug;

use super::{draw_text, Canvas, RenderedImage};
use crate::palette::Rgba;
use crate::progress::percent;

/// Polyline segments used to approximate the progress arc.
pub const ARC_STEPS: usize = 120;

const TRACK_OPACITY: f32 = 0.25;
const MIN_STROKE: f32 = 8.0;

/// Below this diameter the label's glyph cells shrink under a pixel and the
/// ring is drawn without it.
pub const MIN_LABELLED_DIAMETER: u32 = 48;

/// Derived measurements of a ring gauge of a given diameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingGeometry {
    pub diameter: f32,
    pub stroke_width: f32,
    /// Radius of the stroke's centre line; the stroke sits fully inside the image.
    pub radius: f32,
    pub center: f32,
}

impl RingGeometry {
    pub fn new(diameter: u32) -> Self {
        let diameter = diameter as f32;
        let stroke_width = (diameter * 0.12).max(MIN_STROKE);
        Self {
            diameter,
            stroke_width,
            radius: (diameter - stroke_width) / 2.0,
            center: diameter / 2.0,
        }
    }

    pub fn font_size(&self) -> f32 {
        self.diameter * 0.22
    }

    /// Label band as `(x, y, width, height)`, centered vertically.
    pub fn label_band(&self) -> (f32, f32, f32, f32) {
        let height = self.diameter * 0.3;
        (0.0, self.center - height / 2.0, self.diameter, height)
    }
}

/// `ARC_STEPS + 1` points from 12 o'clock sweeping clockwise through
/// `fraction` of a full turn (screen coordinates, y down).
pub fn arc_points(geometry: &RingGeometry, fraction: f64) -> Vec<(f32, f32)> {
    let start = -FRAC_PI_2;
    let sweep = TAU * fraction;
    let (cx, cy, r) = (
        f64::from(geometry.center),
        f64::from(geometry.center),
        f64::from(geometry.radius),
    );

    (0..=ARC_STEPS)
        .map(|i| {
            let angle = start + sweep * (i as f64 / ARC_STEPS as f64);
            ((cx + r * angle.cos()) as f32, (cy + r * angle.sin()) as f32)
        })
        .collect()
}

/// Circular gauge of side `diameter` with a centered percentage label.
/// Rings smaller than [`MIN_LABELLED_DIAMETER`] carry no label.
///
/// Returns `None` only when no drawing surface of that size can be made.
pub fn render_ring(fraction: f64, color: Rgba, diameter: u32) -> Option<RenderedImage> {
    let mut canvas = Canvas::acquire(diameter, diameter)?;
    let geometry = RingGeometry::new(diameter);

    if let Some(track) =
        PathBuilder::from_circle(geometry.center, geometry.center, geometry.radius)
    {
        canvas.stroke_path(&track, color.with_opacity(TRACK_OPACITY), geometry.stroke_width);
    }

    let points = arc_points(&geometry, fraction);
    let mut builder = PathBuilder::new();
    for (i, &(x, y)) in points.iter().enumerate() {
        if i == 0 {
            builder.move_to(x, y);
        } else {
            builder.line_to(x, y);
        }
    }
    if fraction >= 1.0 {
        // full turn: join the ends instead of capping them
        builder.close();
    }
    let arc = if fraction > 0.0 { builder.finish() } else { None };
    match arc {
        Some(arc) => canvas.stroke_path(&arc, color, geometry.stroke_width),
        None => debug!(fraction, "empty progress arc"),
    }

    if diameter >= MIN_LABELLED_DIAMETER {
        draw_text(
            &mut canvas,
            &format!("{}%", percent(fraction)),
            geometry.font_size(),
            geometry.label_band(),
            Rgba::WHITE,
        );
    }

    Some(canvas.finish())
}
