// SPDX-License-Identifier: GPL-3.0-only

//! Rasterised progress gauges.
//!
//! Every renderer acquires its own [`Canvas`], draws, and hands back a
//! [`RenderedImage`]. Nothing is shared between calls, so gauges may be
//! rendered from several threads at once.

mod bar;
mod glyphs;
mod ring;

pub use bar::{render_bar, BAR_HEIGHT};
pub use glyphs::{draw_text, text_width};
pub use ring::{arc_points, render_ring, RingGeometry, ARC_STEPS, MIN_LABELLED_DIAMETER};

use tiny_skia::{LineCap, LineJoin, Paint, Path, Pixmap, Rect, Stroke, Transform};

use crate::palette::Rgba;

/// Drawing surface scoped to a single render call.
pub struct Canvas {
    pixmap: Pixmap,
}

impl Canvas {
    /// Transparent surface, or `None` for zero or oversized dimensions.
    pub fn acquire(width: u32, height: u32) -> Option<Self> {
        Pixmap::new(width, height).map(|pixmap| Self { pixmap })
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    pub fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Rgba) {
        if width <= 0.0 || height <= 0.0 {
            return;
        }
        let Some(rect) = Rect::from_xywh(x, y, width, height) else {
            return;
        };
        self.pixmap
            .fill_rect(rect, &paint(color), Transform::identity(), None);
    }

    pub fn stroke_path(&mut self, path: &Path, color: Rgba, width: f32) {
        let stroke = Stroke {
            width,
            line_cap: LineCap::Butt,
            line_join: LineJoin::Round,
            ..Stroke::default()
        };
        self.pixmap
            .stroke_path(path, &paint(color), &stroke, Transform::identity(), None);
    }

    /// Releases the surface and returns its pixels.
    pub fn finish(self) -> RenderedImage {
        let width = self.pixmap.width();
        let height = self.pixmap.height();
        let pixels = self
            .pixmap
            .pixels()
            .iter()
            .flat_map(|pixel| {
                let c = pixel.demultiply();
                [c.red(), c.green(), c.blue(), c.alpha()]
            })
            .collect();

        RenderedImage {
            width,
            height,
            pixels,
        }
    }
}

fn paint(color: Rgba) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color(color.into());
    paint.anti_alias = true;
    paint
}

/// Straight-alpha RGBA8 pixel buffer, row-major.
#[derive(Debug, PartialEq, Eq)]
pub struct RenderedImage {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl RenderedImage {
    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    #[cfg(test)]
    pub(crate) fn pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = ((y * self.width + x) * 4) as usize;
        let px = &self.pixels[idx..idx + 4];
        Some(Rgba {
            r: px[0],
            g: px[1],
            b: px[2],
            a: px[3],
        })
    }

    /// Consumes the image, yielding its raw RGBA bytes.
    pub fn into_rgba(self) -> Vec<u8> {
        self.pixels
    }
}
