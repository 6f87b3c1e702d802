// SPDX-License-Identifier: GPL-3.0-only

use super::{Canvas, RenderedImage};
use crate::palette::{Rgba, BAR_TRACK};

pub const BAR_HEIGHT: u32 = 10;

/// Horizontal gauge `width` pixels wide: dark track, then a left-aligned
/// fill of `width * fraction`.
///
/// `fraction` is used as given; callers pass clamped values.
pub fn render_bar(fraction: f64, color: Rgba, width: u32) -> Option<RenderedImage> {
    let mut canvas = Canvas::acquire(width, BAR_HEIGHT)?;
    let (w, h) = (width as f32, BAR_HEIGHT as f32);

    canvas.fill_rect(0.0, 0.0, w, h, BAR_TRACK);
    canvas.fill_rect(0.0, 0.0, w * fraction as f32, h, color);

    Some(canvas.finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::Palette;

    #[test]
    fn bar_is_ten_pixels_tall() {
        let image = render_bar(0.3, Palette::default().day, 160).expect("bar");
        assert_eq!((image.width(), image.height()), (160, 10));
    }

    #[test]
    fn fill_covers_the_elapsed_share() {
        let color = Palette::default().week;
        let image = render_bar(0.5, color, 160).expect("bar");
        assert_eq!(image.pixel(0, 0), Some(color));
        assert_eq!(image.pixel(79, 9), Some(color));
        assert_eq!(image.pixel(80, 5), Some(BAR_TRACK));
        assert_eq!(image.pixel(159, 5), Some(BAR_TRACK));
    }

    #[test]
    fn empty_bar_shows_only_the_track() {
        let image = render_bar(0.0, Palette::default().month, 160).expect("bar");
        for x in [0, 80, 159] {
            assert_eq!(image.pixel(x, 5), Some(BAR_TRACK));
        }
    }

    #[test]
    fn full_bar_hides_the_track() {
        let color = Palette::default().year;
        let image = render_bar(1.0, color, 160).expect("bar");
        for x in [0, 80, 159] {
            assert_eq!(image.pixel(x, 5), Some(color));
        }
    }

    #[test]
    fn zero_width_bar_has_no_surface() {
        assert!(render_bar(0.5, Rgba::WHITE, 0).is_none());
    }
}
