// SPDX-License-Identifier: GPL-3.0-only

//! Built-in 5x7 bitmap glyphs for gauge labels.

use super::Canvas;
use crate::palette::Rgba;

const GLYPH_COLS: f32 = 5.0;
const GLYPH_ROWS: f32 = 7.0;
/// Glyph advance in cells, including one cell of tracking.
const ADVANCE_COLS: f32 = GLYPH_COLS + 1.0;
/// Cap height relative to the font size.
const CAP_HEIGHT: f32 = 0.7;
/// Horizontal overdraw of each lit cell, for a bold face.
const BOLD_SPREAD: f32 = 0.35;

fn cell_size(font_size: f32) -> f32 {
    font_size * CAP_HEIGHT / GLYPH_ROWS
}

/// Rendered width of `text` in pixels.
pub fn text_width(text: &str, font_size: f32) -> f32 {
    let count = text.chars().count() as f32;
    if count == 0.0 {
        return 0.0;
    }
    let cell = cell_size(font_size);
    (count * ADVANCE_COLS - 1.0) * cell
}

/// Draws `text` centered in the `(x, y, width, height)` box.
pub fn draw_text(
    canvas: &mut Canvas,
    text: &str,
    font_size: f32,
    bounds: (f32, f32, f32, f32),
    color: Rgba,
) {
    let (bx, by, bw, bh) = bounds;
    let cell = cell_size(font_size);
    let top = by + (bh - cell * GLYPH_ROWS) / 2.0;
    let mut pen = bx + (bw - text_width(text, font_size)) / 2.0;

    for ch in text.chars() {
        if let Some(rows) = glyph_rows(ch) {
            for (row_idx, row) in rows.iter().enumerate() {
                for (col_idx, lit) in row.chars().enumerate() {
                    if lit == ' ' {
                        continue;
                    }
                    canvas.fill_rect(
                        pen + col_idx as f32 * cell,
                        top + row_idx as f32 * cell,
                        cell * (1.0 + BOLD_SPREAD),
                        cell,
                        color,
                    );
                }
            }
        }
        pen += ADVANCE_COLS * cell;
    }
}

fn glyph_rows(ch: char) -> Option<&'static [&'static str; 7]> {
    match ch {
        '0' => Some(&[
            " ### ", "#   #", "#  ##", "# # #", "##  #", "#   #", " ### ",
        ]),
        '1' => Some(&[
            "  #  ", " ##  ", "# #  ", "  #  ", "  #  ", "  #  ", "#####",
        ]),
        '2' => Some(&[
            " ### ", "#   #", "    #", "   # ", "  #  ", " #   ", "#####",
        ]),
        '3' => Some(&[
            " ### ", "#   #", "    #", " ### ", "    #", "#   #", " ### ",
        ]),
        '4' => Some(&[
            "   # ", "  ## ", " # # ", "#  # ", "#####", "   # ", "   # ",
        ]),
        '5' => Some(&[
            "#####", "#    ", "#    ", "#### ", "    #", "#   #", " ### ",
        ]),
        '6' => Some(&[
            " ### ", "#   #", "#    ", "#### ", "#   #", "#   #", " ### ",
        ]),
        '7' => Some(&[
            "#####", "    #", "   # ", "  #  ", "  #  ", "  #  ", "  #  ",
        ]),
        '8' => Some(&[
            " ### ", "#   #", "#   #", " ### ", "#   #", "#   #", " ### ",
        ]),
        '9' => Some(&[
            " ### ", "#   #", "#   #", " ####", "    #", "#   #", " ### ",
        ]),
        '%' => Some(&[
            "##   ", "##  #", "   # ", "  #  ", " #   ", "#  ##", "   ##",
        ]),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_labels_are_fully_covered() {
        for ch in "0123456789%".chars() {
            let rows = glyph_rows(ch).expect("glyph");
            assert!(rows.iter().all(|row| row.len() == 5), "{ch} must be 5 wide");
        }
        assert!(glyph_rows('x').is_none());
    }

    #[test]
    fn width_scales_with_font_size() {
        assert_eq!(text_width("", 20.0), 0.0);
        let small = text_width("42%", 10.0);
        let large = text_width("42%", 20.0);
        assert!((large - small * 2.0).abs() < 1e-4);
        // three glyphs: 3 * 6 - 1 cells of 1.0 px each
        assert!((text_width("42%", 10.0) - 17.0).abs() < 1e-4);
    }

    #[test]
    fn text_is_drawn_inside_its_box() {
        let mut canvas = Canvas::acquire(60, 30).expect("canvas");
        draw_text(&mut canvas, "7", 20.0, (0.0, 0.0, 60.0, 30.0), Rgba::WHITE);
        let image = canvas.finish();

        // top bar of the 7 sits at the glyph's first row
        let cell = cell_size(20.0);
        let top = ((30.0 - cell * 7.0) / 2.0 + cell / 2.0) as u32;
        assert_eq!(image.pixel(30, top).map(|p| p.a), Some(255));
        assert_eq!(image.pixel(2, 2).map(|p| p.a), Some(0));
        assert_eq!(image.pixel(57, 27).map(|p| p.a), Some(0));
    }
}
