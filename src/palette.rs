// SPDX-License-Identifier: GPL-3.0-only

use crate::progress::TimePeriod;

/// 8-bit straight-alpha colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const WHITE: Rgba = Rgba::rgb(0xFF, 0xFF, 0xFF);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xFF }
    }

    /// Same colour with its alpha replaced by `opacity` in `[0, 1]`.
    pub fn with_opacity(self, opacity: f32) -> Self {
        let a = (opacity.clamp(0.0, 1.0) * 255.0).round() as u8;
        Self { a, ..self }
    }

    #[cfg(test)]
    pub(crate) fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl From<Rgba> for tiny_skia::Color {
    fn from(c: Rgba) -> Self {
        tiny_skia::Color::from_rgba8(c.r, c.g, c.b, c.a)
    }
}

/// Widget background (#1C1C1E)
pub const BACKGROUND: Rgba = Rgba::rgb(0x1C, 0x1C, 0x1E);
/// Bar gauge track (#2C2C2E)
pub const BAR_TRACK: Rgba = Rgba::rgb(0x2C, 0x2C, 0x2E);
/// Caption labels
pub const LIGHT_GRAY: Rgba = Rgba::rgb(0xAA, 0xAA, 0xAA);

/// Per-period gauge colours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub day: Rgba,
    pub week: Rgba,
    pub month: Rgba,
    pub year: Rgba,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            day: Rgba::rgb(0xFF, 0x3B, 0x30),
            week: Rgba::rgb(0xFF, 0x95, 0x00),
            month: Rgba::rgb(0xAF, 0x52, 0xDE),
            year: Rgba::rgb(0x5A, 0xC8, 0xFA),
        }
    }
}

impl Palette {
    pub fn color(&self, period: TimePeriod) -> Rgba {
        match period {
            TimePeriod::Day => self.day,
            TimePeriod::Week => self.week,
            TimePeriod::Month => self.month,
            TimePeriod::Year => self.year,
        }
    }
}
