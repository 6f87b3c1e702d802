// SPDX-License-Identifier: GPL-3.0-only

//! Calendar period boundaries and elapsed-time fractions.

mod period;

pub use period::{interval_for, Interval, TimePeriod};

use chrono::NaiveDateTime;

use crate::palette::{Palette, Rgba};

/// Elapsed share of `interval` at `now`, clamped to `[0, 1]`.
///
/// Instants before the interval give 0, instants at or after its end give 1.
pub fn fraction(now: NaiveDateTime, interval: &Interval) -> f64 {
    let elapsed = (now - interval.start()).num_milliseconds() as f64;
    let total = (interval.end() - interval.start()).num_milliseconds() as f64;
    (elapsed / total).clamp(0.0, 1.0)
}

/// `floor(fraction * 100)` as shown in every percentage label.
pub fn percent(fraction: f64) -> u32 {
    (fraction.clamp(0.0, 1.0) * 100.0).floor() as u32
}

/// One gauge worth of data, built fresh for each render pass.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressRecord {
    pub period: TimePeriod,
    pub label: &'static str,
    pub fraction: f64,
    pub color: Rgba,
}

impl ProgressRecord {
    pub fn percent_text(&self) -> String {
        format!("{}%", percent(self.fraction))
    }
}

/// Records for Day, Week, Month and Year, in that order.
pub fn progress_records(now: NaiveDateTime, palette: &Palette) -> [ProgressRecord; 4] {
    TimePeriod::ALL.map(|period| ProgressRecord {
        period,
        label: period.label(),
        fraction: fraction(now, &interval_for(now, period)),
        color: palette.color(period),
    })
}
