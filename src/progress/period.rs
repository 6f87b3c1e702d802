// SPDX-License-Identifier: GPL-3.0-only

use chrono::{Datelike, Days, Months, NaiveDateTime, NaiveTime};

/// Calendar unit being tracked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimePeriod {
    Day,
    Week,
    Month,
    Year,
}

impl TimePeriod {
    /// All periods in display order.
    pub const ALL: [TimePeriod; 4] = [
        TimePeriod::Day,
        TimePeriod::Week,
        TimePeriod::Month,
        TimePeriod::Year,
    ];

    pub fn label(self) -> &'static str {
        match self {
            TimePeriod::Day => "Day",
            TimePeriod::Week => "Week",
            TimePeriod::Month => "Month",
            TimePeriod::Year => "Year",
        }
    }
}

/// Half-open range `[start, end)` of local wall-clock time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interval {
    start: NaiveDateTime,
    end: NaiveDateTime,
}

impl Interval {
    /// Panics if `end <= start`; every interval built here is one calendar
    /// unit long, so an empty one is a logic fault.
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        assert!(start < end, "interval end {end} must be after start {start}");
        Self { start, end }
    }

    pub fn start(&self) -> NaiveDateTime {
        self.start
    }

    pub fn end(&self) -> NaiveDateTime {
        self.end
    }

    #[cfg(test)]
    pub(crate) fn contains(&self, instant: NaiveDateTime) -> bool {
        self.start <= instant && instant < self.end
    }
}

/// Returns the interval of `period` that contains `now`.
///
/// Works purely on the calendar fields of `now`; no timezone conversion is
/// done, so the caller's local calendar is used as-is. Weeks start on Monday.
pub fn interval_for(now: NaiveDateTime, period: TimePeriod) -> Interval {
    let today = now.date();
    let midnight = today.and_time(NaiveTime::MIN);

    match period {
        TimePeriod::Day => Interval::new(midnight, midnight + Days::new(1)),
        TimePeriod::Week => {
            let offset = u64::from(today.weekday().num_days_from_monday());
            let start = midnight - Days::new(offset);
            Interval::new(start, start + Days::new(7))
        }
        TimePeriod::Month => {
            let start = midnight - Days::new(u64::from(today.day0()));
            Interval::new(start, start + Months::new(1))
        }
        TimePeriod::Year => {
            let start = midnight - Days::new(u64::from(today.ordinal0()));
            Interval::new(start, start + Months::new(12))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Weekday};

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .and_then(|date| date.and_hms_opt(h, min, s))
            .expect("valid test date")
    }

    #[test]
    fn day_spans_midnight_to_midnight() {
        let interval = interval_for(at(2024, 3, 15, 12, 0, 0), TimePeriod::Day);
        assert_eq!(interval.start(), at(2024, 3, 15, 0, 0, 0));
        assert_eq!(interval.end(), at(2024, 3, 16, 0, 0, 0));
    }

    #[test]
    fn week_starts_on_monday() {
        // 2024-03-15 is a Friday
        let interval = interval_for(at(2024, 3, 15, 12, 0, 0), TimePeriod::Week);
        assert_eq!(interval.start(), at(2024, 3, 11, 0, 0, 0));
        assert_eq!(interval.start().weekday(), Weekday::Mon);
        assert_eq!(interval.end(), at(2024, 3, 18, 0, 0, 0));
    }

    #[test]
    fn sunday_belongs_to_the_preceding_week() {
        let interval = interval_for(at(2024, 3, 17, 23, 59, 59), TimePeriod::Week);
        assert_eq!(interval.start(), at(2024, 3, 11, 0, 0, 0));
        assert_eq!(interval.end(), at(2024, 3, 18, 0, 0, 0));
    }

    #[test]
    fn week_can_cross_a_year_boundary() {
        // 2025-01-01 is a Wednesday
        let interval = interval_for(at(2025, 1, 1, 8, 0, 0), TimePeriod::Week);
        assert_eq!(interval.start(), at(2024, 12, 30, 0, 0, 0));
        assert_eq!(interval.end(), at(2025, 1, 6, 0, 0, 0));
    }

    #[test]
    fn month_rolls_december_into_january() {
        let interval = interval_for(at(2024, 12, 31, 23, 59, 59), TimePeriod::Month);
        assert_eq!(interval.start(), at(2024, 12, 1, 0, 0, 0));
        assert_eq!(interval.end(), at(2025, 1, 1, 0, 0, 0));
    }

    #[test]
    fn month_handles_leap_february() {
        let interval = interval_for(at(2024, 2, 29, 6, 0, 0), TimePeriod::Month);
        assert_eq!(interval.start(), at(2024, 2, 1, 0, 0, 0));
        assert_eq!(interval.end(), at(2024, 3, 1, 0, 0, 0));
    }

    #[test]
    fn year_spans_january_to_january() {
        let interval = interval_for(at(2024, 7, 4, 9, 30, 0), TimePeriod::Year);
        assert_eq!(interval.start(), at(2024, 1, 1, 0, 0, 0));
        assert_eq!(interval.end(), at(2025, 1, 1, 0, 0, 0));
    }

    #[test]
    fn every_period_contains_now() {
        let samples = [
            at(2024, 1, 1, 0, 0, 0),
            at(2024, 2, 29, 13, 37, 0),
            at(2023, 12, 31, 23, 59, 59),
            at(2025, 6, 30, 0, 0, 1),
        ];
        for now in samples {
            for period in TimePeriod::ALL {
                let interval = interval_for(now, period);
                assert!(interval.contains(now), "{period:?} interval must contain {now}");
            }
        }
    }

    #[test]
    #[should_panic]
    fn empty_interval_is_a_logic_fault() {
        let instant = at(2024, 1, 1, 0, 0, 0);
        Interval::new(instant, instant);
    }
}
