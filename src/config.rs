// SPDX-License-Identifier: GPL-3.0-only

use cosmic::cosmic_config::{self, cosmic_config_derive::CosmicConfigEntry, CosmicConfigEntry};
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

use crate::layout::LayoutSize;

pub const APP_ID: &str = "dev.timeprogress.CosmicAppletTimeProgress";

/// Accepted clock sampling intervals, in seconds
pub const REFRESH_INTERVAL_RANGE: RangeInclusive<u32> = 1..=3600;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, CosmicConfigEntry)]
#[version = 1]
pub struct TimeProgressConfig {
    /// Display size selector: "small", "medium" or "large"; anything else is large
    pub layout: String,
    /// Show the day percentage next to the panel ring
    pub show_percentage_text: bool,
    /// Seconds between clock samples
    pub refresh_interval_seconds: u32,
}

impl Default for TimeProgressConfig {
    fn default() -> Self {
        Self {
            layout: LayoutSize::default().as_selector().to_string(),
            show_percentage_text: false,
            refresh_interval_seconds: 60,
        }
    }
}

impl TimeProgressConfig {
    /// Clamp values to sensible ranges. The layout selector is left untouched.
    pub fn validate(&mut self) {
        self.refresh_interval_seconds = self
            .refresh_interval_seconds
            .clamp(*REFRESH_INTERVAL_RANGE.start(), *REFRESH_INTERVAL_RANGE.end());
    }

    pub fn layout_size(&self) -> LayoutSize {
        LayoutSize::from_selector(&self.layout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_large_layout() {
        let config = TimeProgressConfig::default();
        assert_eq!(config.layout, "large");
        assert_eq!(config.layout_size(), LayoutSize::Large);
    }

    #[test]
    fn validate_clamps_refresh_interval() {
        let mut config = TimeProgressConfig {
            refresh_interval_seconds: 0,
            ..Default::default()
        };
        config.validate();
        assert_eq!(config.refresh_interval_seconds, 1);

        config.refresh_interval_seconds = 86_400;
        config.validate();
        assert_eq!(config.refresh_interval_seconds, 3600);
    }

    #[test]
    fn every_valid_interval_is_kept() {
        for seconds in [*REFRESH_INTERVAL_RANGE.start(), 60, 300, 3600] {
            let mut config = TimeProgressConfig {
                refresh_interval_seconds: seconds,
                ..Default::default()
            };
            config.validate();
            assert_eq!(config.refresh_interval_seconds, seconds);
            assert!(REFRESH_INTERVAL_RANGE.contains(&seconds));
        }
        assert!(REFRESH_INTERVAL_RANGE.contains(&TimeProgressConfig::default().refresh_interval_seconds));
    }

    #[test]
    fn unknown_layout_is_kept_but_resolves_to_large() {
        let mut config = TimeProgressConfig {
            layout: "extra-large".to_string(),
            ..Default::default()
        };
        config.validate();
        assert_eq!(config.layout, "extra-large");
        assert_eq!(config.layout_size(), LayoutSize::Large);
    }
}
