// SPDX-License-Identifier: GPL-3.0-only

//! Keeps rendered gauges around until their inputs change.

/// Resolution at which a fraction change triggers a redraw, in steps per unit.
const STEPS_PER_UNIT: f64 = 1000.0;

/// Quantizes `fraction` so that sub-pixel changes reuse the cached gauge.
pub fn progress_step(fraction: f64) -> u32 {
    (fraction.clamp(0.0, 1.0) * STEPS_PER_UNIT).floor() as u32
}

/// Single-entry cache keyed on the inputs the value was built from.
#[derive(Debug)]
pub struct RenderCache<K, T> {
    entry: Option<(K, T)>,
}

impl<K, T> Default for RenderCache<K, T> {
    fn default() -> Self {
        Self { entry: None }
    }
}

impl<K: PartialEq, T> RenderCache<K, T> {
    /// Rebuilds the value only when `key` differs from the cached one.
    /// Returns whether `build` ran.
    pub fn refresh(&mut self, key: K, build: impl FnOnce() -> T) -> bool {
        if matches!(&self.entry, Some((cached, _)) if *cached == key) {
            return false;
        }
        self.entry = Some((key, build()));
        true
    }

    pub fn get(&self) -> Option<&T> {
        self.entry.as_ref().map(|(_, value)| value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unchanged_key_reuses_the_value() {
        let mut cache = RenderCache::default();
        let mut builds = 0;

        assert!(cache.refresh(7u32, || {
            builds += 1;
            "first"
        }));
        assert!(!cache.refresh(7u32, || {
            builds += 1;
            "second"
        }));
        assert_eq!(builds, 1);
        assert_eq!(cache.get(), Some(&"first"));
    }

    #[test]
    fn changed_key_rebuilds() {
        let mut cache = RenderCache::default();
        cache.refresh((1u8, [0u32; 4]), || 1);
        assert!(cache.refresh((1u8, [0, 0, 0, 1]), || 2));
        assert_eq!(cache.get(), Some(&2));
    }

    #[test]
    fn empty_cache_has_no_value() {
        let cache: RenderCache<u32, u32> = RenderCache::default();
        assert!(cache.get().is_none());
    }

    #[test]
    fn steps_ignore_tiny_changes() {
        assert_eq!(progress_step(0.5), 500);
        assert_eq!(progress_step(0.50049), 500);
        assert_eq!(progress_step(0.501), 501);
        assert_eq!(progress_step(1.0), 1000);
        assert_eq!(progress_step(-0.2), 0);
    }
}
