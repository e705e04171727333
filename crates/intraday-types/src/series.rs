//! Normalized, baseline-relative output.

use serde::{Deserialize, Serialize};

/// One plotted point: whole UTC epoch seconds and the close/baseline ratio.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NormalizedPoint {
    /// Seconds since the Unix epoch, truncated.
    pub epoch: i64,
    /// Close divided by the baseline close.
    pub ratio: f64,
}

impl NormalizedPoint {
    /// Creates a new point.
    #[must_use]
    pub const fn new(epoch: i64, ratio: f64) -> Self {
        Self { epoch, ratio }
    }
}

/// Baseline-relative series for one instrument.
///
/// Timestamps are strictly increasing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NormalizedSeries {
    points: Vec<NormalizedPoint>,
}

impl NormalizedSeries {
    /// Wraps points that are already strictly ordered by epoch.
    #[must_use]
    pub const fn from_sorted(points: Vec<NormalizedPoint>) -> Self {
        Self { points }
    }

    /// Returns the points.
    #[must_use]
    pub fn points(&self) -> &[NormalizedPoint] {
        &self.points
    }

    /// Returns the most recent point.
    #[must_use]
    pub fn last(&self) -> Option<&NormalizedPoint> {
        self.points.last()
    }

    /// Returns the number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true if the series has no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Iterates over the points.
    pub fn iter(&self) -> std::slice::Iter<'_, NormalizedPoint> {
        self.points.iter()
    }
}

impl<'a> IntoIterator for &'a NormalizedSeries {
    type Item = &'a NormalizedPoint;
    type IntoIter = std::slice::Iter<'a, NormalizedPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

/// Vertical plot range as `(min, max)` ratios.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SessionWindow {
    /// Lowest ratio.
    pub min: f64,
    /// Highest ratio.
    pub max: f64,
}

impl SessionWindow {
    /// The symmetric band every build starts from.
    pub const DEFAULT: Self = Self {
        min: 0.95,
        max: 1.05,
    };

    /// Creates a window.
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Returns this window stretched to include `ratio`. Never narrows.
    #[must_use]
    pub fn widen(self, ratio: f64) -> Self {
        Self {
            min: self.min.min(ratio),
            max: self.max.max(ratio),
        }
    }

    /// Returns the smallest window covering both. This is the fold step used
    /// to reduce per-instrument windows to one shared range.
    #[must_use]
    pub fn merge(self, other: Self) -> Self {
        Self {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    /// Returns true if `other` lies entirely inside this window.
    #[must_use]
    pub fn covers(&self, other: &Self) -> bool {
        self.min <= other.min && other.max <= self.max
    }
}

impl Default for SessionWindow {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl std::fmt::Display for SessionWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:.4}, {:.4}]", self.min, self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_widen_never_narrows() {
        let window = SessionWindow::DEFAULT.widen(1.0);
        assert_eq!(window, SessionWindow::DEFAULT);

        let window = window.widen(0.9).widen(1.2);
        assert_eq!(window, SessionWindow::new(0.9, 1.2));
    }

    #[test]
    fn test_merge_is_the_fold_step() {
        let windows = [
            SessionWindow::new(0.97, 1.10),
            SessionWindow::new(0.80, 1.01),
        ];
        let shared = windows
            .iter()
            .fold(SessionWindow::DEFAULT, |acc, w| acc.merge(*w));

        assert_eq!(shared, SessionWindow::new(0.80, 1.10));
        assert!(shared.covers(&SessionWindow::DEFAULT));
    }
}
