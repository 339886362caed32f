//! Projection output structures

use serde::{Deserialize, Serialize};

use crate::error::{ensure_finite_result, EngineResult};

/// Cumulative position at the end of one projection year
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionPoint {
    /// Projection year (1-indexed)
    pub period_index: u32,

    /// Cumulative amount invested
    pub contributed: f64,

    /// Portfolio value
    pub value: f64,

    /// value - contributed
    pub gain: f64,
}

impl ProjectionPoint {
    /// Create a point; gain is derived from value and contributed
    pub fn new(period_index: u32, contributed: f64, value: f64) -> Self {
        Self {
            period_index,
            contributed,
            value,
            gain: value - contributed,
        }
    }
}

/// Complete projection result: totals plus the yearly series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionSummary {
    pub total_contributed: f64,
    pub total_value: f64,
    pub total_gain: f64,

    /// One point per year, contiguous from year 1
    pub series: Vec<ProjectionPoint>,
}

impl ProjectionSummary {
    pub fn new(total_contributed: f64, total_value: f64) -> Self {
        Self {
            total_contributed,
            total_value,
            total_gain: total_value - total_contributed,
            series: Vec::new(),
        }
    }

    /// Summary whose totals are taken from the last point of the series
    pub fn from_series(series: Vec<ProjectionPoint>) -> Self {
        let (total_contributed, total_value) = series
            .last()
            .map(|p| (p.contributed, p.value))
            .unwrap_or((0.0, 0.0));

        Self {
            series,
            ..Self::new(total_contributed, total_value)
        }
    }

    /// Add a point to the series
    pub fn add_point(&mut self, point: ProjectionPoint) {
        self.series.push(point);
    }

    /// Fail if any total or point overflowed or became NaN
    pub fn ensure_finite(self) -> EngineResult<Self> {
        ensure_finite_result("total_contributed", self.total_contributed)?;
        ensure_finite_result("total_value", self.total_value)?;
        ensure_finite_result("total_gain", self.total_gain)?;
        for point in &self.series {
            ensure_finite_result("contributed", point.contributed)?;
            ensure_finite_result("value", point.value)?;
            ensure_finite_result("gain", point.gain)?;
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;

    #[test]
    fn test_gain_derived_from_value() {
        let point = ProjectionPoint::new(3, 180_000.0, 216_000.0);
        assert_eq!(point.gain, 36_000.0);
    }

    #[test]
    fn test_summary_from_series() {
        let summary = ProjectionSummary::from_series(vec![
            ProjectionPoint::new(1, 100.0, 110.0),
            ProjectionPoint::new(2, 200.0, 231.0),
        ]);
        assert_eq!(summary.total_contributed, 200.0);
        assert_eq!(summary.total_value, 231.0);
        assert_eq!(summary.total_gain, 31.0);
        assert_eq!(summary.series.len(), 2);
    }

    #[test]
    fn test_overflowed_point_is_rejected() {
        let mut summary = ProjectionSummary::new(100.0, 110.0);
        summary.add_point(ProjectionPoint::new(1, 100.0, 110.0));
        assert!(summary.clone().ensure_finite().is_ok());

        summary.add_point(ProjectionPoint::new(2, 200.0, f64::INFINITY));
        assert_eq!(summary.ensure_finite(), Err(EngineError::NonFiniteResult { field: "value" }));
    }

    #[test]
    fn test_empty_series() {
        let summary = ProjectionSummary::from_series(Vec::new());
        assert_eq!(summary.total_value, 0.0);
        assert!(summary.series.is_empty());
    }
}
