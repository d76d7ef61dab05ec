use serde::{Deserialize, Serialize};

use crate::error::{RadarError, RadarResult};

/// Hard cap on rendered axes; axes beyond it are silently dropped.
pub const MAX_AXIS_COUNT: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }

    #[must_use]
    pub fn aspect_ratio(self) -> f64 {
        f64::from(self.width) / f64::from(self.height)
    }
}

/// Pixel-space point, origin at the chart center.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn distance_to(self, other: Self) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }
}

/// One (axis, value) sample of a series.
///
/// `value` is not guaranteed finite; NaN encodes an absent measurement and
/// collapses to the chart center during layout. `missing` is the host's
/// explicit missing-value marker and gates selection, not geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisPoint {
    pub axis: String,
    pub value: f64,
    #[serde(default)]
    pub element_id: Option<u64>,
    #[serde(default)]
    pub missing: bool,
}

impl AxisPoint {
    #[must_use]
    pub fn new(axis: impl Into<String>, value: f64) -> Self {
        Self {
            axis: axis.into(),
            value,
            element_id: None,
            missing: false,
        }
    }

    #[must_use]
    pub fn with_element_id(mut self, element_id: u64) -> Self {
        self.element_id = Some(element_id);
        self
    }

    #[must_use]
    pub fn with_missing(mut self, missing: bool) -> Self {
        self.missing = missing;
        self
    }
}

/// One polygon overlay (blob): a display name, a stable identifier for
/// legend/selection correlation, and one sample per axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub name: String,
    pub id: String,
    pub points: Vec<AxisPoint>,
}

impl Series {
    #[must_use]
    pub fn new(name: impl Into<String>, id: impl Into<String>, points: Vec<AxisPoint>) -> Self {
        Self {
            name: name.into(),
            id: id.into(),
            points,
        }
    }

    /// True when any sample carries the host's missing-value marker.
    #[must_use]
    pub fn has_missing_point(&self) -> bool {
        self.points.iter().any(|point| point.missing)
    }

    /// Selection identifier of the series: its first sample's element id.
    #[must_use]
    pub fn selection_element_id(&self) -> Option<u64> {
        self.points.first().and_then(|point| point.element_id)
    }
}

fn default_dimension_count() -> usize {
    2
}

/// Ordered series collection; insertion order is render and legend order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadarDataset {
    series: Vec<Series>,
    /// Number of host dimensions driving series identity. A single
    /// dimension suppresses the legend.
    #[serde(default = "default_dimension_count")]
    dimension_count: usize,
}

impl RadarDataset {
    #[must_use]
    pub fn new(series: Vec<Series>) -> Self {
        Self {
            series,
            dimension_count: default_dimension_count(),
        }
    }

    #[must_use]
    pub fn with_dimension_count(mut self, dimension_count: usize) -> Self {
        self.dimension_count = dimension_count;
        self
    }

    #[must_use]
    pub fn series(&self) -> &[Series] {
        &self.series
    }

    #[must_use]
    pub fn dimension_count(&self) -> usize {
        self.dimension_count
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    /// Effective axis count: the first series' sample count, clamped to
    /// [`MAX_AXIS_COUNT`].
    #[must_use]
    pub fn axis_count(&self) -> usize {
        self.series
            .first()
            .map_or(0, |series| series.points.len().min(MAX_AXIS_COUNT))
    }

    /// Axis labels in axis order, taken from the first series.
    #[must_use]
    pub fn axis_labels(&self) -> Vec<&str> {
        self.series.first().map_or_else(Vec::new, |series| {
            series
                .points
                .iter()
                .take(self.axis_count())
                .map(|point| point.axis.as_str())
                .collect()
        })
    }

    /// Checks the cross-series shape invariants before layout.
    pub fn validate(&self) -> RadarResult<()> {
        let Some(first) = self.series.first() else {
            return Err(RadarError::InvalidData(
                "dataset contains no series".to_owned(),
            ));
        };

        for series in &self.series {
            if series.points.len() != first.points.len() {
                return Err(RadarError::InvalidData(format!(
                    "series `{}` has {} axes, expected {}",
                    series.id,
                    series.points.len(),
                    first.points.len()
                )));
            }
        }

        if self.axis_count() == 0 {
            return Err(RadarError::DegenerateGeometry { axis_count: 0 });
        }

        Ok(())
    }
}
