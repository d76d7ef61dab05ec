//! The fully computed, renderer-agnostic description of one chart instance.
//!
//! All geometry is expressed with the chart center as origin; `center` gives
//! the translation into absolute surface coordinates.

use serde::{Deserialize, Serialize};

use crate::core::{PathCommand, Point, ValueDomain, Viewport};
use crate::render::Color;

use super::{LegendPosition, OpacityLevels};

/// One concentric gridline ring with its formatted value label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridRing {
    pub level: u32,
    pub radius: f64,
    pub label: String,
    pub label_anchor: Point,
}

/// One radial spoke: guide line, direction, and wrapped category label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisSpoke {
    pub index: usize,
    pub label: String,
    pub label_lines: Vec<String>,
    pub angle: f64,
    pub line_end: Point,
    pub label_anchor: Point,
}

/// One plotted vertex of a blob, with its hover tooltip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlobVertex {
    pub axis_index: usize,
    pub position: Point,
    pub value: f64,
    pub tooltip_text: String,
    pub tooltip_anchor: Point,
}

/// One series polygon overlay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesBlob {
    pub series_index: usize,
    pub series_id: String,
    pub name: String,
    pub path: Vec<PathCommand>,
    pub vertices: Vec<BlobVertex>,
    pub color: Color,
    /// False when any sample carries the missing-value marker; a click on a
    /// non-selectable blob never reaches the selection sink.
    pub selectable: bool,
    pub selection_element_id: Option<u64>,
}

/// One legend row, in dataset order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegendEntry {
    pub series_index: usize,
    pub label: String,
    pub color: Color,
}

/// Renderer-agnostic output of one layout pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderModel {
    pub viewport: Viewport,
    pub center: Point,
    pub outer_radius: f64,
    pub angle_slice: f64,
    pub domain: ValueDomain,
    pub levels: u32,
    pub dot_radius: f64,
    pub stroke_width: f64,
    /// Blob fill opacity per interaction state, for the host's
    /// dim/highlight policy.
    pub opacity: OpacityLevels,
    pub grid_rings: Vec<GridRing>,
    pub axes: Vec<AxisSpoke>,
    pub blobs: Vec<SeriesBlob>,
    /// Empty when the legend is suppressed.
    pub legend: Vec<LegendEntry>,
    pub legend_position: LegendPosition,
}

/// Static explanation shown instead of a chart that cannot be displayed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvalidChartNotice {
    pub message: String,
}

impl Default for InvalidChartNotice {
    fn default() -> Self {
        Self {
            message: "The chart is not displayed because there might be an error with the data \
                      or the measure."
                .to_owned(),
        }
    }
}

/// Result of one layout pass: a drawable model or the invalid-data notice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum LayoutOutcome {
    Chart(RenderModel),
    Invalid(InvalidChartNotice),
}

impl LayoutOutcome {
    #[must_use]
    pub fn as_chart(&self) -> Option<&RenderModel> {
        match self {
            Self::Chart(model) => Some(model),
            Self::Invalid(_) => None,
        }
    }

    #[must_use]
    pub fn is_invalid(&self) -> bool {
        matches!(self, Self::Invalid(_))
    }
}
