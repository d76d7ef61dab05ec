use serde::{Deserialize, Serialize};

use crate::core::{DisplayFormat, DomainSpec, Viewport};

use super::SeriesPalette;

/// Margins around the chart circle, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Margins {
    #[must_use]
    pub const fn uniform(value: f64) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }
}

impl Default for Margins {
    fn default() -> Self {
        Self::uniform(100.0)
    }
}

/// Legend placement from the top-left corner of the drawing surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LegendPosition {
    pub x: f64,
    pub y: f64,
}

impl Default for LegendPosition {
    fn default() -> Self {
        Self { x: 20.0, y: 20.0 }
    }
}

/// Blob fill opacity per interaction state plus the grid-circle fill.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OpacityLevels {
    /// Grid circle fill.
    pub circle: f64,
    /// Blob fill at rest.
    pub area: f64,
    /// Blob fill while another blob is highlighted.
    pub area_out: f64,
    /// Blob fill while hovered.
    pub area_over: f64,
}

impl Default for OpacityLevels {
    fn default() -> Self {
        Self {
            circle: 0.1,
            area: 0.35,
            area_out: 0.1,
            area_over: 0.6,
        }
    }
}

/// Outline shape of a series blob.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum StrokeShape {
    /// Straight segments between vertices.
    #[default]
    Straight,
    /// Closed cardinal spline through the vertices.
    Smoothed,
}

fn default_size() -> Viewport {
    Viewport::new(450, 450)
}

fn default_max_value() -> f64 {
    1.0
}

fn default_auto_range() -> bool {
    true
}

fn default_levels() -> u32 {
    5
}

fn default_dot_radius() -> f64 {
    4.0
}

fn default_label_factor() -> f64 {
    1.25
}

fn default_wrap_width() -> f64 {
    100.0
}

fn default_stroke_width() -> f64 {
    1.5
}

fn default_smoothing_tension() -> f64 {
    0.7
}

fn default_true() -> bool {
    true
}

/// Fully-defaulted chart configuration, read once per render.
///
/// This type is serializable so host applications can persist/load chart
/// setup without inventing their own ad-hoc format. Unknown keys in a
/// serialized form are ignored on load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadarChartConfig {
    #[serde(default = "default_size")]
    pub size: Viewport,
    #[serde(default)]
    pub margin: Margins,
    #[serde(default)]
    pub legend_position: LegendPosition,
    #[serde(default)]
    pub palette: SeriesPalette,
    #[serde(default)]
    pub opacity: OpacityLevels,
    #[serde(default)]
    pub stroke_shape: StrokeShape,
    #[serde(default = "default_smoothing_tension")]
    pub smoothing_tension: f64,
    /// Auto-range ceiling: the largest grid circle represents at least this.
    #[serde(default = "default_max_value")]
    pub max_value: f64,
    #[serde(default = "default_auto_range")]
    pub auto_range: bool,
    /// Pinned domain maximum, used when `auto_range` is off.
    #[serde(default)]
    pub fixed_max: Option<f64>,
    /// Pinned domain minimum, used when `auto_range` is off.
    #[serde(default)]
    pub fixed_min: Option<f64>,
    #[serde(default = "default_levels")]
    pub levels: u32,
    #[serde(default = "default_dot_radius")]
    pub dot_radius: f64,
    /// How much farther than the outer ring the axis labels sit.
    #[serde(default = "default_label_factor")]
    pub label_factor: f64,
    /// Pixel width after which an axis label wraps to a new line.
    #[serde(default = "default_wrap_width")]
    pub wrap_width: f64,
    #[serde(default = "default_stroke_width")]
    pub stroke_width: f64,
    #[serde(default = "default_true")]
    pub legend_display: bool,
    #[serde(default = "default_true")]
    pub interactions_enabled: bool,
    #[serde(default)]
    pub display_format: DisplayFormat,
}

impl Default for RadarChartConfig {
    fn default() -> Self {
        Self {
            size: default_size(),
            margin: Margins::default(),
            legend_position: LegendPosition::default(),
            palette: SeriesPalette::default(),
            opacity: OpacityLevels::default(),
            stroke_shape: StrokeShape::default(),
            smoothing_tension: default_smoothing_tension(),
            max_value: default_max_value(),
            auto_range: default_auto_range(),
            fixed_max: None,
            fixed_min: None,
            levels: default_levels(),
            dot_radius: default_dot_radius(),
            label_factor: default_label_factor(),
            wrap_width: default_wrap_width(),
            stroke_width: default_stroke_width(),
            legend_display: true,
            interactions_enabled: true,
            display_format: DisplayFormat::default(),
        }
    }
}

impl RadarChartConfig {
    #[must_use]
    pub fn with_size(mut self, size: Viewport) -> Self {
        self.size = size;
        self
    }

    #[must_use]
    pub fn with_palette(mut self, palette: SeriesPalette) -> Self {
        self.palette = palette;
        self
    }

    #[must_use]
    pub fn with_stroke_shape(mut self, stroke_shape: StrokeShape) -> Self {
        self.stroke_shape = stroke_shape;
        self
    }

    #[must_use]
    pub fn with_fixed_range(mut self, min: f64, max: f64) -> Self {
        self.auto_range = false;
        self.fixed_min = Some(min);
        self.fixed_max = Some(max);
        self
    }

    #[must_use]
    pub fn with_display_format(mut self, display_format: DisplayFormat) -> Self {
        self.display_format = display_format;
        self
    }

    /// Domain derivation implied by the range fields.
    #[must_use]
    pub fn domain_spec(&self) -> DomainSpec {
        if self.auto_range {
            DomainSpec::Auto {
                ceiling: self.max_value,
            }
        } else {
            DomainSpec::Fixed {
                min: self.fixed_min.unwrap_or(f64::NAN),
                max: self.fixed_max.unwrap_or(f64::NAN),
            }
        }
    }
}

/// Partial configuration override supplied by the host per render.
///
/// Only recognized fields are copied onto the defaults; everything left
/// `None` keeps its current value. Unknown keys in a serialized form are
/// dropped, not stored.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RadarChartOptions {
    #[serde(default)]
    pub size: Option<Viewport>,
    #[serde(default)]
    pub margin: Option<Margins>,
    #[serde(default)]
    pub legend_position: Option<LegendPosition>,
    #[serde(default)]
    pub palette: Option<SeriesPalette>,
    #[serde(default)]
    pub opacity: Option<OpacityLevels>,
    #[serde(default)]
    pub stroke_shape: Option<StrokeShape>,
    #[serde(default)]
    pub smoothing_tension: Option<f64>,
    #[serde(default)]
    pub max_value: Option<f64>,
    #[serde(default)]
    pub auto_range: Option<bool>,
    #[serde(default)]
    pub fixed_max: Option<f64>,
    #[serde(default)]
    pub fixed_min: Option<f64>,
    #[serde(default)]
    pub levels: Option<u32>,
    #[serde(default)]
    pub dot_radius: Option<f64>,
    #[serde(default)]
    pub label_factor: Option<f64>,
    #[serde(default)]
    pub wrap_width: Option<f64>,
    #[serde(default)]
    pub stroke_width: Option<f64>,
    #[serde(default)]
    pub legend_display: Option<bool>,
    #[serde(default)]
    pub interactions_enabled: Option<bool>,
    #[serde(default)]
    pub display_format: Option<DisplayFormat>,
}

impl RadarChartOptions {
    /// Applies the overrides on top of `base`, field by field.
    #[must_use]
    pub fn apply(&self, base: &RadarChartConfig) -> RadarChartConfig {
        let mut config = base.clone();
        if let Some(size) = self.size {
            config.size = size;
        }
        if let Some(margin) = self.margin {
            config.margin = margin;
        }
        if let Some(legend_position) = self.legend_position {
            config.legend_position = legend_position;
        }
        if let Some(palette) = &self.palette {
            config.palette = palette.clone();
        }
        if let Some(opacity) = self.opacity {
            config.opacity = opacity;
        }
        if let Some(stroke_shape) = self.stroke_shape {
            config.stroke_shape = stroke_shape;
        }
        if let Some(smoothing_tension) = self.smoothing_tension {
            config.smoothing_tension = smoothing_tension;
        }
        if let Some(max_value) = self.max_value {
            config.max_value = max_value;
        }
        if let Some(auto_range) = self.auto_range {
            config.auto_range = auto_range;
        }
        if let Some(fixed_max) = self.fixed_max {
            config.fixed_max = Some(fixed_max);
        }
        if let Some(fixed_min) = self.fixed_min {
            config.fixed_min = Some(fixed_min);
        }
        if let Some(levels) = self.levels {
            config.levels = levels;
        }
        if let Some(dot_radius) = self.dot_radius {
            config.dot_radius = dot_radius;
        }
        if let Some(label_factor) = self.label_factor {
            config.label_factor = label_factor;
        }
        if let Some(wrap_width) = self.wrap_width {
            config.wrap_width = wrap_width;
        }
        if let Some(stroke_width) = self.stroke_width {
            config.stroke_width = stroke_width;
        }
        if let Some(legend_display) = self.legend_display {
            config.legend_display = legend_display;
        }
        if let Some(interactions_enabled) = self.interactions_enabled {
            config.interactions_enabled = interactions_enabled;
        }
        if let Some(display_format) = &self.display_format {
            config.display_format = display_format.clone();
        }
        config
    }
}
