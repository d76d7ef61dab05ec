//! The pure layout pipeline: dataset + configuration to render model.

use tracing::{debug, warn};

use crate::core::{
    AngularLayout, Point, RadarDataset, RadialScale, ValueDomain, cardinal_closed_path,
    level_radius, straight_closed_path, wrap_label,
};

use super::{
    AxisSpoke, BlobVertex, GridRing, InvalidChartNotice, LayoutOutcome, LegendEntry,
    RadarChartConfig, RenderModel, SeriesBlob, StrokeShape,
};

/// Pixels the tooltip anchor sits up and left of its vertex.
const TOOLTIP_OFFSET: f64 = 10.0;

/// Legend suppression thresholds; preserved, not generalized.
const LEGEND_MIN_ASPECT_RATIO: f64 = 1.5;
const LEGEND_MIN_HEIGHT: f64 = 380.0;

/// Computes the complete render model for one chart instance.
///
/// `measure` reports the pixel width of a label candidate and comes from the
/// rendering surface. The call is synchronous and pure: no state survives
/// it, and every failure path degrades to [`LayoutOutcome::Invalid`] instead
/// of propagating an error.
pub fn layout<F>(dataset: &RadarDataset, config: &RadarChartConfig, mut measure: F) -> LayoutOutcome
where
    F: FnMut(&str) -> f64,
{
    if let Err(error) = dataset.validate() {
        warn!(%error, "radar layout rejected dataset");
        return LayoutOutcome::Invalid(InvalidChartNotice::default());
    }

    let axis_count = dataset.axis_count();
    let supplied_axes = dataset
        .series()
        .first()
        .map_or(0, |series| series.points.len());
    if supplied_axes > axis_count {
        debug!(supplied = supplied_axes, kept = axis_count, "axis count clamped");
    }

    let side = f64::from(config.size.width.min(config.size.height));
    let outer_radius = (side / 2.0 - config.margin.left - config.margin.right)
        .min(side / 2.0 - config.margin.top - config.margin.bottom)
        .abs();

    let domain = ValueDomain::resolve(dataset, config.domain_spec());
    let scale = match RadialScale::new(domain, outer_radius) {
        Ok(scale) => scale,
        Err(error) => {
            warn!(%error, "radar layout rejected derived scale");
            return LayoutOutcome::Invalid(InvalidChartNotice::default());
        }
    };
    let angular = match AngularLayout::new(axis_count) {
        Ok(angular) => angular,
        Err(error) => {
            warn!(%error, "radar layout rejected axis slicing");
            return LayoutOutcome::Invalid(InvalidChartNotice::default());
        }
    };

    let center_x = if config.legend_display {
        f64::from(config.size.width) / 1.8
    } else {
        f64::from(config.size.width) / 2.0
    };
    let center = Point::new(center_x, f64::from(config.size.height) / 2.0);

    let grid_rings = (1..=config.levels)
        .map(|level| GridRing {
            level,
            radius: level_radius(outer_radius, config.levels, level),
            label: config
                .display_format
                .apply(domain.value_at_level(level, config.levels)),
            label_anchor: Point::new(4.0, -level_radius(outer_radius, config.levels, level)),
        })
        .collect();

    let guide_radius = scale.radius_for(domain.max * 1.1);
    let label_radius = scale.radius_for(domain.max) * config.label_factor;
    let axes = dataset
        .axis_labels()
        .iter()
        .enumerate()
        .map(|(index, label)| AxisSpoke {
            index,
            label: (*label).to_owned(),
            label_lines: wrap_label(label, config.wrap_width, &mut measure),
            angle: angular.axis_angle(index),
            line_end: angular.point_at(index, guide_radius),
            label_anchor: angular.point_at(index, label_radius),
        })
        .collect();

    let blobs = dataset
        .series()
        .iter()
        .enumerate()
        .map(|(series_index, series)| {
            let positions: Vec<Point> = series
                .points
                .iter()
                .take(axis_count)
                .enumerate()
                .map(|(axis_index, point)| angular.vertex(axis_index, point.value, scale))
                .collect();
            let path = match config.stroke_shape {
                StrokeShape::Straight => straight_closed_path(&positions),
                StrokeShape::Smoothed => cardinal_closed_path(&positions, config.smoothing_tension),
            };
            let vertices = series
                .points
                .iter()
                .take(axis_count)
                .zip(&positions)
                .enumerate()
                .map(|(axis_index, (point, position))| BlobVertex {
                    axis_index,
                    position: *position,
                    value: point.value,
                    tooltip_text: format!(
                        "{} : {}",
                        series.name,
                        config.display_format.apply(point.value)
                    ),
                    tooltip_anchor: Point::new(
                        position.x - TOOLTIP_OFFSET,
                        position.y - TOOLTIP_OFFSET,
                    ),
                })
                .collect();
            SeriesBlob {
                series_index,
                series_id: series.id.clone(),
                name: series.name.clone(),
                path,
                vertices,
                color: config.palette.color_for(series_index),
                selectable: !series.has_missing_point(),
                selection_element_id: series.selection_element_id(),
            }
        })
        .collect();

    let legend = if legend_visible(config, dataset.dimension_count()) {
        dataset
            .series()
            .iter()
            .enumerate()
            .map(|(series_index, series)| LegendEntry {
                series_index,
                label: series.name.clone(),
                color: config.palette.color_for(series_index),
            })
            .collect()
    } else {
        Vec::new()
    };

    debug!(
        series = dataset.series().len(),
        axes = axis_count,
        outer_radius,
        "computed radar layout"
    );

    LayoutOutcome::Chart(RenderModel {
        viewport: config.size,
        center,
        outer_radius,
        angle_slice: angular.angle_slice(),
        domain,
        levels: config.levels,
        dot_radius: config.dot_radius,
        stroke_width: config.stroke_width,
        opacity: config.opacity,
        grid_rings,
        axes,
        blobs,
        legend,
        legend_position: config.legend_position,
    })
}

fn legend_visible(config: &RadarChartConfig, dimension_count: usize) -> bool {
    if !config.legend_display || dimension_count == 1 {
        return false;
    }

    let aspect_ratio = config.size.aspect_ratio();
    let height = f64::from(config.size.height);
    !(aspect_ratio < LEGEND_MIN_ASPECT_RATIO && height < LEGEND_MIN_HEIGHT)
}
