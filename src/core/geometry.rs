//! Angular slicing, vertex projection, and closed polygon paths.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::core::scale::RadialScale;
use crate::core::types::Point;
use crate::error::{RadarError, RadarResult};

/// Even division of the full circle into one slice per axis.
///
/// Axis 0 points straight up and axes proceed clockwise.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AngularLayout {
    axis_count: usize,
    angle_slice: f64,
}

impl AngularLayout {
    pub fn new(axis_count: usize) -> RadarResult<Self> {
        if axis_count == 0 {
            return Err(RadarError::DegenerateGeometry { axis_count: 0 });
        }

        Ok(Self {
            axis_count,
            angle_slice: 2.0 * PI / axis_count as f64,
        })
    }

    #[must_use]
    pub fn axis_count(self) -> usize {
        self.axis_count
    }

    #[must_use]
    pub fn angle_slice(self) -> f64 {
        self.angle_slice
    }

    #[must_use]
    pub fn axis_angle(self, axis: usize) -> f64 {
        axis as f64 * self.angle_slice - PI / 2.0
    }

    /// Unit direction vector of axis `axis`.
    #[must_use]
    pub fn direction(self, axis: usize) -> Point {
        let angle = self.axis_angle(axis);
        Point::new(angle.cos(), angle.sin())
    }

    /// Point at `radius` along axis `axis`.
    #[must_use]
    pub fn point_at(self, axis: usize, radius: f64) -> Point {
        let direction = self.direction(axis);
        Point::new(radius * direction.x, radius * direction.y)
    }

    /// Vertex for one (axis, value) sample.
    #[must_use]
    pub fn vertex(self, axis: usize, value: f64, scale: RadialScale) -> Point {
        self.point_at(axis, scale.radius_for(value))
    }
}

/// Radius of gridline ring `level` out of `levels` (level 1 is innermost).
#[must_use]
pub fn level_radius(outer_radius: f64, levels: u32, level: u32) -> f64 {
    outer_radius * f64::from(level) / f64::from(levels)
}

/// One segment of a closed polygon path in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
    CurveTo { c1: Point, c2: Point, to: Point },
    Close,
}

/// Closed loop over the vertices with straight segments.
#[must_use]
pub fn straight_closed_path(vertices: &[Point]) -> Vec<PathCommand> {
    let Some((first, rest)) = vertices.split_first() else {
        return Vec::new();
    };

    let mut commands = Vec::with_capacity(vertices.len() + 1);
    commands.push(PathCommand::MoveTo(*first));
    for vertex in rest {
        commands.push(PathCommand::LineTo(*vertex));
    }
    commands.push(PathCommand::Close);
    commands
}

/// Closed cardinal spline over the vertices, emitted as cubic Béziers.
///
/// Control points follow the `k = (1 - tension) / 6` rule; fewer than three
/// vertices degrade to the straight closed path.
#[must_use]
pub fn cardinal_closed_path(vertices: &[Point], tension: f64) -> Vec<PathCommand> {
    let n = vertices.len();
    if n < 3 {
        return straight_closed_path(vertices);
    }

    let k = (1.0 - tension) / 6.0;
    let at = |i: usize| vertices[i % n];

    let mut commands = Vec::with_capacity(n + 2);
    commands.push(PathCommand::MoveTo(vertices[0]));
    for i in 0..n {
        let prev = at(i + n - 1);
        let from = at(i);
        let to = at(i + 1);
        let next = at(i + 2);
        commands.push(PathCommand::CurveTo {
            c1: Point::new(from.x + k * (to.x - prev.x), from.y + k * (to.y - prev.y)),
            c2: Point::new(to.x - k * (next.x - from.x), to.y - k * (next.y - from.y)),
            to,
        });
    }
    commands.push(PathCommand::Close);
    commands
}
