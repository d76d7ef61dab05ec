use ordered_float::OrderedFloat;
use smallvec::SmallVec;

use crate::core::Point;
use crate::interaction::ResolvedTarget;

use super::{BlobVertex, RenderModel};

/// Hover circles extend this factor past the visible dot.
const HOVER_RADIUS_FACTOR: f64 = 1.5;

/// Resolves a center-origin pointer position against the model.
///
/// Vertices are tested first (nearest one within the hover radius wins);
/// failing that, blob areas are tested topmost-painted first.
#[must_use]
pub fn resolve_pointer_target(model: &RenderModel, position: Point) -> ResolvedTarget {
    let hover_radius = model.dot_radius * HOVER_RADIUS_FACTOR;
    let mut candidates: SmallVec<[(OrderedFloat<f64>, usize, usize); 4]> = SmallVec::new();
    for blob in &model.blobs {
        for vertex in &blob.vertices {
            let distance = position.distance_to(vertex.position);
            if distance <= hover_radius {
                candidates.push((OrderedFloat(distance), blob.series_index, vertex.axis_index));
            }
        }
    }

    if let Some((_, series_index, axis_index)) = candidates
        .into_iter()
        .min_by_key(|(distance, _, _)| *distance)
    {
        let vertex = &model.blobs[series_index].vertices[axis_index];
        return ResolvedTarget::Vertex {
            series_index,
            axis_index,
            tooltip_text: vertex.tooltip_text.clone(),
            anchor: vertex.tooltip_anchor,
        };
    }

    for blob in model.blobs.iter().rev() {
        if polygon_contains(&blob.vertices, position) {
            return ResolvedTarget::Blob {
                series_index: blob.series_index,
            };
        }
    }

    ResolvedTarget::None
}

/// Ray-casting containment test over the blob outline. Smoothed outlines
/// are approximated by their vertex polygon.
fn polygon_contains(vertices: &[BlobVertex], position: Point) -> bool {
    let n = vertices.len();
    if n < 3 {
        return false;
    }

    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let a = vertices[i].position;
        let b = vertices[j].position;
        if (a.y > position.y) != (b.y > position.y) {
            let t = (position.y - a.y) / (b.y - a.y);
            let crossing_x = a.x + t * (b.x - a.x);
            if position.x < crossing_x {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}
