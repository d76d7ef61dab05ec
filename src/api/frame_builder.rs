//! Materializes a [`RenderModel`] into backend-ready draw primitives.

use crate::core::{PathCommand, Point};
use crate::render::{
    CirclePrimitive, Color, LinePrimitive, PathPrimitive, RenderFrame, TextHAlign, TextPrimitive,
};

use super::{RadarChartConfig, RenderModel};

pub(super) const AXIS_LABEL_FONT_SIZE_PX: f64 = 14.0;
const RING_LABEL_FONT_SIZE_PX: f64 = 12.0;
const LABEL_LINE_HEIGHT: f64 = 1.1;
const GRID_STROKE_WIDTH: f64 = 1.0;
const GUIDE_LINE_WIDTH: f64 = 2.0;
const DOT_FILL_ALPHA: f64 = 0.8;

const GRID_COLOR: Color =
    Color::rgb(0.803_921_568_627_451, 0.803_921_568_627_451, 0.803_921_568_627_451);
const GUIDE_COLOR: Color = Color::rgb(1.0, 1.0, 1.0);
const LABEL_COLOR: Color = Color::rgb(0.0, 0.0, 0.0);

/// Builds the draw pass for one computed model.
///
/// Geometry in the model is center-origin; everything here is translated
/// into absolute surface coordinates. Paint order matches the reference
/// rendering: rings outermost-first, then spokes, blobs, dots, labels.
#[must_use]
pub fn build_frame(model: &RenderModel, config: &RadarChartConfig) -> RenderFrame {
    let mut frame = RenderFrame::new(model.viewport);
    let cx = model.center.x;
    let cy = model.center.y;

    for ring in model.grid_rings.iter().rev() {
        frame.circles.push(
            CirclePrimitive::filled(
                cx,
                cy,
                ring.radius,
                GRID_COLOR.with_alpha(config.opacity.circle),
            )
            .with_stroke(GRID_COLOR, GRID_STROKE_WIDTH),
        );
    }

    for axis in &model.axes {
        frame.lines.push(LinePrimitive::new(
            cx,
            cy,
            cx + axis.line_end.x,
            cy + axis.line_end.y,
            GUIDE_LINE_WIDTH,
            GUIDE_COLOR,
        ));
        for (line_index, line) in axis.label_lines.iter().enumerate() {
            frame.texts.push(TextPrimitive::new(
                line.clone(),
                cx + axis.label_anchor.x,
                cy + axis.label_anchor.y
                    + line_index as f64 * LABEL_LINE_HEIGHT * AXIS_LABEL_FONT_SIZE_PX,
                AXIS_LABEL_FONT_SIZE_PX,
                LABEL_COLOR,
                TextHAlign::Center,
            ));
        }
    }

    for blob in &model.blobs {
        let translated: Vec<PathCommand> = blob
            .path
            .iter()
            .map(|command| translate_command(*command, cx, cy))
            .collect();
        frame.paths.push(PathPrimitive::new(
            translated.clone(),
            Some(blob.color.with_alpha(config.opacity.area)),
            None,
            0.0,
        ));
        frame.paths.push(PathPrimitive::new(
            translated,
            None,
            Some(blob.color),
            model.stroke_width,
        ));
        for vertex in &blob.vertices {
            frame.circles.push(CirclePrimitive::filled(
                cx + vertex.position.x,
                cy + vertex.position.y,
                model.dot_radius,
                blob.color.with_alpha(DOT_FILL_ALPHA),
            ));
        }
    }

    for ring in &model.grid_rings {
        // A blank-zero format can legitimately produce an empty label.
        if ring.label.is_empty() {
            continue;
        }
        frame.texts.push(TextPrimitive::new(
            ring.label.clone(),
            cx + ring.label_anchor.x,
            cy + ring.label_anchor.y,
            RING_LABEL_FONT_SIZE_PX,
            LABEL_COLOR,
            TextHAlign::Left,
        ));
    }

    frame
}

fn translate_command(command: PathCommand, cx: f64, cy: f64) -> PathCommand {
    let shift = |p: Point| Point::new(p.x + cx, p.y + cy);
    match command {
        PathCommand::MoveTo(p) => PathCommand::MoveTo(shift(p)),
        PathCommand::LineTo(p) => PathCommand::LineTo(shift(p)),
        PathCommand::CurveTo { c1, c2, to } => PathCommand::CurveTo {
            c1: shift(c1),
            c2: shift(c2),
            to: shift(to),
        },
        PathCommand::Close => PathCommand::Close,
    }
}
