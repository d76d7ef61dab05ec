//! Interaction classification: pure descriptions of pointer intent.
//!
//! Nothing here performs I/O. The host delivers pointer events, the engine
//! resolves them against the current render model, and this module turns
//! target transitions into hover/leave/select descriptions the host applies
//! with its own dim/highlight policy.

use serde::{Deserialize, Serialize};

use crate::core::Point;

/// Informational description of one interaction, fired synchronously in
/// response to a host-delivered pointer event. No queuing, no debouncing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum InteractionEvent {
    BlobHover {
        series_index: usize,
    },
    BlobLeave,
    PointHover {
        series_index: usize,
        axis_index: usize,
        text: String,
        anchor: Point,
    },
    PointLeave,
    BlobSelect {
        series_index: usize,
    },
    LegendHover {
        series_index: usize,
    },
    LegendSelect {
        series_index: usize,
    },
    LegendLeave,
}

/// A pick to forward to the host's selection sink.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionRequest {
    pub dimension_index: usize,
    pub element_ids: Vec<u64>,
    pub toggle: bool,
}

impl SelectionRequest {
    /// The one shape the chart emits: toggle a single element on the first
    /// dimension.
    #[must_use]
    pub fn toggle_single(element_id: u64) -> Self {
        Self {
            dimension_index: 0,
            element_ids: vec![element_id],
            toggle: true,
        }
    }
}

/// What the pointer currently rests on, resolved against the render model.
///
/// Vertices win over blob areas; their hover circles sit on top.
#[derive(Debug, Clone, PartialEq)]
pub enum ResolvedTarget {
    None,
    Blob {
        series_index: usize,
    },
    Vertex {
        series_index: usize,
        axis_index: usize,
        tooltip_text: String,
        anchor: Point,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum HoverState {
    #[default]
    Idle,
    Blob {
        series_index: usize,
    },
    Vertex {
        series_index: usize,
        axis_index: usize,
    },
}

impl HoverState {
    fn of(target: &ResolvedTarget) -> Self {
        match target {
            ResolvedTarget::None => Self::Idle,
            ResolvedTarget::Blob { series_index } => Self::Blob {
                series_index: *series_index,
            },
            ResolvedTarget::Vertex {
                series_index,
                axis_index,
                ..
            } => Self::Vertex {
                series_index: *series_index,
                axis_index: *axis_index,
            },
        }
    }
}

/// Tracks the hovered target between pointer events so hover and leave
/// events fire exactly once per transition.
#[derive(Debug, Default)]
pub struct InteractionRouter {
    state: HoverState,
}

impl InteractionRouter {
    /// Feeds the freshly resolved pointer target and returns the events the
    /// transition produces, oldest first.
    pub fn pointer_update(&mut self, target: ResolvedTarget) -> Vec<InteractionEvent> {
        let next = HoverState::of(&target);
        if next == self.state {
            return Vec::new();
        }

        let mut events = Vec::new();
        match self.state {
            HoverState::Idle => {}
            HoverState::Blob { .. } => events.push(InteractionEvent::BlobLeave),
            HoverState::Vertex { .. } => events.push(InteractionEvent::PointLeave),
        }
        match target {
            ResolvedTarget::None => {}
            ResolvedTarget::Blob { series_index } => {
                events.push(InteractionEvent::BlobHover { series_index });
            }
            ResolvedTarget::Vertex {
                series_index,
                axis_index,
                tooltip_text,
                anchor,
            } => {
                events.push(InteractionEvent::PointHover {
                    series_index,
                    axis_index,
                    text: tooltip_text,
                    anchor,
                });
            }
        }
        self.state = next;
        events
    }

    /// The pointer left the chart entirely.
    pub fn pointer_leave(&mut self) -> Vec<InteractionEvent> {
        self.pointer_update(ResolvedTarget::None)
    }
}
