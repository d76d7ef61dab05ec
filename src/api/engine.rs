use indexmap::IndexMap;
use serde::Serialize;
use tracing::{debug, warn};

use crate::core::{Point, RadarDataset};
use crate::error::{RadarError, RadarResult};
use crate::interaction::{InteractionEvent, InteractionRouter, ResolvedTarget, SelectionRequest};
use crate::render::Renderer;

use super::frame_builder::AXIS_LABEL_FONT_SIZE_PX;
use super::{
    LayoutOutcome, RadarChartConfig, RadarChartOptions, RenderModel, build_frame, layout,
    resolve_pointer_target,
};

/// Orchestrator owning the renderer and the lifecycle of one chart.
///
/// At most one rendered instance is live per container: rendering discards
/// the previous mount before any new output is produced. Interaction entry
/// points classify host pointer events against the current model and return
/// pure event descriptions; what happens next is the host's business.
pub struct RadarChartEngine<R: Renderer> {
    renderer: R,
    config: RadarChartConfig,
    mounted_container: Option<String>,
    series_metadata: IndexMap<String, String>,
    router: InteractionRouter,
    model: Option<RenderModel>,
    active_interactions_enabled: bool,
}

impl<R: Renderer> RadarChartEngine<R> {
    pub fn new(renderer: R, config: RadarChartConfig) -> RadarResult<Self> {
        validate_config(&config)?;

        Ok(Self {
            renderer,
            config,
            mounted_container: None,
            series_metadata: IndexMap::new(),
            router: InteractionRouter::default(),
            model: None,
            active_interactions_enabled: true,
        })
    }

    #[must_use]
    pub fn config(&self) -> &RadarChartConfig {
        &self.config
    }

    /// Model of the last successful render, if any.
    #[must_use]
    pub fn model(&self) -> Option<&RenderModel> {
        self.model.as_ref()
    }

    #[must_use]
    pub fn mounted_container(&self) -> Option<&str> {
        self.mounted_container.as_deref()
    }

    /// `IndexMap` is used to preserve insertion order for stable snapshots.
    #[must_use]
    pub fn series_metadata(&self) -> &IndexMap<String, String> {
        &self.series_metadata
    }

    pub fn set_series_metadata(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.series_metadata.insert(key.into(), value.into());
    }

    /// Lays out and draws one chart into `container_id`.
    ///
    /// `options` are applied over the engine's base configuration for this
    /// render only. The previous mount is discarded first; an invalid
    /// dataset yields [`LayoutOutcome::Invalid`] and leaves no live model.
    pub fn render(
        &mut self,
        container_id: &str,
        dataset: &RadarDataset,
        options: &RadarChartOptions,
    ) -> RadarResult<LayoutOutcome> {
        let config = options.apply(&self.config);
        validate_config(&config)?;

        if let Some(previous) = self.mounted_container.take() {
            debug!(previous = %previous, container_id, "replacing mounted chart container");
        }
        self.model = None;
        self.router = InteractionRouter::default();
        self.active_interactions_enabled = config.interactions_enabled;

        let outcome = layout(dataset, &config, |text| {
            self.renderer.measure_text(text, AXIS_LABEL_FONT_SIZE_PX)
        });
        match &outcome {
            LayoutOutcome::Chart(model) => {
                let frame = build_frame(model, &config);
                self.renderer.render(&frame)?;
                self.model = Some(model.clone());
            }
            LayoutOutcome::Invalid(notice) => {
                warn!(message = %notice.message, "radar chart not displayed");
            }
        }

        self.mounted_container = Some(container_id.to_owned());
        Ok(outcome)
    }

    /// Classifies a pointer move at surface coordinates `(x, y)`.
    pub fn pointer_move(&mut self, x: f64, y: f64) -> Vec<InteractionEvent> {
        let Some(model) = &self.model else {
            return Vec::new();
        };

        let local = Point::new(x - model.center.x, y - model.center.y);
        let target = resolve_pointer_target(model, local);
        self.router.pointer_update(target)
    }

    /// The pointer left the chart surface.
    pub fn pointer_leave(&mut self) -> Vec<InteractionEvent> {
        self.router.pointer_leave()
    }

    /// Classifies a click at surface coordinates `(x, y)`.
    ///
    /// The selection request is present only when the clicked series has no
    /// missing-value marker, interactions are enabled, and the series
    /// carries a selection identifier.
    pub fn click(&mut self, x: f64, y: f64) -> (Vec<InteractionEvent>, Option<SelectionRequest>) {
        let Some(model) = &self.model else {
            return (Vec::new(), None);
        };

        let local = Point::new(x - model.center.x, y - model.center.y);
        let series_index = match resolve_pointer_target(model, local) {
            ResolvedTarget::Blob { series_index }
            | ResolvedTarget::Vertex { series_index, .. } => series_index,
            ResolvedTarget::None => return (Vec::new(), None),
        };

        match self.selection_for(series_index) {
            Some(request) => (
                vec![InteractionEvent::BlobSelect { series_index }],
                Some(request),
            ),
            None => (Vec::new(), None),
        }
    }

    /// The pointer entered legend entry `series_index`.
    pub fn legend_hover(&self, series_index: usize) -> Vec<InteractionEvent> {
        if self.legend_entry_exists(series_index) {
            vec![InteractionEvent::LegendHover { series_index }]
        } else {
            Vec::new()
        }
    }

    /// The pointer left the legend.
    pub fn legend_leave(&self) -> Vec<InteractionEvent> {
        if self.model.as_ref().is_some_and(|m| !m.legend.is_empty()) {
            vec![InteractionEvent::LegendLeave]
        } else {
            Vec::new()
        }
    }

    /// A click on legend entry `series_index`; same gating as blob clicks.
    pub fn legend_select(
        &mut self,
        series_index: usize,
    ) -> (Vec<InteractionEvent>, Option<SelectionRequest>) {
        if !self.legend_entry_exists(series_index) {
            return (Vec::new(), None);
        }

        match self.selection_for(series_index) {
            Some(request) => (
                vec![InteractionEvent::LegendSelect { series_index }],
                Some(request),
            ),
            None => (Vec::new(), None),
        }
    }

    /// Serialized snapshot of the engine state for host persistence.
    pub fn snapshot_json_pretty(&self) -> RadarResult<String> {
        let snapshot = EngineSnapshot {
            config: &self.config,
            series_metadata: &self.series_metadata,
            mounted_container: self.mounted_container.as_deref(),
            model: self.model.as_ref(),
        };
        serde_json::to_string_pretty(&snapshot)
            .map_err(|err| RadarError::InvalidData(format!("snapshot serialization failed: {err}")))
    }

    fn legend_entry_exists(&self, series_index: usize) -> bool {
        self.model.as_ref().is_some_and(|model| {
            model
                .legend
                .iter()
                .any(|entry| entry.series_index == series_index)
        })
    }

    fn selection_for(&self, series_index: usize) -> Option<SelectionRequest> {
        let blob = self
            .model
            .as_ref()
            .and_then(|model| model.blobs.get(series_index))?;

        if !self.active_interactions_enabled || !blob.selectable {
            debug!(series_index, "selection suppressed");
            return None;
        }

        blob.selection_element_id
            .map(SelectionRequest::toggle_single)
    }
}

#[derive(Serialize)]
struct EngineSnapshot<'a> {
    config: &'a RadarChartConfig,
    series_metadata: &'a IndexMap<String, String>,
    mounted_container: Option<&'a str>,
    model: Option<&'a RenderModel>,
}

fn validate_config(config: &RadarChartConfig) -> RadarResult<()> {
    if !config.size.is_valid() {
        return Err(RadarError::InvalidViewport {
            width: config.size.width,
            height: config.size.height,
        });
    }

    if config.levels == 0 {
        return Err(RadarError::InvalidData(
            "level count must be >= 1".to_owned(),
        ));
    }

    if !config.stroke_width.is_finite() || config.stroke_width <= 0.0 {
        return Err(RadarError::InvalidData(
            "stroke width must be finite and > 0".to_owned(),
        ));
    }

    if !config.dot_radius.is_finite() || config.dot_radius < 0.0 {
        return Err(RadarError::InvalidData(
            "dot radius must be finite and >= 0".to_owned(),
        ));
    }

    Ok(())
}
