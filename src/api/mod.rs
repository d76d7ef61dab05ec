mod config;
mod engine;
mod frame_builder;
mod hit_resolver;
mod layout;
mod palette;
mod render_model;

pub use config::{
    LegendPosition, Margins, OpacityLevels, RadarChartConfig, RadarChartOptions, StrokeShape,
};
pub use engine::RadarChartEngine;
pub use frame_builder::build_frame;
pub use hit_resolver::resolve_pointer_target;
pub use layout::layout;
pub use palette::SeriesPalette;
pub use render_model::{
    AxisSpoke, BlobVertex, GridRing, InvalidChartNotice, LayoutOutcome, LegendEntry, RenderModel,
    SeriesBlob,
};
