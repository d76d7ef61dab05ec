pub mod domain;
pub mod format;
pub mod geometry;
pub mod scale;
pub mod types;
pub mod wrap;

pub use domain::{DomainSpec, ValueDomain};
pub use format::{DisplayFormat, format_number};
pub use geometry::{AngularLayout, PathCommand, cardinal_closed_path, level_radius, straight_closed_path};
pub use scale::RadialScale;
pub use types::{AxisPoint, MAX_AXIS_COUNT, Point, RadarDataset, Series, Viewport};
pub use wrap::wrap_label;
