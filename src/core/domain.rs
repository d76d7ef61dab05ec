//! Effective value-domain resolution.

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::core::types::RadarDataset;

/// How the value domain is derived.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum DomainSpec {
    /// Derive from the data: `max` never drops below `ceiling`, `min` never
    /// rises above zero.
    Auto { ceiling: f64 },
    /// Host-pinned bounds; the dataset is ignored.
    Fixed { min: f64, max: f64 },
}

/// The `[min, max]` numeric range mapped onto chart radius.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueDomain {
    pub min: f64,
    pub max: f64,
}

impl ValueDomain {
    /// Resolves the effective domain from the dataset and the domain spec.
    ///
    /// Non-finite values are excluded from the scan, so the result depends
    /// only on the set of finite values present, not on series or axis
    /// ordering. A dataset with no finite value at all falls back to
    /// `[0, ceiling]`. Fixed bounds fall back to `[0, 1]` field-wise when
    /// non-finite.
    #[must_use]
    pub fn resolve(dataset: &RadarDataset, spec: DomainSpec) -> Self {
        match spec {
            DomainSpec::Fixed { min, max } => Self {
                min: if min.is_finite() { min } else { 0.0 },
                max: if max.is_finite() { max } else { 1.0 },
            },
            DomainSpec::Auto { ceiling } => {
                let data_max = finite_values(dataset).map(OrderedFloat).max();
                let data_min = finite_values(dataset).map(OrderedFloat).min();
                Self {
                    max: data_max.map_or(ceiling, |value| ceiling.max(value.into_inner())),
                    min: data_min.map_or(0.0, |value| 0.0f64.min(value.into_inner())),
                }
            }
        }
    }

    #[must_use]
    pub fn span(self) -> f64 {
        self.max - self.min
    }

    /// Value represented by gridline ring `level` out of `levels`.
    #[must_use]
    pub fn value_at_level(self, level: u32, levels: u32) -> f64 {
        self.min + self.span() * f64::from(level) / f64::from(levels)
    }
}

fn finite_values(dataset: &RadarDataset) -> impl Iterator<Item = f64> + '_ {
    dataset
        .series()
        .iter()
        .flat_map(|series| series.points.iter())
        .map(|point| point.value)
        .filter(|value| value.is_finite())
}
