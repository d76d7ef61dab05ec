use crate::core::domain::ValueDomain;
use crate::error::{RadarError, RadarResult};

/// Linear map from the value domain to `[0, outer_radius]` pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadialScale {
    domain_min: f64,
    domain_max: f64,
    outer_radius: f64,
}

impl RadialScale {
    pub fn new(domain: ValueDomain, outer_radius: f64) -> RadarResult<Self> {
        if !domain.min.is_finite() || !domain.max.is_finite() || domain.min == domain.max {
            return Err(RadarError::InvalidData(
                "scale domain must be finite and non-degenerate".to_owned(),
            ));
        }

        if !outer_radius.is_finite() || outer_radius < 0.0 {
            return Err(RadarError::InvalidData(
                "outer radius must be finite and >= 0".to_owned(),
            ));
        }

        Ok(Self {
            domain_min: domain.min,
            domain_max: domain.max,
            outer_radius,
        })
    }

    #[must_use]
    pub fn domain(self) -> ValueDomain {
        ValueDomain {
            min: self.domain_min,
            max: self.domain_max,
        }
    }

    #[must_use]
    pub fn outer_radius(self) -> f64 {
        self.outer_radius
    }

    /// Maps a value to a radius.
    ///
    /// Non-finite values collapse to the center (radius 0) instead of
    /// propagating NaN into geometry. Finite values outside the domain
    /// extrapolate past the ring, which is how axis guide lines extend
    /// slightly beyond it.
    #[must_use]
    pub fn radius_for(self, value: f64) -> f64 {
        if !value.is_finite() {
            return 0.0;
        }

        let span = self.domain_max - self.domain_min;
        (value - self.domain_min) / span * self.outer_radius
    }
}
