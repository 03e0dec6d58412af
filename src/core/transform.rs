use std::fmt;

use crate::error::{ScaleError, ScaleResult};

#[cfg(feature = "parallel-transform")]
const PARALLEL_MIN_LEN: usize = 4096;

/// Element-wise coordinate mapping with an inverse.
///
/// `map_value` carries the mapping rule; `map_values` applies it across a
/// slice. `inverse` returns a fresh inverse mapping on every call.
pub trait CoordinateTransform: fmt::Debug {
    fn map_value(&self, value: f64) -> f64;

    fn map_values(&self, values: &[f64]) -> Vec<f64> {
        values.iter().map(|value| self.map_value(*value)).collect()
    }

    fn inverse(&self) -> Box<dyn CoordinateTransform>;
}

/// Symmetrical lin-log data-to-display mapping.
///
/// Logarithmic within `linthresh` of zero, linear beyond it. The two branches
/// meet at `linthresh`, so the mapping is continuous across the transition on
/// the positive half-line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinLogTransform {
    base: f64,
    linthresh: f64,
    linscale: f64,
    linscale_adj: f64,
    log_base: f64,
}

impl LinLogTransform {
    pub fn new(base: f64, linthresh: f64, linscale: f64) -> ScaleResult<Self> {
        validate_parameters(base, linthresh, linscale)?;
        Ok(Self::from_valid_parts(base, linthresh, linscale))
    }

    /// Builds the cached derived constants from already-validated parameters.
    fn from_valid_parts(base: f64, linthresh: f64, linscale: f64) -> Self {
        Self {
            base,
            linthresh,
            linscale,
            linscale_adj: linscale / (1.0 - base.recip()),
            log_base: base.ln(),
        }
    }

    #[must_use]
    pub fn base(self) -> f64 {
        self.base
    }

    #[must_use]
    pub fn linthresh(self) -> f64 {
        self.linthresh
    }

    #[must_use]
    pub fn linscale(self) -> f64 {
        self.linscale
    }

    /// Returns the inverse mapping configured with the same parameters.
    #[must_use]
    pub fn inverted(self) -> InvertedLinLogTransform {
        InvertedLinLogTransform::from_forward(self)
    }

    fn map_forward(self, value: f64) -> f64 {
        let magnitude = value.abs();
        if magnitude <= self.linthresh {
            // At exactly zero the log term is -inf and the sign factor is
            // zero; the 0 * -inf product propagates NaN instead of raising.
            sign(value)
                * self.linthresh
                * (1.0 + (magnitude / self.linthresh).ln() / self.log_base)
        } else {
            self.linthresh + sign(value) * self.linscale_adj * (magnitude - self.linthresh)
        }
    }
}

impl CoordinateTransform for LinLogTransform {
    fn map_value(&self, value: f64) -> f64 {
        self.map_forward(value)
    }

    #[cfg(feature = "parallel-transform")]
    fn map_values(&self, values: &[f64]) -> Vec<f64> {
        use rayon::prelude::*;

        if values.len() >= PARALLEL_MIN_LEN {
            return values
                .par_iter()
                .map(|value| self.map_forward(*value))
                .collect();
        }
        values.iter().map(|value| self.map_forward(*value)).collect()
    }

    fn inverse(&self) -> Box<dyn CoordinateTransform> {
        Box::new(self.inverted())
    }
}

/// Inverse of [`LinLogTransform`] over the same domain/range split.
///
/// Keeps only the forward image of `linthresh` (`invlinthresh`), which marks
/// where the transformed logarithmic region ends.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InvertedLinLogTransform {
    base: f64,
    linthresh: f64,
    linscale: f64,
    invlinthresh: f64,
    linscale_adj: f64,
}

impl InvertedLinLogTransform {
    pub fn new(base: f64, linthresh: f64, linscale: f64) -> ScaleResult<Self> {
        Ok(Self::from_forward(LinLogTransform::new(
            base, linthresh, linscale,
        )?))
    }

    fn from_forward(forward: LinLogTransform) -> Self {
        Self {
            base: forward.base,
            linthresh: forward.linthresh,
            linscale: forward.linscale,
            invlinthresh: forward.map_forward(forward.linthresh),
            linscale_adj: forward.linscale_adj,
        }
    }

    #[must_use]
    pub fn base(self) -> f64 {
        self.base
    }

    #[must_use]
    pub fn linthresh(self) -> f64 {
        self.linthresh
    }

    #[must_use]
    pub fn linscale(self) -> f64 {
        self.linscale
    }

    /// Forward image of `linthresh`: the transformed end of the log region.
    #[must_use]
    pub fn invlinthresh(self) -> f64 {
        self.invlinthresh
    }

    /// Returns the original forward mapping with the same parameters.
    #[must_use]
    pub fn inverted(self) -> LinLogTransform {
        LinLogTransform::from_valid_parts(self.base, self.linthresh, self.linscale)
    }

    fn map_inverse(self, value: f64) -> f64 {
        let magnitude = value.abs();
        if magnitude <= self.invlinthresh {
            sign(value) * self.linthresh * (magnitude / self.linthresh - 1.0).exp()
        } else {
            sign(value) * (self.linthresh + (magnitude - self.invlinthresh) / self.linscale_adj)
        }
    }
}

impl CoordinateTransform for InvertedLinLogTransform {
    fn map_value(&self, value: f64) -> f64 {
        self.map_inverse(value)
    }

    #[cfg(feature = "parallel-transform")]
    fn map_values(&self, values: &[f64]) -> Vec<f64> {
        use rayon::prelude::*;

        if values.len() >= PARALLEL_MIN_LEN {
            return values
                .par_iter()
                .map(|value| self.map_inverse(*value))
                .collect();
        }
        values.iter().map(|value| self.map_inverse(*value)).collect()
    }

    fn inverse(&self) -> Box<dyn CoordinateTransform> {
        Box::new(self.inverted())
    }
}

fn validate_parameters(base: f64, linthresh: f64, linscale: f64) -> ScaleResult<()> {
    if !base.is_finite() || base <= 1.0 {
        return Err(ScaleError::InvalidParameter(
            "'base' must be finite and larger than 1".to_owned(),
        ));
    }
    if !linthresh.is_finite() || linthresh <= 0.0 {
        return Err(ScaleError::InvalidParameter(
            "'linthresh' must be finite and positive".to_owned(),
        ));
    }
    if !linscale.is_finite() || linscale <= 0.0 {
        return Err(ScaleError::InvalidParameter(
            "'linscale' must be finite and positive".to_owned(),
        ));
    }
    Ok(())
}

/// Mathematical sign: zero maps to zero, unlike `f64::signum`.
fn sign(value: f64) -> f64 {
    if value > 0.0 {
        1.0
    } else if value < 0.0 {
        -1.0
    } else {
        0.0
    }
}
