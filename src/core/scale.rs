use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::axis::Axis;
use crate::core::formatter::{LinLogFormatter, NullFormatter};
use crate::core::locator::{CombinedLogLinearLocator, LogLocator};
use crate::core::transform::{CoordinateTransform, LinLogTransform};
use crate::error::{ScaleError, ScaleResult};

/// Subdivisions for the minor log locator installed by the lin-log scale.
const MINOR_TICK_SUBS: [f64; 8] = [2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0];

/// Named scale configuration: owns a transform and knows how to decorate an
/// axis with its default locators and formatters.
pub trait AxisScale: fmt::Debug {
    fn name(&self) -> &'static str;

    /// The owned forward transform, shared for the life of the scale. The
    /// host may take a fresh inverse from it at any time.
    fn transform(&self) -> &dyn CoordinateTransform;

    fn install_decorations(&self, axis: &mut Axis) -> ScaleResult<()>;
}

/// Construction parameters for [`LinLogScale`], with the registration-time
/// defaults filled in for absent fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinLogScaleConfig {
    pub base: f64,
    pub linthresh: f64,
    pub subs: Option<Vec<f64>>,
    pub linscale: f64,
}

impl Default for LinLogScaleConfig {
    fn default() -> Self {
        Self {
            base: 10.0,
            linthresh: 2.0,
            subs: None,
            linscale: 1.0,
        }
    }
}

/// Symmetrical lin-log axis scale.
///
/// Owns one forward transform and installs the combined log-linear locator
/// plus the lin-log formatter as major decorations, and a log-only locator
/// with blank labels as minor decorations.
#[derive(Debug, Clone)]
pub struct LinLogScale {
    transform: LinLogTransform,
    subs: Option<Vec<f64>>,
}

impl LinLogScale {
    /// Name token under which this scale registers.
    pub const NAME: &'static str = "linlog";

    pub fn new(config: LinLogScaleConfig) -> ScaleResult<Self> {
        let transform = LinLogTransform::new(config.base, config.linthresh, config.linscale)?;
        if let Some(subs) = &config.subs {
            if subs.iter().any(|sub| !sub.is_finite() || *sub <= 0.0) {
                return Err(ScaleError::InvalidParameter(
                    "'subs' entries must be finite and positive".to_owned(),
                ));
            }
        }
        Ok(Self {
            transform,
            subs: config.subs,
        })
    }

    #[must_use]
    pub fn base(&self) -> f64 {
        self.transform.base()
    }

    #[must_use]
    pub fn linthresh(&self) -> f64 {
        self.transform.linthresh()
    }

    #[must_use]
    pub fn linscale(&self) -> f64 {
        self.transform.linscale()
    }

    /// Configured minor-tick subdivision list, if any.
    #[must_use]
    pub fn subs(&self) -> Option<&[f64]> {
        self.subs.as_deref()
    }
}

impl AxisScale for LinLogScale {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn transform(&self) -> &dyn CoordinateTransform {
        &self.transform
    }

    fn install_decorations(&self, axis: &mut Axis) -> ScaleResult<()> {
        let major_locator =
            CombinedLogLinearLocator::new(self.base(), &[1.0], self.linthresh(), None, None)?;
        let major_formatter = LinLogFormatter::new(self.linthresh())?;
        let minor_locator = LogLocator::new(self.base(), &MINOR_TICK_SUBS, None)?;

        axis.set_major_locator(Box::new(major_locator));
        axis.set_major_formatter(Box::new(major_formatter));
        axis.set_minor_locator(Box::new(minor_locator));
        axis.set_minor_formatter(Box::new(NullFormatter));
        Ok(())
    }
}
