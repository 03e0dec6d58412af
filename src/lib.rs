//! linlog-scale: symmetrical lin-log axis scaling.
//!
//! A lin-log axis is logarithmic within a positive threshold of zero and
//! linear beyond it, keeping small values legible without the singularity of
//! a pure log scale. This crate bundles the forward/inverse transform pair,
//! the combined log-linear tick locator, the magnitude-aware label
//! formatter, and a name-token registry for host charting frameworks.

pub mod core;
pub mod error;
pub mod registry;
pub mod telemetry;

pub use crate::core::{
    Axis, AxisScale, AxisView, CombinedLogLinearLocator, CoordinateTransform,
    InvertedLinLogTransform, LinLogFormatter, LinLogScale, LinLogScaleConfig, LinLogTransform,
    LogLocator, MaxNLocator, NullFormatter, NullLocator, TickFormatter, TickLocator,
};
pub use error::{ScaleError, ScaleResult};
pub use registry::{ScaleFactory, ScaleRegistry};
