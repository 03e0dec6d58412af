pub mod axis;
pub mod formatter;
pub mod locator;
pub mod scale;
pub mod transform;

pub use axis::{Axis, AxisView};
pub use formatter::{LinLogFormatter, NullFormatter, TickFormatter};
pub use locator::{CombinedLogLinearLocator, LogLocator, MaxNLocator, NullLocator, TickLocator};
pub use scale::{AxisScale, LinLogScale, LinLogScaleConfig};
pub use transform::{CoordinateTransform, InvertedLinLogTransform, LinLogTransform};
