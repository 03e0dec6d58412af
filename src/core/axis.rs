use crate::core::formatter::{NullFormatter, TickFormatter};
use crate::core::locator::{NullLocator, TickLocator};
use crate::error::{ScaleError, ScaleResult};

/// Axis state consumed by locators: the live view interval and the smallest
/// positive data value (the substitute for nonpositive range ends on
/// logarithmic sub-ranges).
pub trait AxisView {
    fn view_interval(&self) -> (f64, f64);
    fn minpos(&self) -> f64;
}

/// Host-side axis stand-in: a view interval, a minimum-positive sentinel, and
/// the four decoration slots a scale installs into.
///
/// Slots start blank (`NullLocator`/`NullFormatter`) until a scale is
/// applied.
#[derive(Debug)]
pub struct Axis {
    view_min: f64,
    view_max: f64,
    minpos: f64,
    major_locator: Box<dyn TickLocator>,
    major_formatter: Box<dyn TickFormatter>,
    minor_locator: Box<dyn TickLocator>,
    minor_formatter: Box<dyn TickFormatter>,
}

impl Axis {
    pub fn new(view_min: f64, view_max: f64) -> ScaleResult<Self> {
        validate_view_interval(view_min, view_max)?;
        Ok(Self {
            view_min,
            view_max,
            minpos: f64::MIN_POSITIVE,
            major_locator: Box::new(NullLocator),
            major_formatter: Box::new(NullFormatter),
            minor_locator: Box::new(NullLocator),
            minor_formatter: Box::new(NullFormatter),
        })
    }

    pub fn set_view_interval(&mut self, view_min: f64, view_max: f64) -> ScaleResult<()> {
        validate_view_interval(view_min, view_max)?;
        self.view_min = view_min;
        self.view_max = view_max;
        Ok(())
    }

    /// Records the smallest positive data value attached to this axis.
    pub fn set_minpos(&mut self, minpos: f64) -> ScaleResult<()> {
        if !minpos.is_finite() || minpos <= 0.0 {
            return Err(ScaleError::InvalidParameter(
                "'minpos' must be finite and positive".to_owned(),
            ));
        }
        self.minpos = minpos;
        Ok(())
    }

    pub fn set_major_locator(&mut self, locator: Box<dyn TickLocator>) {
        self.major_locator = locator;
    }

    pub fn set_major_formatter(&mut self, formatter: Box<dyn TickFormatter>) {
        self.major_formatter = formatter;
    }

    pub fn set_minor_locator(&mut self, locator: Box<dyn TickLocator>) {
        self.minor_locator = locator;
    }

    pub fn set_minor_formatter(&mut self, formatter: Box<dyn TickFormatter>) {
        self.minor_formatter = formatter;
    }

    /// Major tick positions for the current view interval.
    #[must_use]
    pub fn major_tick_values(&self) -> Vec<f64> {
        self.major_locator.locate(self)
    }

    /// Major tick labels, formatted in tick order.
    #[must_use]
    pub fn major_tick_labels(&self) -> Vec<String> {
        self.major_tick_values()
            .into_iter()
            .enumerate()
            .map(|(index, value)| self.major_formatter.format(value, Some(index)))
            .collect()
    }

    #[must_use]
    pub fn minor_tick_values(&self) -> Vec<f64> {
        self.minor_locator.locate(self)
    }

    #[must_use]
    pub fn minor_tick_labels(&self) -> Vec<String> {
        self.minor_tick_values()
            .into_iter()
            .enumerate()
            .map(|(index, value)| self.minor_formatter.format(value, Some(index)))
            .collect()
    }
}

impl AxisView for Axis {
    fn view_interval(&self) -> (f64, f64) {
        (self.view_min, self.view_max)
    }

    fn minpos(&self) -> f64 {
        self.minpos
    }
}

fn validate_view_interval(view_min: f64, view_max: f64) -> ScaleResult<()> {
    if !view_min.is_finite() || !view_max.is_finite() || view_min > view_max {
        return Err(ScaleError::InvalidParameter(
            "axis view interval must be finite and ordered".to_owned(),
        ));
    }
    Ok(())
}
