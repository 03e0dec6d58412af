use std::fmt;

use crate::error::{ScaleError, ScaleResult};

/// Renders one tick value as label text.
///
/// The tick index is part of the host contract; implementations may ignore
/// it.
pub trait TickFormatter: fmt::Debug {
    fn format(&self, value: f64, index: Option<usize>) -> String;
}

/// Formatter that renders every tick blank. Used for minor ticks.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullFormatter;

impl TickFormatter for NullFormatter {
    fn format(&self, _value: f64, _index: Option<usize>) -> String {
        String::new()
    }
}

/// Lin-log tick label formatter.
///
/// Inside the linear threshold, values render fixed-point with precision
/// scaled to their magnitude; at or beyond it, values are large enough that a
/// truncated integer suffices.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinLogFormatter {
    linthresh: f64,
}

impl LinLogFormatter {
    pub fn new(linthresh: f64) -> ScaleResult<Self> {
        if !linthresh.is_finite() || linthresh <= 0.0 {
            return Err(ScaleError::InvalidParameter(
                "'linthresh' must be finite and positive".to_owned(),
            ));
        }
        Ok(Self { linthresh })
    }

    #[must_use]
    pub fn linthresh(self) -> f64 {
        self.linthresh
    }
}

impl TickFormatter for LinLogFormatter {
    fn format(&self, value: f64, _index: Option<usize>) -> String {
        if !value.is_finite() {
            return "nan".to_owned();
        }

        if value.abs() < self.linthresh {
            let decimals = if value == 0.0 {
                0
            } else {
                value.abs().log10().floor().abs() as usize
            };
            return format!("{value:.decimals$}");
        }

        format!("{}", value.trunc() as i64)
    }
}
