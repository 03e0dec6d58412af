use std::fmt;

use smallvec::SmallVec;
use tracing::trace;

use crate::core::axis::AxisView;
use crate::error::{ScaleError, ScaleResult};

/// Default stride budget for decade ticks when no `numticks` is configured.
const DEFAULT_LOG_NUMTICKS: usize = 15;
/// Default bin count for the linear locator when no `numbins` is configured.
const DEFAULT_LINEAR_NUMBINS: usize = 10;
/// Tolerance for snapping a log-ratio to an integer exponent.
const EXPONENT_SNAP: f64 = 1e-9;

/// Produces tick positions for a view range.
///
/// `tick_values` is the pure range-to-ticks rule; `locate` is the axis-bound
/// entry point that reads the live view interval on every call.
pub trait TickLocator: fmt::Debug {
    fn tick_values(&self, vmin: f64, vmax: f64) -> Vec<f64>;

    fn locate(&self, axis: &dyn AxisView) -> Vec<f64> {
        let (vmin, vmax) = axis.view_interval();
        self.tick_values(vmin, vmax)
    }
}

/// Locator that never produces ticks. Default slot filler for an undecorated
/// axis.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullLocator;

impl TickLocator for NullLocator {
    fn tick_values(&self, _vmin: f64, _vmax: f64) -> Vec<f64> {
        Vec::new()
    }
}

/// Logarithmic tick locator: ticks at `sub * base^k` for every subdivision
/// and every integer exponent covering the range.
#[derive(Debug, Clone)]
pub struct LogLocator {
    base: f64,
    subs: SmallVec<[f64; 8]>,
    numticks: Option<usize>,
    log_base: f64,
}

impl LogLocator {
    pub fn new(base: f64, subs: &[f64], numticks: Option<usize>) -> ScaleResult<Self> {
        if !base.is_finite() || base <= 1.0 {
            return Err(ScaleError::InvalidParameter(
                "'base' must be finite and larger than 1".to_owned(),
            ));
        }
        if subs.is_empty() {
            return Err(ScaleError::InvalidParameter(
                "'subs' must contain at least one subdivision".to_owned(),
            ));
        }
        if subs.iter().any(|sub| !sub.is_finite() || *sub <= 0.0) {
            return Err(ScaleError::InvalidParameter(
                "'subs' entries must be finite and positive".to_owned(),
            ));
        }
        if numticks == Some(0) {
            return Err(ScaleError::InvalidParameter(
                "'numticks' must be at least 1".to_owned(),
            ));
        }

        Ok(Self {
            base,
            subs: SmallVec::from_slice(subs),
            numticks,
            log_base: base.ln(),
        })
    }

    /// Decade-only locator (single subdivision at 1).
    pub fn decades(base: f64, numticks: Option<usize>) -> ScaleResult<Self> {
        Self::new(base, &[1.0], numticks)
    }

    #[must_use]
    pub fn base(&self) -> f64 {
        self.base
    }

    #[must_use]
    pub fn subs(&self) -> &[f64] {
        &self.subs
    }

    /// Integer exponent bounds covering `[lo, hi]`, snapping near-integer
    /// log ratios before rounding outward.
    fn exponent_bounds(&self, lo: f64, hi: f64) -> (i32, i32) {
        let lo_ratio = lo.ln() / self.log_base;
        let hi_ratio = hi.ln() / self.log_base;
        (snap_down(lo_ratio), snap_up(hi_ratio))
    }
}

impl TickLocator for LogLocator {
    fn tick_values(&self, vmin: f64, vmax: f64) -> Vec<f64> {
        if !vmin.is_finite() || !vmax.is_finite() {
            return Vec::new();
        }

        let (lo, hi) = if vmin <= vmax {
            (vmin, vmax)
        } else {
            (vmax, vmin)
        };
        // Logarithmic ticks are undefined at or below zero; clamp to the
        // smallest positive float and let the stride budget bound the output.
        let lo = lo.max(f64::MIN_POSITIVE);
        if hi < lo {
            return Vec::new();
        }

        let (e_lo, e_hi) = self.exponent_bounds(lo, hi);
        let decade_count = (e_hi - e_lo + 1).max(0) as usize;
        let numticks = self.numticks.unwrap_or(DEFAULT_LOG_NUMTICKS);
        let stride = decade_count.div_ceil(numticks).max(1) as i32;

        let mut ticks = Vec::with_capacity(decade_count.min(numticks) * self.subs.len());
        let mut exponent = e_lo;
        while exponent <= e_hi {
            let decade = self.base.powi(exponent);
            for sub in &self.subs {
                ticks.push(sub * decade);
            }
            exponent += stride;
        }
        ticks
    }
}

/// Linear tick locator with at most `numbins` intervals at a "nice" step
/// (1, 2, or 5 times a power of ten).
#[derive(Debug, Clone, Copy)]
pub struct MaxNLocator {
    numbins: usize,
}

impl MaxNLocator {
    pub fn new(numbins: Option<usize>) -> ScaleResult<Self> {
        if numbins == Some(0) {
            return Err(ScaleError::InvalidParameter(
                "'numbins' must be at least 1".to_owned(),
            ));
        }
        Ok(Self {
            numbins: numbins.unwrap_or(DEFAULT_LINEAR_NUMBINS),
        })
    }

    #[must_use]
    pub fn numbins(self) -> usize {
        self.numbins
    }
}

impl TickLocator for MaxNLocator {
    fn tick_values(&self, vmin: f64, vmax: f64) -> Vec<f64> {
        if !vmin.is_finite() || !vmax.is_finite() {
            return Vec::new();
        }

        let (lo, hi) = if vmin <= vmax {
            (vmin, vmax)
        } else {
            (vmax, vmin)
        };
        if lo == hi {
            return vec![lo];
        }

        let step = nice_step_at_least((hi - lo) / self.numbins as f64);
        if !step.is_finite() || step <= 0.0 {
            return vec![lo, hi];
        }

        let first = (lo / step).floor() * step;
        let last = (hi / step).ceil() * step;
        let count = ((last - first) / step).round() as usize;
        (0..=count)
            .map(|index| first + step * index as f64)
            .collect()
    }
}

/// Stitches logarithmic ticks below `linthresh` to linear ticks at or above
/// it.
///
/// The log delegate covers the sub-range capped at `linthresh` and its ticks
/// are kept strictly below the threshold; the linear delegate covers the
/// sub-range floored at `linthresh` and its ticks are kept at or above the
/// sub-range's lower bound. The two sequences are concatenated in delegate
/// order without sorting or value dedup.
#[derive(Debug, Clone)]
pub struct CombinedLogLinearLocator {
    linthresh: f64,
    log_locator: LogLocator,
    linear_locator: MaxNLocator,
}

impl CombinedLogLinearLocator {
    pub fn new(
        base: f64,
        subs: &[f64],
        linthresh: f64,
        numticks: Option<usize>,
        numbins: Option<usize>,
    ) -> ScaleResult<Self> {
        if !linthresh.is_finite() || linthresh <= 0.0 {
            return Err(ScaleError::InvalidParameter(
                "'linthresh' must be finite and positive".to_owned(),
            ));
        }
        Ok(Self {
            linthresh,
            log_locator: LogLocator::new(base, subs, numticks)?,
            linear_locator: MaxNLocator::new(numbins)?,
        })
    }

    #[must_use]
    pub fn linthresh(&self) -> f64 {
        self.linthresh
    }
}

impl TickLocator for CombinedLogLinearLocator {
    fn tick_values(&self, vmin: f64, vmax: f64) -> Vec<f64> {
        let log_vmin = vmin.min(self.linthresh);
        let log_vmax = vmax.min(self.linthresh);
        let linear_vmin = vmin.max(self.linthresh);
        let linear_vmax = vmax.max(self.linthresh);

        let mut ticks: Vec<f64> = self
            .log_locator
            .tick_values(log_vmin, log_vmax)
            .into_iter()
            .filter(|tick| *tick < self.linthresh)
            .collect();
        ticks.extend(
            self.linear_locator
                .tick_values(linear_vmin, linear_vmax)
                .into_iter()
                .filter(|tick| *tick >= linear_vmin),
        );
        ticks
    }

    fn locate(&self, axis: &dyn AxisView) -> Vec<f64> {
        let (mut vmin, vmax) = axis.view_interval();
        if vmin <= 0.0 {
            vmin = axis.minpos();
        }
        let ticks = self.tick_values(vmin, vmax);
        trace!(vmin, vmax, count = ticks.len(), "combined log-linear ticks");
        ticks
    }
}

/// Smallest nice step (1/2/5 ladder) not below `raw_step`.
fn nice_step_at_least(raw_step: f64) -> f64 {
    if !raw_step.is_finite() || raw_step <= 0.0 {
        return raw_step;
    }

    let magnitude = 10.0_f64.powf(raw_step.log10().floor());
    if !magnitude.is_finite() || magnitude <= 0.0 {
        return raw_step;
    }

    let normalized = raw_step / magnitude;
    let nice = if normalized <= 1.0 {
        1.0
    } else if normalized <= 2.0 {
        2.0
    } else if normalized <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * magnitude
}

fn snap_down(ratio: f64) -> i32 {
    if (ratio - ratio.round()).abs() <= EXPONENT_SNAP {
        ratio.round() as i32
    } else {
        ratio.floor() as i32
    }
}

fn snap_up(ratio: f64) -> i32 {
    if (ratio - ratio.round()).abs() <= EXPONENT_SNAP {
        ratio.round() as i32
    } else {
        ratio.ceil() as i32
    }
}
