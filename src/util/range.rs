use std::str::FromStr;

use crate::{error::RangeError, util::num::f64_to_usize_checked};

/// The largest number of samples a single axis may hold.
pub const MAX_SAMPLES: u32 = 10_000;

/// An inclusive sampling range `MIN:MAX:STEP` for one axis.
///
/// The sample count is fixed and bounded by [`MAX_SAMPLES`] when the range
/// is built, so sampling never allocates and never silently shrinks.
///
/// # Example
/// ```
/// use mathlang::util::range::AxisRange;
///
/// let range: AxisRange = "-1:1:0.5".parse().unwrap();
/// assert_eq!(range.sample_count(), 5);
/// assert_eq!(range.samples().collect::<Vec<_>>(), [-1.0, -0.5, 0.0, 0.5, 1.0]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisRange {
    min:   f64,
    step:  f64,
    count: u32,
}

impl AxisRange {
    /// Builds a range from `min` to `max` inclusive in increments of `step`.
    ///
    /// # Errors
    /// Returns a [`RangeError`] if a bound is not finite, `min > max`, the
    /// step is not a positive finite number, or the range holds more than
    /// [`MAX_SAMPLES`] samples.
    pub fn new(min: f64, max: f64, step: f64) -> Result<Self, RangeError> {
        for bound in [min, max] {
            if !bound.is_finite() {
                return Err(RangeError::NotANumber { text: bound.to_string() });
            }
        }
        if min > max {
            return Err(RangeError::Reversed { min, max });
        }
        if !step.is_finite() || step <= 0.0 {
            return Err(RangeError::InvalidStep { step });
        }

        let count = f64_to_usize_checked(((max - min) / step).floor())
            .and_then(|steps| u32::try_from(steps).ok())
            .and_then(|steps| steps.checked_add(1))
            .filter(|&n| n <= MAX_SAMPLES)
            .ok_or(RangeError::TooManySamples { limit: MAX_SAMPLES })?;

        Ok(Self { min, step, count })
    }

    /// Returns the number of samples on this axis, at least one.
    #[must_use]
    pub const fn sample_count(&self) -> u32 {
        self.count
    }

    /// Returns the sample coordinates in increasing order.
    pub fn samples(&self) -> impl Iterator<Item = f64> + Clone + use<> {
        let Self { min, step, count } = *self;
        (0..count).map(move |i| min + step * f64::from(i))
    }
}

impl FromStr for AxisRange {
    type Err = RangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(':').collect();
        let [min, max, step] = parts.as_slice() else {
            return Err(RangeError::Format { found: s.to_owned() });
        };

        let number = |text: &str| {
            text.trim()
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .ok_or_else(|| RangeError::NotANumber { text: text.to_owned() })
        };

        Self::new(number(min)?, number(max)?, number(step)?)
    }
}
