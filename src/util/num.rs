use ordered_float::NotNan;

use crate::error::ParseError;

/// Converts the text of a numeric literal into a finite, non-NaN `f64`.
///
/// The lexer only produces literals made of ASCII digits with at most one
/// decimal point, so a failure here means either an internal inconsistency
/// or a literal so long that it overflows to infinity.
///
/// ## Errors
/// Returns `ParseError::InvalidNodeCreation` if the text is not a decimal
/// number or does not fit in a finite `f64`.
///
/// ## Example
/// ```
/// use mathlang::util::num::literal_to_not_nan;
///
/// assert_eq!(literal_to_not_nan("2.5").unwrap().into_inner(), 2.5);
/// assert!(literal_to_not_nan("abc").is_err());
/// assert!(literal_to_not_nan(&"9".repeat(400)).is_err());
/// ```
pub fn literal_to_not_nan(text: &str) -> Result<NotNan<f64>, ParseError> {
    let invalid = |details: String| ParseError::InvalidNodeCreation { details };

    let value: f64 = text.parse()
                         .map_err(|e| invalid(format!("cannot convert '{text}' to a number: {e}")))?;

    if !value.is_finite() {
        return Err(invalid(format!("literal '{text}' is out of range")));
    }

    NotNan::new(value).map_err(|_| invalid(format!("literal '{text}' is not a number")))
}

/// Safely converts a non-negative, integral `f64` into a `usize`.
///
/// Returns `None` if the value is negative, fractional, not finite or larger
/// than `usize::MAX` can hold exactly.
///
/// ## Example
/// ```
/// use mathlang::util::num::f64_to_usize_checked;
///
/// assert_eq!(f64_to_usize_checked(10.0), Some(10));
/// assert_eq!(f64_to_usize_checked(-1.0), None);
/// assert_eq!(f64_to_usize_checked(2.5), None);
/// ```
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
pub fn f64_to_usize_checked(value: f64) -> Option<usize> {
    if !value.is_finite() || value < 0.0 || value.fract() != 0.0 || value >= usize::MAX as f64 {
        return None;
    }

    Some(value as usize)
}
