/// Represents the ways a `MIN:MAX:STEP` sampling range can be invalid.
#[derive(Debug, Clone, PartialEq)]
pub enum RangeError {
    /// The text does not have exactly three `:`-separated parts.
    Format {
        /// The text that was given.
        found: String,
    },
    /// One of the parts is not a finite number.
    NotANumber {
        /// The offending part.
        text: String,
    },
    /// The minimum lies above the maximum.
    Reversed {
        /// The lower bound that was given.
        min: f64,
        /// The upper bound that was given.
        max: f64,
    },
    /// The step is zero, negative, or not finite.
    InvalidStep {
        /// The step that was given.
        step: f64,
    },
    /// The range would produce more samples per axis than allowed.
    TooManySamples {
        /// The largest number of samples allowed per axis.
        limit: u32,
    },
}

impl std::fmt::Display for RangeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Format { found } => write!(f, "expected MIN:MAX:STEP, found '{found}'"),
            Self::NotANumber { text } => write!(f, "'{text}' is not a finite number"),
            Self::Reversed { min, max } => {
                write!(f, "minimum {min} is greater than maximum {max}")
            },
            Self::InvalidStep { step } => write!(f, "step must be positive, found {step}"),
            Self::TooManySamples { limit } => {
                write!(f, "range has more than {limit} samples per axis")
            },
        }
    }
}

impl std::error::Error for RangeError {}
