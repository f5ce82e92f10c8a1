/// Parsing errors.
///
/// Defines every error that can occur while lexing and parsing an
/// expression: missing delimiters, unknown input, tokens in impossible
/// positions, over-deep nesting and internal node-construction failures.
/// Evaluation has no error type; undefined operations yield IEEE-754
/// infinities and NaNs instead.
pub mod parse_error;
/// Sampling range errors.
pub mod range_error;

pub use parse_error::{ParseError, ParseErrorKind};
pub use range_error::RangeError;
