/// Numeric conversion helpers.
///
/// Checked conversions used when turning literal text into numbers and when
/// turning sampling ranges into sample counts. Every helper reports failure
/// instead of silently losing precision.
pub mod num;
/// Bounded sampling ranges for evaluating a tree over a grid.
pub mod range;
