use mathlang::{
    error::RangeError,
    util::range::{AxisRange, MAX_SAMPLES},
};

fn range(src: &str) -> AxisRange {
    src.parse().unwrap_or_else(|e| panic!("{src:?} should be a valid range: {e}"))
}

fn range_error(src: &str) -> RangeError {
    match src.parse::<AxisRange>() {
        Ok(r) => panic!("{src:?} parsed but was expected to fail: {r:?}"),
        Err(e) => e,
    }
}

#[test]
fn samples_cover_both_ends() {
    assert_eq!(range("-2:2:1").samples().collect::<Vec<_>>(), [-2.0, -1.0, 0.0, 1.0, 2.0]);
    assert_eq!(range(" 5 : 5 : 1 ").samples().collect::<Vec<_>>(), [5.0]);
    assert_eq!(range("0:1:0.3").sample_count(), 4);
}

#[test]
fn sample_count_is_capped() {
    let last = MAX_SAMPLES - 1;
    assert_eq!(range(&format!("0:{last}:1")).sample_count(), MAX_SAMPLES);
    assert_eq!(range_error(&format!("0:{MAX_SAMPLES}:1")),
               RangeError::TooManySamples { limit: MAX_SAMPLES });
}

#[test]
fn huge_ranges_are_rejected_instead_of_shrunk() {
    for src in ["0:1e15:1", "0:1e300:1e-300", "-1e308:1e308:1"] {
        assert_eq!(range_error(src), RangeError::TooManySamples { limit: MAX_SAMPLES }, "{src}");
    }
}

#[test]
fn malformed_ranges_are_rejected() {
    assert!(matches!(range_error("0:1"), RangeError::Format { .. }));
    assert!(matches!(range_error("0:1:1:1"), RangeError::Format { .. }));
    assert!(matches!(range_error("a:1:1"), RangeError::NotANumber { .. }));
    assert!(matches!(range_error("inf:1:1"), RangeError::NotANumber { .. }));
    assert!(matches!(range_error("0:1:nan"), RangeError::NotANumber { .. }));
    assert_eq!(range_error("1:0:1"), RangeError::Reversed { min: 1.0, max: 0.0 });
    assert_eq!(range_error("0:1:0"), RangeError::InvalidStep { step: 0.0 });
    assert_eq!(range_error("0:1:-1"), RangeError::InvalidStep { step: -1.0 });
}

#[test]
fn errors_read_as_messages() {
    assert_eq!(range_error("0:1").to_string(), "expected MIN:MAX:STEP, found '0:1'");
    assert_eq!(range_error("0:1e15:1").to_string(),
               format!("range has more than {MAX_SAMPLES} samples per axis"));
}

#[test]
fn ranges_can_be_built_directly() {
    let r = AxisRange::new(0.0, 1.0, 0.25).unwrap();
    assert_eq!(r.samples().last(), Some(1.0));
    assert_eq!(AxisRange::new(f64::NEG_INFINITY, 0.0, 1.0),
               Err(RangeError::NotANumber { text: "-inf".to_owned() }));
    assert_eq!(AxisRange::new(0.0, 1.0, f64::INFINITY),
               Err(RangeError::InvalidStep { step: f64::INFINITY }));
}
