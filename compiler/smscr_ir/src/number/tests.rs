use super::*;

#[test]
fn whole_doubles_keep_a_fraction_digit() {
    assert_eq!(format_double(3.0), "3.0");
    assert_eq!(format_double(-12.0), "-12.0");
    assert_eq!(format_double(1_234_567.0), "1234567.0");
}

#[test]
fn fractional_doubles_use_shortest_digits() {
    assert_eq!(format_double(0.125), "0.125");
    assert_eq!(format_double(2.5), "2.5");
    assert_eq!(format_double(0.001), "0.001");
}

#[test]
fn large_and_small_magnitudes_use_exponent_form() {
    assert_eq!(format_double(1e7), "1.0E7");
    assert_eq!(format_double(1.25e-5), "1.25E-5");
    assert_eq!(format_double(-3.5e10), "-3.5E10");
}

#[test]
fn zero_and_non_finite() {
    assert_eq!(format_double(0.0), "0.0");
    assert_eq!(format_double(-0.0), "-0.0");
    assert_eq!(format_double(f64::INFINITY), "Infinity");
    assert_eq!(format_double(f64::NEG_INFINITY), "-Infinity");
    assert_eq!(format_double(f64::NAN), "NaN");
}

#[test]
fn rendered_form_parses_back_to_same_value() {
    for value in [0.1, 3.0, 1e7, 6.02e23, 1.5e-9, -42.75] {
        let text = format_double(value);
        assert_eq!(text.parse::<f64>().ok(), Some(value), "{text}");
        assert!(text.parse::<i64>().is_err(), "{text} must not look like an integer");
    }
}
