use crate::format_percentage;

#[test]
fn test_format_percentage() {
    assert_eq!(format_percentage(18.0), "18.00%");
    assert_eq!(format_percentage(2.5), "2.50%");
    assert_eq!(format_percentage(0.0), "0.00%");
}

#[test]
fn test_format_percentage_non_finite_is_zero() {
    assert_eq!(format_percentage(f64::NAN), "0.00%");
}
