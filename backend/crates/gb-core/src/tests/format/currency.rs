use crate::format_inr;

#[test]
fn test_format_inr_small_amounts() {
    assert_eq!(format_inr(0.0), "₹0.00");
    assert_eq!(format_inr(5.0), "₹5.00");
    assert_eq!(format_inr(999.999), "₹1,000.00");
}

#[test]
fn test_format_inr_uses_lakh_grouping() {
    assert_eq!(format_inr(1000.0), "₹1,000.00");
    assert_eq!(format_inr(100000.0), "₹1,00,000.00");
    assert_eq!(format_inr(1234567.5), "₹12,34,567.50");
    assert_eq!(format_inr(123456789.0), "₹12,34,56,789.00");
}

#[test]
fn test_format_inr_negative() {
    assert_eq!(format_inr(-999.0), "-₹999.00");
    assert_eq!(format_inr(-150000.25), "-₹1,50,000.25");
}

#[test]
fn test_format_inr_negative_rounding_to_zero_has_no_sign() {
    assert_eq!(format_inr(-0.001), "₹0.00");
}

#[test]
fn test_format_inr_non_finite_is_zero() {
    assert_eq!(format_inr(f64::NAN), "₹0.00");
    assert_eq!(format_inr(f64::INFINITY), "₹0.00");
}

#[test]
fn test_format_inr_amount_beyond_integer_paise_range_keeps_digits() {
    // 1e20 rupees is more paise than a u64 can hold
    assert_eq!(format_inr(1e20), "₹10,00,00,00,00,00,00,00,00,000.00");
    assert_eq!(format_inr(-1e20), "-₹10,00,00,00,00,00,00,00,00,000.00");
}
