/// Format a percentage with two decimals, e.g. `18.00%`.
pub fn format_percentage(value: f64) -> String {
    let value = if value.is_finite() { value } else { 0.0 };
    format!("{value:.2}%")
}
