const RUPEE_SIGN: char = '₹';

/// Format an amount in rupees with Indian digit grouping and two decimals.
///
/// `1234567.5` renders as `₹12,34,567.50`. Non-finite amounts render as zero.
pub fn format_inr(amount: f64) -> String {
    let amount = if amount.is_finite() { amount } else { 0.0 };

    // No integer cast here: paise counts saturate for large amounts.
    let fixed = format!("{:.2}", amount.abs());
    let (rupees, paise) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let is_zero = fixed.bytes().all(|b| b == b'0' || b == b'.');
    let sign = if amount < 0.0 && !is_zero { "-" } else { "" };

    format!("{sign}{RUPEE_SIGN}{}.{paise}", group_indian(rupees))
}

/// Lakh/crore grouping: the last three digits, then pairs.
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (mut head, tail) = digits.split_at(digits.len() - 3);

    let mut groups = Vec::new();
    while head.len() > 2 {
        let (rest, pair) = head.split_at(head.len() - 2);
        groups.push(pair);
        head = rest;
    }
    groups.push(head);
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}
