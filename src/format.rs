//! Display formatting with Indian digit grouping: the last three integer
//! digits stand alone, everything before them groups in twos
//! (12,34,567.89).

/// Format a rupee amount with two decimals, e.g. `₹1,50,000.00`.
pub fn format_currency(value: f64) -> String {
    format!("₹{}", format_number(value, 2))
}

pub fn format_number(value: f64, decimals: usize) -> String {
    let sign = if value < 0.0 { "-" } else { "" };
    let fixed = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (fixed.as_str(), None),
    };

    let grouped = group_indian(int_part);
    match frac_part {
        Some(frac) => format!("{sign}{grouped}.{frac}"),
        None => format!("{sign}{grouped}"),
    }
}

fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let (head, tail) = digits.split_at(digits.len() - 3);

    let mut groups = Vec::new();
    let mut end = head.len();
    while end > 2 {
        groups.push(&head[end - 2..end]);
        end -= 2;
    }
    groups.push(&head[..end]);
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_numbers_stay_plain() {
        assert_eq!(format_number(0.0, 2), "0.00");
        assert_eq!(format_number(380.0, 2), "380.00");
        assert_eq!(format_number(999.0, 0), "999");
    }

    #[test]
    fn indian_grouping() {
        assert_eq!(format_number(2750.0, 2), "2,750.00");
        assert_eq!(format_number(150_000.0, 0), "1,50,000");
        assert_eq!(format_number(1_234_567.89, 2), "12,34,567.89");
        assert_eq!(format_number(500_000.0, 2), "5,00,000.00");
    }

    #[test]
    fn negatives_keep_their_sign() {
        assert_eq!(format_number(-30_000.0, 2), "-30,000.00");
        assert_eq!(format_currency(-8.33), "₹-8.33");
    }

    #[test]
    fn currency_prefixes_rupee() {
        assert_eq!(format_currency(275_000.0), "₹2,75,000.00");
    }
}
