//! Display formatting for prices, volumes and changes.

const TRILLION: f64 = 1_000_000_000_000.0;
const BILLION: f64 = 1_000_000_000.0;
const MILLION: f64 = 1_000_000.0;
const THOUSAND: f64 = 1_000.0;

/// Rounds half away from zero at `decimals` places, matching en-US display.
#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
fn round_half_up(num: f64, decimals: usize) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (num * factor).round() / factor
}

/// Formats with en-US thousands separators and exactly `decimals` decimal places.
pub fn format_number(num: f64, decimals: usize) -> String {
    let fixed = format!("{:.*}", decimals, round_half_up(num.abs(), decimals));
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (fixed.as_str(), None),
    };

    let mut grouped = String::with_capacity(fixed.len() + int_part.len() / 3 + 1);
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    if let Some(frac_part) = frac_part {
        grouped.push('.');
        grouped.push_str(frac_part);
    }

    // Small negatives keep their sign, e.g. -0.00
    if num < 0.0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

/// Formats an amount in PKR, optionally compacted to T/B/M.
pub fn format_currency(amount: f64, compact: bool) -> String {
    if compact && amount >= TRILLION {
        return format!("PKR {}T", format_number(amount / TRILLION, 2));
    }
    if compact && amount >= BILLION {
        return format!("PKR {}B", format_number(amount / BILLION, 2));
    }
    if compact && amount >= MILLION {
        return format!("PKR {}M", format_number(amount / MILLION, 2));
    }
    format!("PKR {}", format_number(amount, 0))
}

/// Abbreviates volumes with B/M/K suffixes.
pub fn format_volume(volume: u64) -> String {
    let v = volume as f64;
    if v >= BILLION {
        format!("{}B", format_number(v / BILLION, 2))
    } else if v >= MILLION {
        format!("{}M", format_number(v / MILLION, 2))
    } else if v >= THOUSAND {
        format!("{}K", format_number(v / THOUSAND, 2))
    } else {
        volume.to_string()
    }
}

/// `format_number` with a leading `+` for non-negative values.
pub fn format_signed(num: f64, decimals: usize) -> String {
    let formatted = format_number(num, decimals);
    if num >= 0.0 {
        format!("+{formatted}")
    } else {
        formatted
    }
}

/// `format_number` with a leading `+` only for strictly positive values.
pub fn format_gain(num: f64, decimals: usize) -> String {
    let formatted = format_number(num, decimals);
    if num > 0.0 {
        format!("+{formatted}")
    } else {
        formatted
    }
}

/// Signed percentage, e.g. `+0.48%`.
pub fn format_percent(num: f64) -> String {
    format!("{}%", format_signed(num, 2))
}

/// Value scaled by `unit` with one decimal and a suffix, e.g. `400.0B`.
pub fn format_scaled(value: f64, unit: f64, suffix: &str) -> String {
    format!("{}{suffix}", format_number(value / unit, 1))
}

/// CSS class for a positive, negative or flat change.
pub fn change_class(change: f64) -> &'static str {
    if change > 0.0 {
        "change-up"
    } else if change < 0.0 {
        "change-down"
    } else {
        "change-flat"
    }
}

/// Up/down class where a flat change counts as up.
pub fn direction_class(change: f64) -> &'static str {
    if change >= 0.0 { "change-up" } else { "change-down" }
}

/// Background CSS class matching [`change_class`].
pub fn change_bg_class(change: f64) -> &'static str {
    if change > 0.0 {
        "change-bg-up"
    } else if change < 0.0 {
        "change-bg-down"
    } else {
        "change-bg-flat"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number_grouping() {
        assert_eq!(format_number(95234.56, 2), "95,234.56");
        assert_eq!(format_number(1_234_567.0, 0), "1,234,567");
        assert_eq!(format_number(999.0, 2), "999.00");
        assert_eq!(format_number(100.0, 0), "100");
        assert_eq!(format_number(0.0, 2), "0.00");
    }

    #[test]
    fn test_format_number_negative() {
        assert_eq!(format_number(-5.25, 2), "-5.25");
        assert_eq!(format_number(-1234.5, 1), "-1,234.5");
        assert_eq!(format_number(-0.001, 2), "-0.00");
        assert_eq!(format_number(-0.0, 2), "0.00");
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(2_500_000_000_000.0, true), "PKR 2.50T");
        assert_eq!(format_currency(612_000_000_000.0, true), "PKR 612.00B");
        assert_eq!(format_currency(4_500_000.0, true), "PKR 4.50M");
        assert_eq!(format_currency(195.7, false), "PKR 196");
        assert_eq!(format_currency(2_500_000_000_000.0, false), "PKR 2,500,000,000,000");
    }

    #[test]
    fn test_format_volume() {
        assert_eq!(format_volume(245_678_900), "245.68M");
        assert_eq!(format_volume(1_500_000_000), "1.50B");
        assert_eq!(format_volume(2_500), "2.50K");
        assert_eq!(format_volume(999), "999");
    }

    #[test]
    fn test_signed_and_percent() {
        assert_eq!(format_signed(245.32, 2), "+245.32");
        assert_eq!(format_signed(-5.25, 2), "-5.25");
        assert_eq!(format_signed(0.0, 2), "+0.00");
        assert_eq!(format_percent(-0.48), "-0.48%");
    }

    #[test]
    fn test_ties_round_half_up() {
        assert_eq!(format_currency(124.5, false), "PKR 125");
        assert_eq!(format_currency(98.5, false), "PKR 99");
        assert_eq!(format_volume(1125), "1.13K");
        assert_eq!(format_number(0.125, 2), "0.13");
        assert_eq!(format_number(-2.5, 0), "-3");
        assert_eq!(format_number(1_234_567.5, 0), "1,234,568");
    }

    #[test]
    fn test_format_gain() {
        assert_eq!(format_gain(12.5, 2), "+12.50");
        assert_eq!(format_gain(0.0, 2), "0.00");
        assert_eq!(format_gain(-3.2, 2), "-3.20");
    }

    #[test]
    fn test_format_scaled() {
        assert_eq!(format_scaled(400_000_000_000.0, 1e9, "B"), "400.0B");
        assert_eq!(format_scaled(6_430_000.0, 1e6, "M"), "6.4M");
    }

    #[test]
    fn test_change_classes() {
        assert_eq!(change_class(1.0), "change-up");
        assert_eq!(change_class(-1.0), "change-down");
        assert_eq!(change_class(0.0), "change-flat");
        assert_eq!(change_bg_class(-0.1), "change-bg-down");
        assert_eq!(direction_class(0.0), "change-up");
        assert_eq!(direction_class(0.5), "change-up");
        assert_eq!(direction_class(-0.5), "change-down");
    }
}
