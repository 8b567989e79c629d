// ---------------------------------------------------------------------------
// Number formatting
// ---------------------------------------------------------------------------

/// Render a statistic or table value for display.
///
/// | magnitude          | output                          |
/// |--------------------|---------------------------------|
/// | `0`                | `"0"`                           |
/// | `(0, 0.001)`       | scientific, 4 mantissa decimals |
/// | `[0.001, 0.1)`     | 4 decimals                      |
/// | `[0.1, 1)`         | 3 decimals                      |
/// | `[1, 1000)`        | 2 decimals                      |
/// | `[1000, ∞)`        | integer, ties away from zero    |
pub fn format_number(num: f64) -> String {
    if num == 0.0 {
        return "0".to_string();
    }

    let magnitude = num.abs();
    if magnitude < 0.001 {
        return format!("{num:.4e}");
    }
    if magnitude >= 1000.0 {
        return format!("{:.0}", num.round());
    }

    let decimals = if magnitude < 0.1 {
        4
    } else if magnitude < 1.0 {
        3
    } else {
        2
    };
    format!("{num:.decimals$}")
}

// ---------------------------------------------------------------------------
// Sector key formatting
// ---------------------------------------------------------------------------

const SET_SUFFIXES: [(&str, &str); 3] = [
    ("Set1", " (Set 1)"),
    ("Set2", " (Set 2)"),
    ("Set3", " (Set 3)"),
];

/// Turn a sector key such as `manufacturing_output_set1` into a display
/// name (`"Manufacturing Output  (Set 1)"`).
///
/// Only the first `SetN` of each kind is replaced. The suffix keeps its
/// leading space, so the output has two spaces before the parenthesis.
pub fn format_sector_key(key: &str) -> String {
    let mut name = key
        .split('_')
        .map(title_case)
        .collect::<Vec<_>>()
        .join(" ");

    for (from, to) in SET_SUFFIXES {
        name = name.replacen(from, to, 1);
    }
    name
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.as_str().to_lowercase().chars())
            .collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decimals(s: &str) -> usize {
        s.split_once('.').map(|(_, frac)| frac.len()).unwrap_or(0)
    }

    #[test]
    fn zero_is_literal() {
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(-0.0), "0");
    }

    #[test]
    fn tiny_values_use_scientific() {
        assert_eq!(format_number(0.0001), "1.0000e-4");
        assert_eq!(format_number(-0.00012345), "-1.2345e-4");
        assert_eq!(format_number(0.000999), "9.9900e-4");
    }

    #[test]
    fn large_values_are_integers() {
        assert_eq!(format_number(1500.0), "1500");
        assert_eq!(format_number(1000.0), "1000");
        assert_eq!(format_number(-2048.4), "-2048");
        assert_eq!(format_number(1234.5), "1235");
        assert_eq!(format_number(-1234.5), "-1235");
    }

    #[test]
    fn band_precision() {
        assert_eq!(decimals(&format_number(0.05)), 4);
        assert_eq!(decimals(&format_number(0.5)), 3);
        assert_eq!(format_number(5.0), "5.00");
        assert_eq!(format_number(0.05), "0.0500");
        assert_eq!(format_number(0.5), "0.500");
        assert_eq!(format_number(-42.125_5), "-42.13");
    }

    #[test]
    fn band_boundaries() {
        assert_eq!(format_number(0.001), "0.0010");
        assert_eq!(format_number(0.1), "0.100");
        assert_eq!(format_number(1.0), "1.00");
        assert_eq!(format_number(999.99), "999.99");
        assert_eq!(format_number(-0.1), "-0.100");
    }

    #[test]
    fn sector_key_with_set_suffix() {
        assert_eq!(
            format_sector_key("manufacturing_output_set1"),
            "Manufacturing Output  (Set 1)"
        );
        assert_eq!(format_sector_key("energy_SET2"), "Energy  (Set 2)");
        assert_eq!(format_sector_key("retail_set3"), "Retail  (Set 3)");
    }

    #[test]
    fn sector_key_plain() {
        assert_eq!(format_sector_key("agriculture"), "Agriculture");
        assert_eq!(format_sector_key("hEALTH_care"), "Health Care");
        assert_eq!(format_sector_key("a__b"), "A  B");
        assert_eq!(format_sector_key(""), "");
    }

    #[test]
    fn only_first_set_occurrence_is_replaced() {
        assert_eq!(format_sector_key("set1_set1"), " (Set 1) Set1");
    }
}
