//! Display formatting for distances.

/// Formats a distance in miles for display.
///
/// `None` renders as an empty string so the caller decides whether to omit
/// the field or show a placeholder. Precision drops as magnitude grows:
/// sub-mile distances collapse to `"< 1 mi"`, single-digit miles keep one
/// decimal place, and everything from ten miles up rounds to a whole
/// number.
#[must_use]
pub fn format_distance(miles: Option<f64>) -> String {
    match miles {
        None => String::new(),
        Some(d) if d < 1.0 => "< 1 mi".to_string(),
        Some(d) if d < 10.0 => format!("{d:.1} mi"),
        Some(d) => format!("{} mi", d.round()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_is_empty() {
        assert_eq!(format_distance(None), "");
    }

    #[test]
    fn under_one_mile() {
        assert_eq!(format_distance(Some(0.4)), "< 1 mi");
        assert_eq!(format_distance(Some(0.0)), "< 1 mi");
        assert_eq!(format_distance(Some(0.99)), "< 1 mi");
    }

    #[test]
    fn single_digit_miles_keep_one_decimal() {
        assert_eq!(format_distance(Some(1.0)), "1.0 mi");
        assert_eq!(format_distance(Some(3.44)), "3.4 mi");
        assert_eq!(format_distance(Some(9.55)), "9.6 mi");
    }

    #[test]
    fn ten_miles_and_up_round_to_integer() {
        assert_eq!(format_distance(Some(15.6)), "16 mi");
        assert_eq!(format_distance(Some(12.3)), "12 mi");
        assert_eq!(format_distance(Some(247.0)), "247 mi");
    }

    #[test]
    fn tier_boundary_just_under_ten_stays_one_decimal() {
        // 9.96 is still in the < 10 tier even though it renders as "10.0".
        assert_eq!(format_distance(Some(9.96)), "10.0 mi");
    }

    #[test]
    fn tier_boundary_at_ten_uses_integer_tier() {
        assert_eq!(format_distance(Some(10.0)), "10 mi");
    }
}
