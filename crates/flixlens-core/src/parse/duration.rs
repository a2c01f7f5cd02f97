/// Parse an exported duration into whole minutes.
///
/// Accepts `H:MM:SS`, `H:MM` or a bare number of minutes. A component that is
/// not a number counts as zero inside the colon forms. Anything else, and any
/// result below one minute, yields 0 so the caller can drop the row.
pub fn parse_duration_minutes(raw: &str) -> u32 {
    let raw = raw.trim();
    if raw.is_empty() {
        return 0;
    }

    let parts: Vec<f64> = raw.split(':').map(component).collect();
    let minutes = match parts.as_slice() {
        [hours, minutes, seconds] => hours * 60.0 + minutes + (seconds / 60.0).round(),
        [hours, minutes] => hours * 60.0 + minutes,
        [minutes] => *minutes,
        _ => 0.0,
    };

    let minutes = minutes.round();
    if minutes >= 1.0 {
        minutes.min(u32::MAX as f64) as u32
    } else {
        0
    }
}

fn component(part: &str) -> f64 {
    part.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hours_minutes_seconds() {
        assert_eq!(parse_duration_minutes("1:30:00"), 90);
        assert_eq!(parse_duration_minutes("0:42:29"), 42);
        assert_eq!(parse_duration_minutes("0:42:30"), 43);
        assert_eq!(parse_duration_minutes("2:05:59"), 126);
    }

    #[test]
    fn test_hours_minutes() {
        assert_eq!(parse_duration_minutes("1:15"), 75);
        assert_eq!(parse_duration_minutes("0:07"), 7);
    }

    #[test]
    fn test_bare_number_is_minutes() {
        assert_eq!(parse_duration_minutes("45"), 45);
        assert_eq!(parse_duration_minutes(" 12 "), 12);
        assert_eq!(parse_duration_minutes("2.6"), 3);
    }

    #[test]
    fn test_invalid_forms_parse_to_zero() {
        assert_eq!(parse_duration_minutes(""), 0);
        assert_eq!(parse_duration_minutes("soon"), 0);
        assert_eq!(parse_duration_minutes("1:2:3:4"), 0);
        assert_eq!(parse_duration_minutes("0:00:10"), 0);
        assert_eq!(parse_duration_minutes("0"), 0);
        assert_eq!(parse_duration_minutes("-5"), 0);
        assert_eq!(parse_duration_minutes("NaN"), 0);
    }

    #[test]
    fn test_non_numeric_component_counts_as_zero() {
        assert_eq!(parse_duration_minutes("1:xx:00"), 60);
        assert_eq!(parse_duration_minutes("x:20"), 20);
    }
}
