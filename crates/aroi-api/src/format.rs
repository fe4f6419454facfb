//! Display formatting for confidence values.

/// Format a confidence in [0,1] as a percentage with two decimals,
/// e.g. `0.87` becomes `"87.00%"`.
///
/// Values outside [0,1] are clamped rather than rejected -- a response
/// that decoded is always rendered.
#[must_use]
pub fn percent(confidence: f64) -> String {
    format!("{:.2}%", clamp_unit(confidence) * 100.0)
}

/// Width of a confidence bar as a CSS percentage, e.g. `"87%"`.
///
/// Bars only need whole-percent resolution; the precise value is shown
/// as text by [`percent`].
#[must_use]
pub fn bar_width(confidence: f64) -> String {
    format!("{:.0}%", clamp_unit(confidence) * 100.0)
}

/// Clamp to [0,1], mapping NaN to 0.
fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_formats_two_decimals() {
        assert_eq!(percent(0.87), "87.00%");
        assert_eq!(percent(0.0), "0.00%");
        assert_eq!(percent(1.0), "100.00%");
        assert_eq!(percent(0.12345), "12.35%");
    }

    #[test]
    fn percent_clamps_out_of_range() {
        assert_eq!(percent(-0.5), "0.00%");
        assert_eq!(percent(1.5), "100.00%");
        assert_eq!(percent(f64::NAN), "0.00%");
    }

    #[test]
    fn bar_width_is_whole_percent() {
        assert_eq!(bar_width(0.87), "87%");
        assert_eq!(bar_width(0.004), "0%");
        assert_eq!(bar_width(2.0), "100%");
    }
}
