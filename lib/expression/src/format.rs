/// Maximum number of fractional digits shown for non-integral values
pub const DECIMAL_PLACES: usize = 8;

/// Renders a value for display
///
/// Integral values are printed without a fractional part, anything else is
/// rounded to [`DECIMAL_PLACES`] with trailing zeros removed
pub fn format_value(v: f64) -> String {
    let formatted = if v.fract() == 0. {
        format!("{}", v)
    } else {
        let rounded = format!("{:.*}", DECIMAL_PLACES, v);
        rounded
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    };

    // Either -0 itself or a negative value too small to survive rounding
    if formatted == "-0" {
        return "0".to_string();
    }
    formatted
}
