/// Calculates the byte offset of a 1-based line and byte column in the source text,
/// as reported by `serde_json`. A column of 0 (reported for errors before the first
/// character of a line) maps to the line start. The result is clamped to the source
/// and moved back onto a char boundary so it can be used as a span start.
pub fn offset_of_line_and_column(source: &str, line: usize, column: usize) -> usize {
    let line_start: usize = source
        .split_inclusive('\n')
        .take(line.saturating_sub(1))
        .map(str::len)
        .sum();
    floor_char_boundary(source, line_start + column.saturating_sub(1))
}

/// Clamps `offset` to the source and moves it back to the nearest char boundary.
pub fn floor_char_boundary(source: &str, offset: usize) -> usize {
    let mut offset = offset.min(source.len());
    while !source.is_char_boundary(offset) {
        offset -= 1;
    }
    offset
}

/// Renders a number the way a JavaScript template literal would: integral values
/// without a trailing `.0`, the non-finite values as `NaN`/`Infinity`, and
/// magnitudes below `1e-6` or from `1e21` up in exponent form (`1e-7`, `1.5e+21`).
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n.is_infinite() {
        if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string()
    } else if n == 0.0 {
        "0".to_string()
    } else if n.abs() < 1e-6 || n.abs() >= 1e21 {
        // Rust's `{:e}` already picks the shortest digits; JS also signs the exponent.
        let formatted = format!("{n:e}");
        match formatted.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{mantissa}e+{exponent}")
            }
            _ => formatted,
        }
    } else if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{n}")
    }
}
