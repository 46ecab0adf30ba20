use super::chinese;

/// Format a sequence index.
///
/// - no format: plain decimal
/// - format starting with a Chinese digit (`一`, `壹`, `十`, ...): that digit
///   is added as an offset and the result is written in Chinese numerals,
///   financial forms when the digit is one
/// - format starting with an ASCII digit: the first non-zero digit is an
///   offset and the format length is the zero-padded width, so `01` counts
///   from one with two digits and `000` counts from zero with three
///
/// Numeric results are clamped to be non-negative.
pub fn format_index(value: i64, format: Option<&str>) -> String {
    let Some(format) = format.filter(|f| !f.is_empty()) else {
        return value.to_string();
    };
    let Some(first) = format.chars().next() else {
        return value.to_string();
    };

    if let Some(start) = chinese::numeral_value(first) {
        return chinese::to_chinese(value.saturating_add(start), chinese::is_upper(first));
    }

    let (offset, width) = if first.is_ascii_digit() {
        let offset = format
            .chars()
            .find(|&c| c != '0')
            .and_then(|c| c.to_digit(10))
            .unwrap_or(0);
        (offset as i64, format.chars().count())
    } else {
        (0, 0)
    };
    let value = value.saturating_add(offset).max(0);
    format!("{value:0width$}")
}
