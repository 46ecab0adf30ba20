//! Integer formatting with .NET-style numeric format strings.
//!
//! Supported: custom `0`/`#` patterns (`000` pads to three digits), `Dn`,
//! `Xn`/`xn`, `Fn` and `Nn`. Anything else renders the plain decimal.

// Precisions above this are treated as an unrecognized format.
const MAX_PRECISION: usize = 99;

pub fn format_number(value: i64, format: Option<&str>) -> String {
    let Some(format) = format.filter(|f| !f.is_empty()) else {
        return value.to_string();
    };

    if format.chars().all(|c| c == '0' || c == '#') {
        let width = format.chars().filter(|&c| c == '0').count();
        return zero_pad(value, width);
    }

    let mut chars = format.chars();
    let Some(specifier) = chars.next() else {
        return value.to_string();
    };
    let rest = chars.as_str();
    let precision = if rest.is_empty() {
        None
    } else {
        match rest.parse::<usize>() {
            Ok(p) if p <= MAX_PRECISION => Some(p),
            _ => return value.to_string(),
        }
    };

    match specifier {
        'D' | 'd' => zero_pad(value, precision.unwrap_or(0)),
        'X' => format!("{:0width$X}", value, width = precision.unwrap_or(0)),
        'x' => format!("{:0width$x}", value, width = precision.unwrap_or(0)),
        'F' | 'f' => with_decimals(value.to_string(), precision.unwrap_or(2)),
        'N' | 'n' => with_decimals(group_thousands(value), precision.unwrap_or(2)),
        _ => value.to_string(),
    }
}

fn zero_pad(value: i64, width: usize) -> String {
    let digits = format!("{:0width$}", value.unsigned_abs());
    if value < 0 { format!("-{digits}") } else { digits }
}

fn with_decimals(integer: String, decimals: usize) -> String {
    if decimals == 0 {
        integer
    } else {
        format!("{integer}.{}", "0".repeat(decimals))
    }
}

fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        grouped.push('-');
    }
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}
