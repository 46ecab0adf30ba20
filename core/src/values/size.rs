//! File size formatting.

const UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];
const DEFAULT_DECIMALS: usize = 2;
const MAX_DECIMALS: usize = 99;

/// Render a byte count.
///
/// - no format: auto-scaled unit with two decimals (`1.50 MB`)
/// - `1b`, `1kb`, `1mb`: fixed unit (case-insensitive)
/// - `.Nf`: auto-scaled unit with `N` decimals
///
/// Unrecognized formats use the default. Zero bytes is always `0 B`.
pub fn format_size(bytes: u64, format: Option<&str>) -> String {
    if bytes == 0 {
        return "0 B".to_string();
    }
    let Some(format) = format.filter(|f| !f.is_empty()) else {
        return auto_scaled(bytes, DEFAULT_DECIMALS);
    };

    if format.eq_ignore_ascii_case("1b") {
        format!("{bytes} B")
    } else if format.eq_ignore_ascii_case("1kb") {
        format!("{} KB", fixed(bytes as f64 / 1024.0, 0))
    } else if format.eq_ignore_ascii_case("1mb") {
        format!("{} MB", fixed(bytes as f64 / (1024.0 * 1024.0), 2))
    } else if let Some(decimals) = format
        .strip_prefix('.')
        .and_then(|f| f.strip_suffix('f'))
    {
        let decimals = match decimals.parse::<usize>() {
            Ok(d) if d <= MAX_DECIMALS => d,
            _ => DEFAULT_DECIMALS,
        };
        auto_scaled(bytes, decimals)
    } else {
        auto_scaled(bytes, DEFAULT_DECIMALS)
    }
}

fn auto_scaled(bytes: u64, decimals: usize) -> String {
    let mut size = bytes as f64;
    let mut unit = 0;
    while size >= 1024.0 && unit < UNITS.len() - 1 {
        size /= 1024.0;
        unit += 1;
    }
    format!("{} {}", fixed(size, decimals), UNITS[unit])
}

// Fixed-point rendering that rounds halves away from zero.
fn fixed(value: f64, decimals: usize) -> String {
    let factor = 10f64.powi(decimals as i32);
    let rounded = (value * factor).round() / factor;
    format!("{rounded:.decimals$}")
}
