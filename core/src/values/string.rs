//! String methods.
//!
//! All positions and widths count characters, not bytes. Argument coercion
//! never fails: an argument that is not an integer falls back to the
//! method's default.

use super::Value;

// ============================================================================
// Slicing
// ============================================================================

/// Python-style character slice.
///
/// Negative bounds count from the end, both bounds are clamped to
/// `[0, len]`, and `start >= end` yields an empty string. Missing bounds
/// default to the start and end of the string.
pub fn slice_chars(s: &str, start: Option<i64>, end: Option<i64>) -> String {
    let len = s.chars().count() as i64;
    let start = normalize_bound(start.unwrap_or(0), len);
    let end = normalize_bound(end.unwrap_or(len), len);
    if start >= end {
        return String::new();
    }
    s.chars().skip(start).take(end - start).collect()
}

fn normalize_bound(index: i64, len: i64) -> usize {
    let index = if index < 0 { index.saturating_add(len) } else { index };
    index.clamp(0, len) as usize
}

pub(super) fn sub(s: &str, args: &[Value]) -> String {
    let Some(first) = args.first() else {
        return s.to_string();
    };
    let start = first.as_int().unwrap_or(0);
    let end = args.get(1).and_then(Value::as_int);
    slice_chars(s, Some(start), end)
}

pub(super) fn slice(s: &str, args: &[Value]) -> String {
    let start = args.first().and_then(Value::as_int);
    let end = args.get(1).and_then(Value::as_int);
    slice_chars(s, start, end)
}

// ============================================================================
// Transformations
// ============================================================================

pub(super) fn replace(s: &str, args: &[Value]) -> String {
    let [old, new, ..] = args else {
        return s.to_string();
    };
    let old = old.to_string(None);
    if old.is_empty() {
        return s.to_string();
    }
    s.replace(&old, &new.to_string(None))
}

#[derive(Debug, Clone, Copy)]
pub(super) enum PadSide {
    Left,
    Right,
}

pub(super) fn pad(s: &str, args: &[Value], side: PadSide) -> String {
    let Some(width) = args.first() else {
        return s.to_string();
    };
    let len = s.chars().count();
    let width = match width.as_int() {
        Some(w) if w > len as i64 => w as usize,
        _ => return s.to_string(),
    };
    let fill = args
        .get(1)
        .and_then(|arg| arg.to_string(None).chars().next())
        .unwrap_or(' ');
    let padding: String = core::iter::repeat_n(fill, width - len).collect();
    match side {
        PadSide::Left => padding + s,
        PadSide::Right => format!("{s}{padding}"),
    }
}
