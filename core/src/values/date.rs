//! Date and time patterns in .NET custom format syntax.
//!
//! Patterns such as `yyyy-MM-dd HH:mm:ss` are interpreted token by token and
//! rendered with chrono. Quoted text (`'at'`), `\x` escapes and the
//! single-letter standard formats of the invariant culture are supported.
//! A pattern that cannot be interpreted yields `None` so callers can fall
//! back to a default rendering.

use chrono::{Datelike, Local, NaiveDateTime, NaiveTime, Offset, TimeZone, Timelike};

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

// Fractional seconds are limited to seven digits.
const MAX_FRACTION_DIGITS: usize = 7;

/// `yyyy-MM-dd` at midnight, `yyyy-MM-dd HH:mm:ss` otherwise.
pub fn default_date(dt: &NaiveDateTime) -> String {
    if dt.time() == NaiveTime::MIN {
        dt.format(DATE_FORMAT).to_string()
    } else {
        dt.format(DATE_TIME_FORMAT).to_string()
    }
}

/// Render `dt` with a pattern, falling back to [`default_date`].
pub fn format_date_or_default(dt: &NaiveDateTime, format: Option<&str>) -> String {
    match format.filter(|f| !f.is_empty()) {
        Some(pattern) => format_date(dt, pattern).unwrap_or_else(|| default_date(dt)),
        None => default_date(dt),
    }
}

/// Render `dt` with a .NET-style pattern. Returns `None` for invalid patterns.
pub fn format_date(dt: &NaiveDateTime, pattern: &str) -> Option<String> {
    let mut chars = pattern.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        return render_custom(dt, standard_pattern(c)?);
    }
    render_custom(dt, pattern)
}

fn standard_pattern(c: char) -> Option<&'static str> {
    Some(match c {
        'd' => "MM/dd/yyyy",
        'D' => "dddd, dd MMMM yyyy",
        'f' => "dddd, dd MMMM yyyy HH:mm",
        'F' => "dddd, dd MMMM yyyy HH:mm:ss",
        'g' => "MM/dd/yyyy HH:mm",
        'G' => "MM/dd/yyyy HH:mm:ss",
        'm' | 'M' => "MMMM dd",
        'o' | 'O' => "yyyy'-'MM'-'dd'T'HH':'mm':'ss'.'fffffff",
        'r' | 'R' => "ddd, dd MMM yyyy HH':'mm':'ss 'GMT'",
        's' => "yyyy'-'MM'-'dd'T'HH':'mm':'ss",
        't' => "HH:mm",
        'T' => "HH:mm:ss",
        'u' => "yyyy'-'MM'-'dd HH':'mm':'ss'Z'",
        'y' | 'Y' => "yyyy MMMM",
        _ => return None,
    })
}

fn render_custom(dt: &NaiveDateTime, pattern: &str) -> Option<String> {
    let chars: Vec<char> = pattern.chars().collect();
    let mut out = String::with_capacity(pattern.len() + 8);
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        match c {
            '\'' | '"' => {
                let close = chars[i + 1..].iter().position(|&q| q == c)? + i + 1;
                out.extend(&chars[i + 1..close]);
                i = close + 1;
            }
            '\\' => {
                out.push(*chars.get(i + 1)?);
                i += 2;
            }
            // `%d` forces a lone specifier to be read as a custom token.
            '%' => match chars.get(i + 1) {
                Some('%') | None => return None,
                Some(_) => i += 1,
            },
            'y' | 'M' | 'd' | 'H' | 'h' | 'm' | 's' | 'f' | 'F' | 't' | 'z' | 'g' | 'K' => {
                let run = chars[i..].iter().take_while(|&&r| r == c).count();
                out.push_str(&render_token(dt, c, run)?);
                i += run;
            }
            _ => {
                out.push(c);
                i += 1;
            }
        }
    }
    Some(out)
}

fn render_token(dt: &NaiveDateTime, c: char, run: usize) -> Option<String> {
    let two = |v: u32| if run >= 2 { format!("{v:02}") } else { v.to_string() };
    Some(match c {
        'y' => match run {
            1 => (dt.year().rem_euclid(100)).to_string(),
            2 => format!("{:02}", dt.year().rem_euclid(100)),
            _ => format!("{:0run$}", dt.year()),
        },
        'M' => match run {
            1 | 2 => two(dt.month()),
            3 => dt.format("%b").to_string(),
            _ => dt.format("%B").to_string(),
        },
        'd' => match run {
            1 | 2 => two(dt.day()),
            3 => dt.format("%a").to_string(),
            _ => dt.format("%A").to_string(),
        },
        'H' => two(dt.hour()),
        'h' => two(dt.hour12().1),
        'm' => two(dt.minute()),
        's' => two(dt.second()),
        'f' | 'F' => {
            if run > MAX_FRACTION_DIGITS {
                return None;
            }
            let nanos = dt.nanosecond() % 1_000_000_000;
            let digits = format!("{:09}", nanos)[..run].to_string();
            if c == 'F' {
                digits.trim_end_matches('0').to_string()
            } else {
                digits
            }
        }
        't' => {
            let designator = if dt.hour12().0 { "PM" } else { "AM" };
            if run == 1 { designator[..1].to_string() } else { designator.to_string() }
        }
        'g' => "A.D.".to_string(),
        'z' => local_offset(dt, run),
        'K' => String::new(),
        _ => return None,
    })
}

// Naive timestamps are local times, so `z` renders the local UTC offset.
fn local_offset(dt: &NaiveDateTime, run: usize) -> String {
    let seconds = Local
        .offset_from_local_datetime(dt)
        .single()
        .map(|offset| offset.fix().local_minus_utc())
        .unwrap_or(0);
    let sign = if seconds < 0 { '-' } else { '+' };
    let hours = seconds.abs() / 3600;
    let minutes = seconds.abs() % 3600 / 60;
    match run {
        1 => format!("{sign}{hours}"),
        2 => format!("{sign}{hours:02}"),
        _ => format!("{sign}{hours:02}:{minutes:02}"),
    }
}
