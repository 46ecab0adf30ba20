use chrono::NaiveDateTime;

/// The primitive behind a [`Value`](super::Value), borrowed from it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RawValue<'a> {
    Str(&'a str),
    Int(i64),
    DateTime(NaiveDateTime),
    Path(&'a str),
    Dimensions { width: u32, height: u32 },
    Bytes(u64),
}

impl RawValue<'_> {
    /// Integer view used for method and slice arguments.
    ///
    /// Integers are taken as-is, byte counts when they fit, and strings when
    /// they parse as an integer after trimming. Everything else is `None` and
    /// the caller falls back to its own default.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            RawValue::Int(v) => Some(*v),
            RawValue::Bytes(b) => i64::try_from(*b).ok(),
            RawValue::Str(s) => s.trim().parse().ok(),
            RawValue::DateTime(_) | RawValue::Path(_) | RawValue::Dimensions { .. } => None,
        }
    }
}
