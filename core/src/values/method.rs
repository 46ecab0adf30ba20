/// Methods callable on template values, e.g. `{name.upper}` or `{size.format('1kb')}`.
///
/// Names resolve case-insensitively, so `padLeft`, `padleft` and `PADLEFT`
/// are the same method. Which values accept which method is decided by
/// [`Value::supports`](super::Value::supports).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Upper,
    Lower,
    Trim,
    Replace,
    Sub,
    Slice,
    PadLeft,
    PadRight,
    Format,
}

impl Method {
    pub const ALL: [Method; 9] = [
        Method::Upper,
        Method::Lower,
        Method::Trim,
        Method::Replace,
        Method::Sub,
        Method::Slice,
        Method::PadLeft,
        Method::PadRight,
        Method::Format,
    ];

    pub fn from_name(name: &str) -> Option<Method> {
        Self::ALL
            .into_iter()
            .find(|method| method.name().eq_ignore_ascii_case(name))
    }

    pub fn name(self) -> &'static str {
        match self {
            Method::Upper => "upper",
            Method::Lower => "lower",
            Method::Trim => "trim",
            Method::Replace => "replace",
            Method::Sub => "sub",
            Method::Slice => "slice",
            Method::PadLeft => "padLeft",
            Method::PadRight => "padRight",
            Method::Format => "format",
        }
    }
}
