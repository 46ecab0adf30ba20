use super::{
    FileMetadata, ImageInfo, Method, RawValue, date, file, image, number, size,
    string::{self, PadSide},
};
use crate::evaluator::EvalError;
use crate::index_expr::{IndexProgram, format_index};
use chrono::NaiveDateTime;

/// A runtime value produced while rendering a template.
///
/// Values are immutable: methods return new values. Every variant renders
/// to a string, optionally guided by a format string, and rendering never
/// fails. Only calling a method a variant does not support is an error.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Str(String),
    Number(i64),
    Index(IndexValue),
    Date(NaiveDateTime),
    File { path: String, meta: FileMetadata },
    Image(ImageInfo),
    Size(u64),
}

/// The sequence index of a file within its batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexValue {
    pub value: i64,
    pub total: i64,
}

impl IndexValue {
    pub fn new(value: i64, total: i64) -> Self {
        Self { value, total }
    }

    pub fn to_string(&self, format: Option<&str>) -> String {
        format_index(self.value, format)
    }

    /// Evaluate an index arithmetic expression such as `2i+1` against this
    /// index and format the result. Invalid expressions fall back to the raw
    /// index, still formatted.
    pub fn evaluate_expression(&self, expression: &str, format: Option<&str>) -> Value {
        Value::Str(IndexProgram::compile(expression).render(self.value, format))
    }
}

impl Value {
    pub fn index(value: i64, total: i64) -> Self {
        Value::Index(IndexValue::new(value, total))
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Str(_) => "String",
            Value::Number(_) => "Number",
            Value::Index(_) => "Index",
            Value::Date(_) => "Date",
            Value::File { .. } => "File",
            Value::Image(_) => "Image",
            Value::Size(_) => "Size",
        }
    }

    pub fn raw_value(&self) -> RawValue<'_> {
        match self {
            Value::Str(s) => RawValue::Str(s),
            Value::Number(n) => RawValue::Int(*n),
            Value::Index(index) => RawValue::Int(index.value),
            Value::Date(dt) => RawValue::DateTime(*dt),
            Value::File { path, .. } => RawValue::Path(path),
            Value::Image(info) => RawValue::Dimensions {
                width: info.width,
                height: info.height,
            },
            Value::Size(bytes) => RawValue::Bytes(*bytes),
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        self.raw_value().as_int()
    }

    /// Render the value. An empty format is the same as no format.
    pub fn to_string(&self, format: Option<&str>) -> String {
        match self {
            Value::Str(s) => s.clone(),
            Value::Number(n) => number::format_number(*n, format),
            Value::Index(index) => index.to_string(format),
            Value::Date(dt) => date::format_date_or_default(dt, format),
            Value::File { path, meta } => file::format_file(path, meta, format),
            Value::Image(info) => image::format_image(info, format),
            Value::Size(bytes) => size::format_size(*bytes, format),
        }
    }

    pub fn supports(&self, method: Method) -> bool {
        match self {
            Value::Str(_) => method != Method::Format,
            _ => method == Method::Format,
        }
    }

    pub fn has_method(&self, name: &str) -> bool {
        Method::from_name(name).is_some_and(|method| self.supports(method))
    }

    /// Call a resolved method. Returns `None` if this value does not
    /// support it.
    pub fn invoke(&self, method: Method, args: &[Value]) -> Option<Value> {
        if !self.supports(method) {
            return None;
        }
        let result = match self {
            Value::Str(s) => match method {
                Method::Upper => s.to_uppercase(),
                Method::Lower => s.to_lowercase(),
                Method::Trim => s.trim().to_string(),
                Method::Replace => string::replace(s, args),
                Method::Sub => string::sub(s, args),
                Method::Slice => string::slice(s, args),
                Method::PadLeft => string::pad(s, args, PadSide::Left),
                Method::PadRight => string::pad(s, args, PadSide::Right),
                Method::Format => return None,
            },
            _ => {
                let format = args.first().map(|arg| arg.to_string(None));
                self.to_string(format.as_deref())
            }
        };
        Some(Value::Str(result))
    }

    /// Call a method by the name written in the template.
    pub fn invoke_method(&self, name: &str, args: &[Value]) -> Result<Value, EvalError> {
        Method::from_name(name)
            .and_then(|method| self.invoke(method, args))
            .ok_or_else(|| EvalError::method_not_supported(self.type_name(), name))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n)
    }
}
