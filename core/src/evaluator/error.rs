//! Runtime evaluation errors.
//!
//! Rendering a template is forgiving: unknown variables, bad format strings,
//! malformed index expressions and missing files all degrade to a sensible
//! string. The one hard failure is calling a method the value does not have.

use crate::parser::Span;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// `{size.upper}`: the method is unknown or not defined for this value.
    #[error("method '{method}' is not supported on {type_name} values")]
    MethodNotSupported {
        type_name: &'static str,
        /// The method name as written in the template.
        method: String,
        /// Location of `.method(...)` in the template, when known.
        span: Option<Span>,
    },
}

impl EvalError {
    pub fn method_not_supported(type_name: &'static str, method: &str) -> Self {
        EvalError::MethodNotSupported {
            type_name,
            method: method.to_string(),
            span: None,
        }
    }

    /// Attach a source location unless one is already present.
    pub fn with_span(self, span: &Span) -> Self {
        match self {
            EvalError::MethodNotSupported {
                type_name,
                method,
                span: None,
            } => EvalError::MethodNotSupported {
                type_name,
                method,
                span: Some(span.clone()),
            },
            other => other,
        }
    }

    pub fn span(&self) -> Option<&Span> {
        match self {
            EvalError::MethodNotSupported { span, .. } => span.as_ref(),
        }
    }
}
