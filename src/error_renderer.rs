//! Error rendering using ariadne
//!
//! Evaluation errors carry the byte span of the failing method call. These
//! helpers draw that span under the template text.

use crate::EvalError;
use ariadne::{ColorGenerator, IndexType, Label, Report, ReportKind, Source};
use std::io::Write;

/// Render an error with formatting to stderr
pub fn render_error(template: &str, error: &EvalError) {
    render_error_to_writer(template, error, &mut std::io::stderr(), true).ok();
}

/// Render an error to a specific writer
pub fn render_error_to(
    template: &str,
    error: &EvalError,
    writer: &mut dyn Write,
) -> std::io::Result<()> {
    render_error_to_writer(template, error, writer, true)
}

/// Render an error to a String (useful for UIs and logs)
///
/// # Example
/// ```no_run
/// use renamer::{Engine, EngineOptions, EvaluationContext, render_error_to_string};
///
/// let engine = Engine::new(EngineOptions::default());
/// let template = "{size.upper}";
/// if let Err(e) = engine.render(template, &EvaluationContext::new("a", "b")) {
///     eprintln!("{}", render_error_to_string(template, &e));
/// }
/// ```
pub fn render_error_to_string(template: &str, error: &EvalError) -> String {
    let mut buf = Vec::new();
    render_error_to_writer(template, error, &mut buf, true).ok();
    String::from_utf8_lossy(&buf).to_string()
}

/// Render an error to a String without color codes (useful for tests)
pub fn render_error_to_string_no_color(template: &str, error: &EvalError) -> String {
    let mut buf = Vec::new();
    render_error_to_writer(template, error, &mut buf, false).ok();
    String::from_utf8_lossy(&buf).to_string()
}

fn render_error_to_writer(
    template: &str,
    error: &EvalError,
    writer: &mut dyn Write,
    use_color: bool,
) -> std::io::Result<()> {
    let Some(span) = error.span() else {
        return writeln!(writer, "Error: {error}");
    };
    let span = span.0.clone();

    let mut colors = ColorGenerator::new();
    colors.next(); // Skip the first color.

    let label = match error {
        EvalError::MethodNotSupported { type_name, .. } => {
            format!("{type_name} values have no such method")
        }
    };

    let mut report = Report::build(ReportKind::Error, ("<template>", span.clone()))
        .with_message(error.to_string())
        .with_config(
            ariadne::Config::default()
                .with_color(use_color)
                .with_index_type(IndexType::Byte),
        )
        .with_label(
            Label::new(("<template>", span))
                .with_message(label)
                .with_color(colors.next()),
        );

    if let EvalError::MethodNotSupported { type_name, .. } = error {
        let help = if *type_name == "String" {
            "string methods are upper, lower, trim, replace, sub, slice, padLeft and padRight"
        } else {
            "only format(...) can be called on this value"
        };
        report = report.with_help(help);
    }

    report
        .finish()
        .write(("<template>", Source::from(template)), &mut *writer)
}
