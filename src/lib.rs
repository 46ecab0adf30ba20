//! Renamer - a template language for batch file renaming
//!
//! # Overview
//!
//! A rename template mixes literal text with `{...}` placeholders that are
//! filled in for every file of a batch:
//!
//! - `{name}`, `{ext}`, `{fullname}`, `{dirname}` for the file's own name
//! - `{i:001}` and `{iv}` for its position, `{2i+1:00}` for arithmetic on it
//! - `{today:yyyyMMdd}`, `{size:1kb}`, `{image:wxh}`, `{file:createTime}`
//! - methods and slices such as `{name.trim.lower}` or `{name[:8]}`
//!
//! # Quick Start
//!
//! ```ignore
//! use renamer::{Engine, EngineOptions, EvaluationContext};
//!
//! let engine = Engine::new(EngineOptions::default());
//! let ctx = EvaluationContext::new("IMG_0412", "jpg").with_index(0, 3);
//! assert_eq!(engine.render("trip_{i:01}.{ext}", &ctx)?, "trip_01.jpg");
//! ```
//!
//! Rendering only fails when a template calls a method its value does not
//! have. [`render_error_to_string`] turns such an error into a report that
//! points into the template.

mod error_renderer;


pub use error_renderer::{
    render_error, render_error_to, render_error_to_string, render_error_to_string_no_color,
};

// Re-export public API from renamer_core
pub use renamer_core::api::{Engine, EngineOptions, ExecutionMode};
pub use renamer_core::compiler::{self, CompiledTemplate};
pub use renamer_core::context::EvaluationContext;
pub use renamer_core::evaluator::{self, EvalError};
pub use renamer_core::parser::{self, TemplateNode, parse};
pub use renamer_core::values::{self, Value};
pub use renamer_core::variables::{self, VariableInfo, VariableKind};
