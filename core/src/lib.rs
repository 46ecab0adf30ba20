//! Template engine for batch file renaming.
//!
//! A template such as `{name.upper}_{i:001}.{ext}` is parsed once into a
//! [`parser::TemplateNode`] and rendered for every file in a batch, either by
//! walking the tree ([`evaluator`]) or through closures built by
//! [`compiler`]. [`api::Engine`] wraps both behind a cache.

pub mod api;
pub mod compiler;
pub mod context;
pub mod evaluator;
pub mod index_expr;
pub mod parser;
pub mod values;
pub mod variables;


pub use api::{Engine, EngineOptions, ExecutionMode};
pub use compiler::CompiledTemplate;
pub use context::EvaluationContext;
pub use evaluator::EvalError;
pub use parser::{TemplateNode, parse};
pub use values::Value;
