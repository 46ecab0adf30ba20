//! Tree-walking evaluator for parsed templates.
//!
//! The evaluator walks a [`TemplateNode`] directly, resolving variables and
//! methods by name on every call. It is the reference semantics for the
//! closure compiler in [`crate::compiler`]: both must render every template
//! to the same string.
//!
//! ## Example
//!
//! ```ignore
//! use renamer_core::{context::EvaluationContext, evaluator, parser};
//!
//! let template = parser::parse("{name.upper}_{i:01}.{ext}");
//! let ctx = EvaluationContext::new("photo", "jpg");
//! assert_eq!(evaluator::evaluate_template(&template, &ctx)?, "PHOTO_01.jpg");
//! ```

mod error;
mod eval;


pub use error::EvalError;

use crate::{
    context::EvaluationContext,
    parser::{AstNode, TemplateNode},
    values::Value,
};

/// Evaluate a single node to a value.
pub fn evaluate(node: &AstNode, ctx: &EvaluationContext) -> Result<Value, EvalError> {
    eval::Evaluator::new(ctx).eval_node(node)
}

/// Render a whole template by concatenating the string form of each node.
pub fn evaluate_template(
    template: &TemplateNode,
    ctx: &EvaluationContext,
) -> Result<String, EvalError> {
    eval::Evaluator::new(ctx).eval_template(template)
}
