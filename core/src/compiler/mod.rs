//! Closure compiler for parsed templates.
//!
//! Compilation turns each AST node into a boxed closure once, resolving
//! everything that does not depend on the file being renamed: variable
//! names, method names, literals and index expressions. Rendering a
//! [`CompiledTemplate`] then only runs the closures against an
//! [`EvaluationContext`].
//!
//! Compiled templates render exactly what the tree-walking evaluator in
//! [`crate::evaluator`] renders for the same template and context, errors
//! included.

mod closure;

#[cfg(test)]
mod compiler_test;

pub use closure::CompiledExpr;

use crate::{
    context::EvaluationContext,
    evaluator::EvalError,
    parser::{AstNode, TemplateNode},
};
use core::fmt;

enum Part {
    Text(String),
    Expr(CompiledExpr),
}

/// A template compiled to closures. Immutable and shareable across threads.
pub struct CompiledTemplate {
    parts: Vec<Part>,
}

impl CompiledTemplate {
    pub fn render(&self, ctx: &EvaluationContext) -> Result<String, EvalError> {
        let mut out = String::new();
        for part in &self.parts {
            match part {
                Part::Text(text) => out.push_str(text),
                Part::Expr(expr) => out.push_str(&expr(ctx)?.to_string(None)),
            }
        }
        Ok(out)
    }

    /// True when rendering does not depend on the context.
    pub fn is_constant(&self) -> bool {
        self.parts.iter().all(|part| matches!(part, Part::Text(_)))
    }
}

impl fmt::Debug for CompiledTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut list = f.debug_list();
        for part in &self.parts {
            match part {
                Part::Text(text) => list.entry(text),
                Part::Expr(_) => list.entry(&format_args!("<expr>")),
            };
        }
        list.finish()
    }
}

/// Compile a parsed template.
pub fn compile(template: &TemplateNode) -> CompiledTemplate {
    let mut parts: Vec<Part> = Vec::with_capacity(template.nodes.len());
    for node in &template.nodes {
        match closure::constant_text(node) {
            Some(text) => match parts.last_mut() {
                Some(Part::Text(prev)) => prev.push_str(&text),
                _ => parts.push(Part::Text(text)),
            },
            None => parts.push(Part::Expr(closure::compile_node(node))),
        }
    }
    CompiledTemplate { parts }
}

/// Compile a single node.
pub fn compile_node(node: &AstNode) -> CompiledExpr {
    closure::compile_node(node)
}
