//! Core evaluation logic.

use crate::{
    context::EvaluationContext,
    evaluator::EvalError,
    parser::{AstNode, FormatTarget, Literal, TemplateNode},
    values::{IndexValue, Value, slice_chars},
    variables::Variable,
};
use tracing::trace;

pub(super) struct Evaluator<'ctx> {
    ctx: &'ctx EvaluationContext,
}

impl<'ctx> Evaluator<'ctx> {
    pub(super) fn new(ctx: &'ctx EvaluationContext) -> Self {
        Self { ctx }
    }

    pub(super) fn eval_template(&self, template: &TemplateNode) -> Result<String, EvalError> {
        let mut out = String::new();
        for node in &template.nodes {
            match node {
                // Skip the intermediate value for the common case.
                AstNode::Text(text) => out.push_str(text),
                _ => out.push_str(&self.eval_node(node)?.to_string(None)),
            }
        }
        Ok(out)
    }

    pub(super) fn eval_node(&self, node: &AstNode) -> Result<Value, EvalError> {
        match node {
            AstNode::Text(text) => Ok(Value::Str(text.clone())),
            AstNode::Variable(name) => Ok(self.eval_variable(name)),
            AstNode::Format { target, format } => self.eval_format(target, format.as_deref()),
            AstNode::Method {
                target,
                name,
                args,
                span,
            } => {
                let target = self.eval_node(target)?;
                let args = args
                    .iter()
                    .map(|arg| self.eval_node(arg))
                    .collect::<Result<Vec<_>, _>>()?;
                target
                    .invoke_method(name, &args)
                    .map_err(|err| err.with_span(span))
            }
            AstNode::Slice { target, start, end } => {
                let text = self.eval_node(target)?.to_string(None);
                let start = self.eval_bound(start.as_deref())?;
                let end = self.eval_bound(end.as_deref())?;
                Ok(Value::Str(slice_chars(&text, start, end)))
            }
            AstNode::Literal(Literal::Str(s)) => Ok(Value::Str(s.clone())),
            AstNode::Literal(Literal::Int(n)) => Ok(Value::Number(*n)),
        }
    }

    fn eval_variable(&self, name: &str) -> Value {
        match Variable::from_name(name) {
            Some(variable) => variable.bind(self.ctx),
            None => {
                trace!(name, "unknown variable echoed back");
                Value::Str(format!("{{{name}}}"))
            }
        }
    }

    fn eval_format(&self, target: &FormatTarget, format: Option<&str>) -> Result<Value, EvalError> {
        match target {
            FormatTarget::IndexExpr(expr) => Ok(IndexValue::new(self.ctx.index, self.ctx.total_count)
                .evaluate_expression(expr, format)),
            FormatTarget::Node(node) => Ok(Value::Str(self.eval_node(node)?.to_string(format))),
        }
    }

    /// A slice bound that does not evaluate to an integer falls back to the
    /// default for its side.
    fn eval_bound(&self, bound: Option<&AstNode>) -> Result<Option<i64>, EvalError> {
        match bound {
            Some(node) => Ok(self.eval_node(node)?.as_int()),
            None => Ok(None),
        }
    }
}
