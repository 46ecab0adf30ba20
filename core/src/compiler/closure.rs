//! AST to closure translation.

use crate::{
    context::EvaluationContext,
    evaluator::EvalError,
    index_expr::IndexProgram,
    parser::{AstNode, FormatTarget, Literal, Span},
    values::{Method, Value, slice_chars},
    variables::Variable,
};
use tracing::trace;

/// A compiled expression, evaluated against one file's context.
pub type CompiledExpr = Box<dyn Fn(&EvaluationContext) -> Result<Value, EvalError> + Send + Sync>;

/// The rendered text of a node that renders the same for every context.
pub(super) fn constant_text(node: &AstNode) -> Option<String> {
    match node {
        AstNode::Text(text) => Some(text.clone()),
        AstNode::Literal(Literal::Str(s)) => Some(s.clone()),
        AstNode::Literal(Literal::Int(n)) => Some(n.to_string()),
        AstNode::Variable(name) if Variable::from_name(name).is_none() => {
            Some(format!("{{{name}}}"))
        }
        _ => None,
    }
}

pub(super) fn compile_node(node: &AstNode) -> CompiledExpr {
    match node {
        AstNode::Text(text) => constant(Value::Str(text.clone())),
        AstNode::Literal(Literal::Str(s)) => constant(Value::Str(s.clone())),
        AstNode::Literal(Literal::Int(n)) => constant(Value::Number(*n)),
        AstNode::Variable(name) => compile_variable(name),
        AstNode::Format { target, format } => compile_format(target, format.clone()),
        AstNode::Method {
            target,
            name,
            args,
            span,
        } => compile_method(target, name, args, span),
        AstNode::Slice { target, start, end } => {
            let target = compile_node(target);
            let start = start.as_deref().map(compile_node);
            let end = end.as_deref().map(compile_node);
            Box::new(move |ctx| {
                let text = target(ctx)?.to_string(None);
                let start = eval_bound(start.as_ref(), ctx)?;
                let end = eval_bound(end.as_ref(), ctx)?;
                Ok(Value::Str(slice_chars(&text, start, end)))
            })
        }
    }
}

fn constant(value: Value) -> CompiledExpr {
    Box::new(move |_| Ok(value.clone()))
}

fn compile_variable(name: &str) -> CompiledExpr {
    match Variable::from_name(name) {
        Some(variable) => Box::new(move |ctx| Ok(variable.bind(ctx))),
        None => {
            trace!(name, "unknown variable compiled as text");
            constant(Value::Str(format!("{{{name}}}")))
        }
    }
}

fn compile_format(target: &FormatTarget, format: Option<String>) -> CompiledExpr {
    match target {
        FormatTarget::IndexExpr(source) => {
            let program = IndexProgram::compile(source);
            Box::new(move |ctx| Ok(Value::Str(program.render(ctx.index, format.as_deref()))))
        }
        FormatTarget::Node(node) => {
            let inner = compile_node(node);
            Box::new(move |ctx| Ok(Value::Str(inner(ctx)?.to_string(format.as_deref()))))
        }
    }
}

fn compile_method(target: &AstNode, name: &str, args: &[AstNode], span: &Span) -> CompiledExpr {
    let target = compile_node(target);
    let args: Vec<CompiledExpr> = args.iter().map(compile_node).collect();
    let method = Method::from_name(name);
    let written = name.to_string();
    let span = span.clone();
    Box::new(move |ctx| {
        let value = target(ctx)?;
        let args = args
            .iter()
            .map(|arg| arg(ctx))
            .collect::<Result<Vec<_>, _>>()?;
        method
            .and_then(|method| value.invoke(method, &args))
            .ok_or_else(|| {
                EvalError::method_not_supported(value.type_name(), &written).with_span(&span)
            })
    })
}

fn eval_bound(
    bound: Option<&CompiledExpr>,
    ctx: &EvaluationContext,
) -> Result<Option<i64>, EvalError> {
    match bound {
        Some(expr) => Ok(expr(ctx)?.as_int()),
        None => Ok(None),
    }
}
