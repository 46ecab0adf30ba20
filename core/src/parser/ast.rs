//! Template AST.
//!
//! A parsed template is an ordered list of [`AstNode`]s whose rendered strings
//! are concatenated left to right. Nodes are immutable once built and can be
//! shared between any number of evaluations.

use super::Span;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TemplateNode {
    pub nodes: Vec<AstNode>,
}

impl TemplateNode {
    pub fn new(nodes: Vec<AstNode>) -> Self {
        Self { nodes }
    }

    /// Returns true if any placeholder in the template references `name`
    /// (case-insensitive), including inside method arguments and slices.
    pub fn references_variable(&self, name: &str) -> bool {
        self.nodes.iter().any(|node| node.references_variable(name))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AstNode {
    /// Literal text outside of placeholders (or a placeholder that did not parse).
    Text(String),

    /// A variable reference, as written in the template.
    Variable(String),

    /// `{target:format}`. A missing or empty suffix is `None`.
    Format {
        target: FormatTarget,
        format: Option<String>,
    },

    /// `target.name(args)`; parentheses are optional when there are no args.
    Method {
        target: Box<AstNode>,
        name: String,
        args: Vec<AstNode>,
        span: Span,
    },

    /// `target[start:end]` with Python-style bounds.
    Slice {
        target: Box<AstNode>,
        start: Option<Box<AstNode>>,
        end: Option<Box<AstNode>>,
    },

    Literal(Literal),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatTarget {
    /// Format the value of a variable or method chain.
    Node(Box<AstNode>),
    /// Format the result of an index arithmetic expression such as `2i+1`.
    IndexExpr(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Literal {
    Str(String),
    Int(i64),
}

impl AstNode {
    fn references_variable(&self, name: &str) -> bool {
        match self {
            AstNode::Variable(var) => var.eq_ignore_ascii_case(name),
            AstNode::Format { target, .. } => match target {
                FormatTarget::Node(inner) => inner.references_variable(name),
                FormatTarget::IndexExpr(_) => name.eq_ignore_ascii_case("i"),
            },
            AstNode::Method { target, args, .. } => {
                target.references_variable(name)
                    || args.iter().any(|arg| arg.references_variable(name))
            }
            AstNode::Slice { target, start, end } => {
                target.references_variable(name)
                    || start.as_ref().is_some_and(|s| s.references_variable(name))
                    || end.as_ref().is_some_and(|e| e.references_variable(name))
            }
            AstNode::Text(_) | AstNode::Literal(_) => false,
        }
    }
}
