mod ast;
pub mod parser;
mod syntax;

// Re-export the parser and rule enum for external use
pub use parser::Rule;
pub use parser::TemplateParser;
pub use parser::parse;

pub use ast::{AstNode, FormatTarget, Literal, TemplateNode};
pub use syntax::Span;
