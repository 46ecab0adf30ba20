//! Sequence index arithmetic and formatting.
//!
//! `{2i+1:000}` is handled entirely here: the expression is compiled into an
//! [`IndexProgram`], evaluated for the current index and rendered with
//! [`format_index`]. Nothing in this module fails; bad input falls back to
//! the raw index.

mod chinese;
mod format;
mod program;

pub use chinese::to_chinese;
pub use format::format_index;
pub use program::IndexProgram;

#[cfg(test)]
mod program_test;
