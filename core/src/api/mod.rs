//! Public API for rendering rename templates.
//!
//! [`Engine`] ties the pieces together: it parses template text, compiles
//! it (or not, see [`ExecutionMode`]), caches both, and renders against one
//! [`EvaluationContext`](crate::context::EvaluationContext) per file.
//!
//! # Example
//!
//! ```ignore
//! use renamer_core::api::{Engine, EngineOptions};
//!
//! let engine = Engine::new(EngineOptions::default());
//! let names = engine.render_paths("{name}_{i:01}.{ext}", &["a.txt", "b.txt"]);
//! ```

pub mod engine;
pub mod options;


pub use engine::Engine;
pub use options::{EngineOptions, ExecutionMode};
