//! The rename template engine.

use super::{EngineOptions, ExecutionMode};
use crate::{
    compiler::{self, CompiledTemplate},
    context::EvaluationContext,
    evaluator::{self, EvalError},
    parser::{self, TemplateNode},
};
use hashbrown::HashMap;
use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::debug;

/// Parses, compiles and renders templates.
///
/// Parsed and compiled templates are cached by their text when
/// [`EngineOptions::cache_templates`] is set. The caches are behind a mutex,
/// so one engine can be shared across threads. They are unbounded: every
/// distinct template text stays cached until [`Engine::clear_cache`] is
/// called, so hosts that render user-typed templates should clear it
/// periodically.
#[derive(Debug, Default)]
pub struct Engine {
    options: EngineOptions,
    parsed: Mutex<HashMap<String, Arc<TemplateNode>>>,
    compiled: Mutex<HashMap<String, Arc<CompiledTemplate>>>,
}

impl Engine {
    pub fn new(options: EngineOptions) -> Self {
        Self {
            options,
            parsed: Mutex::default(),
            compiled: Mutex::default(),
        }
    }

    /// Access the engine options.
    pub fn options(&self) -> &EngineOptions {
        &self.options
    }

    /// Parse a template. Never fails: text that is not a valid placeholder
    /// is kept literally.
    pub fn parse(&self, template: &str) -> Arc<TemplateNode> {
        if !self.options.cache_templates {
            return Arc::new(parser::parse(template));
        }
        if let Some(parsed) = lock(&self.parsed).get(template) {
            return Arc::clone(parsed);
        }
        debug!(template, "parse cache miss");
        let parsed = Arc::new(parser::parse(template));
        lock(&self.parsed)
            .entry(template.to_string())
            .or_insert(parsed)
            .clone()
    }

    /// Compile a template to closures.
    pub fn compile(&self, template: &str) -> Arc<CompiledTemplate> {
        if !self.options.cache_templates {
            return Arc::new(compiler::compile(&parser::parse(template)));
        }
        if let Some(compiled) = lock(&self.compiled).get(template) {
            return Arc::clone(compiled);
        }
        debug!(template, "compile cache miss");
        let compiled = Arc::new(compiler::compile(&self.parse(template)));
        lock(&self.compiled)
            .entry(template.to_string())
            .or_insert(compiled)
            .clone()
    }

    /// Render a template for one file.
    pub fn render(&self, template: &str, ctx: &EvaluationContext) -> Result<String, EvalError> {
        match self.options.mode {
            ExecutionMode::Compiled => self.compile(template).render(ctx),
            ExecutionMode::Interpreted => evaluator::evaluate_template(&self.parse(template), ctx),
        }
    }

    /// Render a template for a batch of files. Each path gets its position in
    /// `paths` as its index.
    pub fn render_paths<P: AsRef<Path>>(
        &self,
        template: &str,
        paths: &[P],
    ) -> Vec<Result<String, EvalError>> {
        let total = i64::try_from(paths.len()).unwrap_or(i64::MAX);
        let contexts = paths
            .iter()
            .zip(0..)
            .map(|(path, index)| EvaluationContext::from_path(path, index, total));

        match self.options.mode {
            ExecutionMode::Compiled => {
                let compiled = self.compile(template);
                contexts.map(|ctx| compiled.render(&ctx)).collect()
            }
            ExecutionMode::Interpreted => {
                let parsed = self.parse(template);
                contexts
                    .map(|ctx| evaluator::evaluate_template(&parsed, &ctx))
                    .collect()
            }
        }
    }

    /// Number of distinct templates currently cached.
    pub fn cached_templates(&self) -> usize {
        lock(&self.parsed).len()
    }

    pub fn clear_cache(&self) {
        lock(&self.parsed).clear();
        lock(&self.compiled).clear();
    }
}

// A panic while holding a cache lock cannot leave a map half-updated, so a
// poisoned lock is still usable.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
