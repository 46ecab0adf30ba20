//! Configuration options for the rename engine.

/// How the engine renders templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExecutionMode {
    /// Compile templates to closures once and run them per file.
    #[default]
    Compiled,
    /// Walk the AST for every file.
    Interpreted,
}

/// Configuration options for the rename engine.
///
/// # Example
///
/// ```
/// use renamer_core::api::{EngineOptions, ExecutionMode};
///
/// let options = EngineOptions {
///     mode: ExecutionMode::Interpreted,
///     ..EngineOptions::default()
/// };
/// assert!(options.cache_templates);
/// ```
#[derive(Debug, Clone)]
pub struct EngineOptions {
    /// Default: [`ExecutionMode::Compiled`]
    pub mode: ExecutionMode,

    /// Keep parsed and compiled templates keyed by their text.
    ///
    /// Default: true
    pub cache_templates: bool,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            mode: ExecutionMode::default(),
            cache_templates: true,
        }
    }
}
