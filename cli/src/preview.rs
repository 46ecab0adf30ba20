//! Rename previews for a batch of files.

use renamer::{Engine, EvalError, TemplateNode, VariableInfo};
use std::fmt::Write as _;
use std::path::{Path, PathBuf};
use tracing::debug;

/// One file's proposed rename.
#[derive(Debug)]
pub struct Rename {
    pub path: PathBuf,
    pub result: Result<String, EvalError>,
}

/// Render `template` for every file, numbering them in order.
pub fn preview(engine: &Engine, template: &str, files: &[PathBuf], auto_ext: bool) -> Vec<Rename> {
    let parsed = engine.parse(template);
    engine
        .render_paths(template, files)
        .into_iter()
        .zip(files)
        .map(|(result, path)| {
            let result = if auto_ext {
                result.map(|name| append_extension(name, path, &parsed))
            } else {
                result
            };
            Rename {
                path: path.clone(),
                result,
            }
        })
        .collect()
}

/// Keep the original extension when the template drops it: the template
/// never mentions `{ext}` and the new name has no dot.
pub fn append_extension(new_name: String, path: &Path, template: &TemplateNode) -> String {
    if template.references_variable("ext") || new_name.contains('.') {
        return new_name;
    }
    match path.extension().filter(|ext| !ext.is_empty()) {
        Some(ext) => {
            debug!(name = %new_name, "appending original extension");
            format!("{new_name}.{}", ext.to_string_lossy())
        }
        None => new_name,
    }
}

/// The `--list-variables` table.
pub fn describe_variables(variables: &[VariableInfo]) -> String {
    let mut out = String::new();
    for info in variables {
        let _ = writeln!(out, "{{{}}}  ({:?})  {}", info.name, info.kind, info.description);
        for option in info.formats {
            let _ = writeln!(
                out,
                "    {{{}:{}}}  {}",
                info.name, option.format, option.description
            );
        }
    }
    out
}
