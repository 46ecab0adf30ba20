use clap::Parser;
use miette::{Diagnostic, Result};
use renamer::{Engine, EngineOptions, ExecutionMode, render_error, variables};
use std::io::BufRead;
use std::path::PathBuf;
use thiserror::Error;

mod preview;


/// Renamer - preview batch file renames from a template
#[derive(Parser, Debug)]
#[command(name = "renamer")]
#[command(about = "Preview batch file renames", long_about = None)]
struct Args {
    /// Walk the template tree instead of compiling it
    #[arg(long)]
    interpreted: bool,

    /// Keep the original extension if the new name has none
    #[arg(long)]
    auto_ext: bool,

    /// Print the parsed template (for debugging)
    #[arg(long)]
    debug_parse: bool,

    /// List the template variables and their formats
    #[arg(long)]
    list_variables: bool,

    /// Rename template, e.g. "{name}_{i:001}.{ext}"
    #[arg(required_unless_present = "list_variables")]
    template: Option<String>,

    /// Files to rename (if not provided, reads paths from stdin)
    files: Vec<PathBuf>,
}

#[derive(Debug, Error, Diagnostic)]
enum CliError {
    #[error("failed to read file names from stdin")]
    #[diagnostic(code(renamer::stdin))]
    Stdin(#[source] std::io::Error),

    #[error("{failed} of {total} file(s) could not be renamed")]
    #[diagnostic(code(renamer::render), help("the reports above point at the failing method"))]
    Render { failed: usize, total: usize },
}

fn read_stdin_paths() -> Result<Vec<PathBuf>, CliError> {
    let stdin = std::io::stdin();
    let mut paths = Vec::new();
    for line in stdin.lock().lines() {
        let line = line.map_err(CliError::Stdin)?;
        let line = line.trim();
        if !line.is_empty() {
            paths.push(PathBuf::from(line));
        }
    }
    Ok(paths)
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging subscriber
    use tracing_subscriber::{EnvFilter, fmt};

    // Use RUST_LOG to control log level, default to WARN if not set
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    if args.list_variables {
        print!("{}", preview::describe_variables(variables::all()));
        return Ok(());
    }
    let Some(template) = args.template else {
        return Ok(());
    };

    let engine = Engine::new(EngineOptions {
        mode: if args.interpreted {
            ExecutionMode::Interpreted
        } else {
            ExecutionMode::Compiled
        },
        ..EngineOptions::default()
    });

    if args.debug_parse {
        println!("=== Parsed Template ===");
        println!("{:#?}", engine.parse(&template));
        println!();
    }

    let files = if args.files.is_empty() {
        read_stdin_paths()?
    } else {
        args.files
    };

    let renames = preview::preview(&engine, &template, &files, args.auto_ext);
    let mut failed = 0;
    for rename in &renames {
        match &rename.result {
            Ok(new_name) => println!("{} -> {}", rename.path.display(), new_name),
            Err(e) => {
                failed += 1;
                eprintln!("{}:", rename.path.display());
                render_error(&template, e);
            }
        }
    }

    if failed > 0 {
        return Err(CliError::Render {
            failed,
            total: renames.len(),
        }
        .into());
    }
    Ok(())
}
