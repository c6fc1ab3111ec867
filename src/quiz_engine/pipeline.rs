//! One run: load → resolve → sample → validate → render → write.
//!
//! Any failure writes the placeholder deck instead and is handed back to the
//! caller, which decides how to report it and which exit status to use.

use std::fs;
use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::{debug, error, warn};

use crate::quiz_engine::{
    config::{resolve_count, resolve_seed, RunOptions},
    error::QuizError,
    generator::generate_document,
    models::{Document, Generated, QuizConfig, RunSummary},
    render::render_fallback,
};

/// Everything a successful run produced.
#[derive(Debug, Clone, PartialEq)]
pub struct RunReport {
    pub summary: RunSummary,
    pub generated: Generated,
}

/// Replace `path` with `doc` in one step: the content goes to a temporary
/// file next to it which is then renamed over the target.
pub fn write_document(path: &Path, doc: &Document) -> Result<(), QuizError> {
    let write_err = |source| QuizError::Write { path: path.to_path_buf(), source };
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir).map_err(write_err)?;
    let mut tmp = NamedTempFile::new_in(dir).map_err(write_err)?;
    tmp.write_all(doc.as_str().as_bytes()).map_err(write_err)?;
    tmp.persist(path).map_err(|e| write_err(e.error))?;
    Ok(())
}

/// Load the pool and build the deck without touching the output.
pub fn generate(opts: &RunOptions) -> Result<Generated, QuizError> {
    let config = QuizConfig::load(&opts.input)?;
    let count = resolve_count(&config, &opts.overrides)?;
    let seed = resolve_seed(&config, &opts.overrides);
    debug!(input = %opts.input.display(), count, seed = ?seed, "generating quiz");
    generate_document(&config, count, seed.as_deref())
}

fn write_fallback(opts: &RunOptions, cause: &QuizError) {
    warn!(output = %opts.output.display(), "writing placeholder deck");
    if let Err(e) = write_document(&opts.output, &render_fallback(&cause.to_string())) {
        error!(error = %e, "could not write placeholder deck");
    }
}

/// Run the whole pipeline. On error the placeholder deck has already been
/// written when this returns.
pub fn run(opts: &RunOptions) -> Result<RunReport, QuizError> {
    let result = generate(opts).and_then(|generated| {
        write_document(&opts.output, &generated.document)?;
        Ok(generated)
    });

    match result {
        Ok(generated) => {
            let summary = RunSummary {
                input: opts.display_path(&opts.input).to_path_buf(),
                output: opts.display_path(&opts.output).to_path_buf(),
                picked: generated.selection.len(),
                total: generated.pool_size,
                seed: generated.seed.clone(),
            };
            Ok(RunReport { summary, generated })
        }
        Err(e) => {
            write_fallback(opts, &e);
            Err(e)
        }
    }
}
