//! Batch driver: discover class records, run every record through
//! extract → classify → emit, then qualify the bindings once at the end.

use crate::artifact::Artifact;
use crate::classify::MemberIndex;
use crate::config::GeneratorConfig;
use crate::parser;
use crate::qualify::{self, QualificationRules};
use crate::render::{self, Emitter};
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

pub struct BatchOptions {
    pub input: PathBuf,
    pub bindings: PathBuf,
    pub tests: PathBuf,
    /// Glob matched against file names inside `input`
    pub pattern: String,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BatchSummary {
    pub files: usize,
    pub classes: usize,
    pub methods: usize,
    pub warnings: usize,
}

/// Class records in `dir` (non-recursive) whose file name matches `pattern`.
/// Sorted by path so repeated runs produce identical output.
pub fn discover(dir: &Path, pattern: &str) -> Result<Vec<PathBuf>> {
    let matcher = glob::Pattern::new(pattern)
        .with_context(|| format!("invalid file pattern: {}", pattern))?;
    let entries = fs::read_dir(dir)
        .with_context(|| format!("failed to read directory: {}", dir.display()))?;

    let mut files = Vec::new();
    for entry in entries.flatten() {
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let matches = path
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|n| matcher.matches(n));
        if matches {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Process every record under `options.input`.
///
/// Returns `Ok(None)` without touching any output when the input is not a
/// directory. Any extraction failure aborts the batch; outputs written so
/// far are left as they are.
pub fn run(options: &BatchOptions, config: &GeneratorConfig) -> Result<Option<BatchSummary>> {
    if !options.input.is_dir() {
        log::debug!("{} is not a directory, nothing to do", options.input.display());
        return Ok(None);
    }

    let rules = QualificationRules::new(&config.qualifications)?;
    let files = discover(&options.input, &options.pattern)?;
    let (embind, jest) = render::emitters(config);

    let mut bindings = Artifact::create(&options.bindings)?;
    let mut tests = Artifact::create(&options.tests)?;
    let mut summary = BatchSummary::default();

    for path in &files {
        summary.files += 1;
        let class = parser::parse_file(path, config)
            .with_context(|| format!("failed to extract {}", path.display()))?;
        let Some(class) = class else {
            log::debug!("skipping {}: not a class record", path.display());
            continue;
        };

        for warning in &class.warnings {
            log::warn!("{}: {}", class.qualified_name, warning);
        }

        if class.methods.is_empty() {
            log::debug!("{} has no bindable methods", class.qualified_name);
        }

        let index = MemberIndex::new(&class, config);
        for (emitter, artifact) in [
            (&embind as &dyn Emitter, &mut bindings),
            (&jest as &dyn Emitter, &mut tests),
        ] {
            log::debug!("emitting {} for {}", emitter.artifact(), class.qualified_name);
            artifact.append(&emitter.emit(&class, &index))?;
        }

        summary.classes += 1;
        summary.methods += class.methods.signature_count();
        summary.warnings += class.warnings.len();
    }

    let bindings_path = bindings.finish()?;
    tests.finish()?;
    qualify::rewrite_file(&bindings_path, &rules)?;

    log::info!(
        "processed {} files: {} classes, {} methods, {} warnings",
        summary.files,
        summary.classes,
        summary.methods,
        summary.warnings
    );
    Ok(Some(summary))
}
