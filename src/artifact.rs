//! Output accumulators shared across a whole batch.

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// A generated file that is truncated once and appended to per class.
pub struct Artifact {
    path: PathBuf,
    writer: BufWriter<File>,
}

impl Artifact {
    /// Create (or truncate) the artifact at `path`.
    pub fn create(path: &Path) -> Result<Self> {
        let file = File::create(path)
            .with_context(|| format!("failed to create {}", path.display()))?;
        Ok(Self {
            path: path.to_path_buf(),
            writer: BufWriter::new(file),
        })
    }

    pub fn append(&mut self, text: &str) -> Result<()> {
        self.writer
            .write_all(text.as_bytes())
            .with_context(|| format!("failed to write {}", self.path.display()))
    }

    /// Flush and close, returning the path for any post-pass.
    pub fn finish(mut self) -> Result<PathBuf> {
        self.writer
            .flush()
            .with_context(|| format!("failed to flush {}", self.path.display()))?;
        Ok(self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn create_truncates_and_appends_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tests.txt");
        fs::write(&path, "stale content").unwrap();

        let mut artifact = Artifact::create(&path).unwrap();
        artifact.append("first\n").unwrap();
        artifact.append("second\n").unwrap();
        let finished = artifact.finish().unwrap();

        assert_eq!(finished, path);
        assert_eq!(fs::read_to_string(&path).unwrap(), "first\nsecond\n");
    }

    #[test]
    fn create_fails_for_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let err = Artifact::create(&dir.path().join("missing/out.txt")).err().unwrap();
        assert!(err.to_string().starts_with("failed to create"));
    }
}
