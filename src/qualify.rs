//! Post-pass that qualifies bare type names in the finished bindings.
//!
//! Names like `UnitsPtr` or `Prefix` are only meaningful inside their owning
//! scope, but the documentation spells them bare. The rewrite is textual:
//! it matches whole identifier tokens and does not know about binding
//! syntax. Tokens already following `::` or opening a string literal are
//! left alone, so running the pass twice changes nothing.

use crate::config::QualificationSet;
use anyhow::{Context, Result};
use regex::{Captures, Regex};
use std::fs;
use std::path::Path;

pub struct QualificationRules {
    rules: Vec<(Regex, String)>,
}

impl QualificationRules {
    pub fn new(sets: &[QualificationSet]) -> Result<Self> {
        let mut rules = Vec::new();
        for set in sets.iter().filter(|s| !s.names.is_empty()) {
            let alternatives: Vec<String> = set.names.iter().map(|n| regex::escape(n)).collect();
            let pattern = format!(r#"(^|[^\w:"])({})\b"#, alternatives.join("|"));
            let re = Regex::new(&pattern)
                .with_context(|| format!("invalid qualification pattern for {}", set.scope))?;
            rules.push((re, set.scope.clone()));
        }
        Ok(Self { rules })
    }

    pub fn rewrite(&self, content: &str) -> String {
        let mut out = content.to_string();
        for (re, scope) in &self.rules {
            out = re
                .replace_all(&out, |caps: &Captures| {
                    format!("{}{}::{}", &caps[1], scope, &caps[2])
                })
                .into_owned();
        }
        out
    }
}

/// Rewrite an artifact in place.
pub fn rewrite_file(path: &Path, rules: &QualificationRules) -> Result<()> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    fs::write(path, rules.rewrite(&content))
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}
