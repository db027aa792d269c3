//! Emitter module — one trait, one implementation per output artifact.

pub mod embind;
pub mod jest;

use crate::classify::MemberIndex;
use crate::config::GeneratorConfig;
use crate::model::ClassModel;

/// Renders one class into the text appended to an artifact.
pub trait Emitter {
    fn emit(&self, class: &ClassModel, index: &MemberIndex) -> String;
    /// Artifact description used in log lines.
    fn artifact(&self) -> &str;
}

/// Both emitters, in the order their output is produced per class.
pub fn emitters(config: &GeneratorConfig) -> (embind::EmbindEmitter, jest::JestEmitter) {
    (
        embind::EmbindEmitter,
        jest::JestEmitter::new(config.namespace.clone(), config.module_loader.clone()),
    )
}
