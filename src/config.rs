//! Generator tables: the naming conventions the extractor, classifier and
//! emitters key off. Defaults describe the libcellml code base.

use std::collections::HashMap;

/// Brief-description prefixes that mark special members which must carry
/// an `@private` directive instead of being documented publicly.
pub const EXCLUDED_BRIEF_PREFIXES: &[&str] = &[
    "Move constructor",
    "Destructor",
    "Copy constructor",
    "Assignment operator",
];

/// Four-character prefixes of boolean predicate methods.
pub const BOOLEAN_PREFIXES: &[&str] = &["need"];

/// Documented parameter names that should read differently in binding names.
pub const PARAM_ALIASES: &[(&str, &str)] = &[("oldUnits", "units"), ("variable1", "variable")];

/// Nested pointer aliases and free enums that live directly in the namespace.
pub const NAMESPACE_NAMES: &[&str] = &[
    "UnitsPtr",
    "VariablePtr",
    "ResetPtr",
    "ComponentPtr",
    "VariablePairPtr",
    "ModelPtr",
    "AnalyserExternalVariablePtr",
    "ImportSourcePtr",
    "AnyItem",
    "CellmlElementType",
    "UnitPtr",
];

/// Enums nested in `Units`.
pub const UNITS_NAMES: &[&str] = &["Prefix", "StandardUnit"];

/// Enums nested in `Variable`.
pub const VARIABLE_NAMES: &[&str] = &["InterfaceType"];

pub const DEFAULT_NAMESPACE: &str = "libcellml";
pub const DEFAULT_PATTERN: &str = "classlibcellml_1_1*.xml";

#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// C++ namespace of the documented library; also the JS module name
    pub namespace: String,
    /// Name of the JS factory that loads the compiled module in tests
    pub module_loader: String,
    pub excluded_brief_prefixes: Vec<String>,
    pub boolean_prefixes: Vec<String>,
    pub param_aliases: HashMap<String, String>,
    /// Discriminator used for overloads that take no parameters
    pub no_param_discriminator: String,
    pub qualifications: Vec<QualificationSet>,
}

/// Bare type names and the scope that qualifies them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QualificationSet {
    /// e.g. `libcellml::Units`
    pub scope: String,
    pub names: Vec<String>,
}

impl GeneratorConfig {
    /// Defaults with every namespace-dependent entry rooted at `namespace`.
    pub fn for_namespace(namespace: &str) -> Self {
        let owned = |names: &[&str]| names.iter().map(|s| s.to_string()).collect::<Vec<_>>();
        Self {
            namespace: namespace.to_string(),
            module_loader: "libCellMLModule".to_string(),
            excluded_brief_prefixes: owned(EXCLUDED_BRIEF_PREFIXES),
            boolean_prefixes: owned(BOOLEAN_PREFIXES),
            param_aliases: PARAM_ALIASES
                .iter()
                .map(|(from, to)| (from.to_string(), to.to_string()))
                .collect(),
            no_param_discriminator: "XXX".to_string(),
            qualifications: vec![
                QualificationSet {
                    scope: namespace.to_string(),
                    names: owned(NAMESPACE_NAMES),
                },
                QualificationSet {
                    scope: format!("{}::Units", namespace),
                    names: owned(UNITS_NAMES),
                },
                QualificationSet {
                    scope: format!("{}::Variable", namespace),
                    names: owned(VARIABLE_NAMES),
                },
            ],
        }
    }

    pub fn is_excluded_brief(&self, brief: &str) -> bool {
        self.excluded_brief_prefixes
            .iter()
            .any(|prefix| brief.starts_with(prefix.as_str()))
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::for_namespace(DEFAULT_NAMESPACE)
    }
}
