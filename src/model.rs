//! Data model for one extracted class record — emitter-agnostic.

use std::collections::HashMap;

/// Everything extracted from a single class record.
#[derive(Debug, Default)]
pub struct ClassModel {
    /// Fully scoped name, e.g. `libcellml::Model`
    pub qualified_name: String,
    pub enums: Vec<EnumModel>,
    pub methods: MethodTable,
    /// Authoring anomalies found while extracting this class
    pub warnings: Vec<String>,
}

impl ClassModel {
    pub fn new(qualified_name: impl Into<String>) -> Self {
        Self {
            qualified_name: qualified_name.into(),
            ..Default::default()
        }
    }

    /// `libcellml::Model` → `Model`
    pub fn simple_name(&self) -> &str {
        last_segment(&self.qualified_name)
    }

    /// `libcellml::Model` → `libcellml`. Empty for unscoped names.
    pub fn namespace(&self) -> &str {
        self.qualified_name
            .rsplit_once("::")
            .map(|(ns, _)| ns)
            .unwrap_or("")
    }
}

/// A public nested enumeration.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct EnumModel {
    pub name: String,
    pub values: Vec<String>,
}

/// One documented signature of a public member function.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MethodSignature {
    /// e.g. `libcellml::Model::addComponent`
    pub qualified_name: String,
    /// Raw return type spelling, e.g. `ComponentPtr` or `const std::string &`
    pub return_type: String,
    pub parameters: Vec<Parameter>,
    pub is_const: bool,
}

impl MethodSignature {
    /// C++ function type used to pick this overload: `R(T1, T2) const`
    pub fn function_type(&self) -> String {
        let params: Vec<&str> = self.parameters.iter().map(|p| p.ty.as_str()).collect();
        let constness = if self.is_const { " const" } else { "" };
        format!("{}({}){}", self.return_type, params.join(", "), constness)
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Parameter {
    pub ty: String,
    pub name: String,
}

/// Ordered map from fully qualified method name to its signatures.
///
/// Keys iterate in first-insertion order and signatures under a key keep
/// arrival order; emitted output relies on both.
#[derive(Debug, Default)]
pub struct MethodTable {
    groups: Vec<(String, Vec<MethodSignature>)>,
    index: HashMap<String, usize>,
}

impl MethodTable {
    /// Append a signature under its qualified name, creating the key on first sight.
    pub fn push(&mut self, signature: MethodSignature) {
        match self.index.get(&signature.qualified_name) {
            Some(&slot) => self.groups[slot].1.push(signature),
            None => {
                let key = signature.qualified_name.clone();
                self.index.insert(key.clone(), self.groups.len());
                self.groups.push((key, vec![signature]));
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<MethodGroup<'_>> {
        self.index.get(key).map(|&slot| {
            let (key, signatures) = &self.groups[slot];
            MethodGroup { key, signatures }
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = MethodGroup<'_>> {
        self.groups
            .iter()
            .map(|(key, signatures)| MethodGroup { key, signatures })
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Total number of signatures across all keys.
    pub fn signature_count(&self) -> usize {
        self.groups.iter().map(|(_, s)| s.len()).sum()
    }
}

/// Borrowed view of one key of a [`MethodTable`].
#[derive(Debug, Clone, Copy)]
pub struct MethodGroup<'a> {
    pub key: &'a str,
    pub signatures: &'a [MethodSignature],
}

impl<'a> MethodGroup<'a> {
    pub fn simple_name(&self) -> &'a str {
        last_segment(self.key)
    }

    pub fn is_overloaded(&self) -> bool {
        self.signatures.len() > 1
    }
}

fn last_segment(name: &str) -> &str {
    name.rsplit("::").next().unwrap_or(name)
}
