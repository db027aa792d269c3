//! Member classification — naming-convention heuristics over a [`ClassModel`].
//!
//! Everything here is a pure read of an extracted class. Both emitters
//! consume the same [`MemberIndex`] so bindings and tests agree on names.

use crate::config::GeneratorConfig;
use crate::model::{ClassModel, MethodGroup, MethodTable};
use std::collections::{BTreeMap, HashMap, HashSet};

/// A getter/setter pair sharing a base name, e.g. `name` / `setName`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessorPair {
    /// Qualified key of the getter
    pub getter: String,
    /// Qualified key of the setter
    pub setter: String,
}

/// Strip a `set` prefix: `setName` → `name`. Identity for anything else.
///
/// The prefix only counts when followed by an uppercase letter, so `settle`
/// and `set` are left alone.
pub fn base_name(method_name: &str) -> String {
    match method_name.strip_prefix("set") {
        Some(rest) if rest.starts_with(|c: char| c.is_ascii_uppercase()) => {
            let mut chars = rest.chars();
            let mut out = String::with_capacity(rest.len());
            if let Some(first) = chars.next() {
                out.push(first.to_ascii_lowercase());
            }
            out.extend(chars);
            out
        }
        _ => method_name.to_string(),
    }
}

/// `name` → `Name`
pub fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Detect getter/setter pairs within one class.
///
/// Base names are counted once per distinct key, overloads included only
/// once. A base name shared by exactly two keys is a pair; any other count
/// is not, so two setters plus a getter never pair.
pub fn accessor_pairs(methods: &MethodTable) -> BTreeMap<String, AccessorPair> {
    let mut by_base: HashMap<String, Vec<MethodGroup<'_>>> = HashMap::new();
    for group in methods.iter() {
        by_base
            .entry(base_name(group.simple_name()))
            .or_default()
            .push(group);
    }

    by_base
        .into_iter()
        .filter(|(_, groups)| groups.len() == 2)
        .filter_map(|(base, groups)| {
            let (setters, getters): (Vec<_>, Vec<_>) = groups
                .into_iter()
                .partition(|g| g.simple_name() != base);
            match (getters.as_slice(), setters.as_slice()) {
                ([getter], [setter]) => Some((
                    base,
                    AccessorPair {
                        getter: getter.key.to_string(),
                        setter: setter.key.to_string(),
                    },
                )),
                _ => None,
            }
        })
        .collect()
}

/// Whether the first four characters of `method_name` are a predicate prefix.
pub fn is_boolean_predicate(method_name: &str, prefixes: &[String]) -> bool {
    let head: String = method_name.chars().take(4).collect();
    prefixes.iter().any(|p| *p == head)
}

/// Binding names for every signature of an overloaded group:
/// `<name>By<FirstParam>`, or `<name>By<fallback>` without parameters.
pub fn overload_binding_names(
    group: &MethodGroup<'_>,
    aliases: &HashMap<String, String>,
    fallback: &str,
) -> Vec<String> {
    group
        .signatures
        .iter()
        .map(|sig| {
            let discriminator = match sig.parameters.first() {
                Some(param) => {
                    let name = aliases.get(&param.name).unwrap_or(&param.name);
                    title_case(name)
                }
                None => fallback.to_string(),
            };
            format!("{}By{}", group.simple_name(), discriminator)
        })
        .collect()
}

/// JS literal a default-constructed object is expected to return.
pub fn default_literal(return_type: &str) -> &'static str {
    let ty = strip_qualifiers(return_type);
    if ty == "void" {
        "undefined"
    } else if ty == "bool" {
        "false"
    } else if is_numeric(ty) {
        "0"
    } else if ty.ends_with("Ptr") || ty.starts_with("std::shared_ptr") {
        "null"
    } else {
        "\"\""
    }
}

/// Sentinel a setter is fed in a round-trip test.
pub fn sentinel_literal(param_type: &str) -> &'static str {
    let ty = strip_qualifiers(param_type);
    if ty == "bool" {
        "true"
    } else if is_numeric(ty) {
        "1"
    } else {
        STRING_SENTINEL
    }
}

pub const STRING_SENTINEL: &str = "\"something\"";

fn strip_qualifiers(ty: &str) -> &str {
    let ty = ty.trim();
    let ty = ty.strip_prefix("const ").unwrap_or(ty);
    ty.trim_end_matches(['&', '*', ' '])
}

fn is_numeric(ty: &str) -> bool {
    matches!(
        ty,
        "int" | "unsigned int" | "long" | "size_t" | "std::size_t" | "double" | "float"
    )
}

/// Classification of one class, shared by both emitters.
#[derive(Debug)]
pub struct MemberIndex {
    pairs: BTreeMap<String, AccessorPair>,
    /// Overloaded key → binding name per signature
    overload_names: HashMap<String, Vec<String>>,
    boolean_prefixes: Vec<String>,
}

impl MemberIndex {
    pub fn new(class: &ClassModel, config: &GeneratorConfig) -> Self {
        let mut overload_names = HashMap::new();
        let mut taken: HashSet<String> = HashSet::new();
        for group in class.methods.iter().filter(|g| g.is_overloaded()) {
            let names: Vec<String> = overload_binding_names(
                &group,
                &config.param_aliases,
                &config.no_param_discriminator,
            )
            .into_iter()
            .map(|name| unique_name(name, &mut taken))
            .collect();
            overload_names.insert(group.key.to_string(), names);
        }

        Self {
            pairs: accessor_pairs(&class.methods),
            overload_names,
            boolean_prefixes: config.boolean_prefixes.clone(),
        }
    }

    pub fn pair_for(&self, base: &str) -> Option<&AccessorPair> {
        self.pairs.get(base)
    }

    /// Name signature `index` of `key` is bound under.
    pub fn binding_name(&self, group: &MethodGroup<'_>, index: usize) -> String {
        self.overload_names
            .get(group.key)
            .and_then(|names| names.get(index))
            .cloned()
            .unwrap_or_else(|| group.simple_name().to_string())
    }

    pub fn is_boolean_predicate(&self, method_name: &str) -> bool {
        is_boolean_predicate(method_name, &self.boolean_prefixes)
    }
}

/// `nameByUnits` → `nameByUnits2` if already taken, and so on.
fn unique_name(name: String, taken: &mut HashSet<String>) -> String {
    let mut candidate = name.clone();
    let mut n = 2;
    while taken.contains(&candidate) {
        candidate = format!("{}{}", name, n);
        n += 1;
    }
    taken.insert(candidate.clone());
    candidate
}
