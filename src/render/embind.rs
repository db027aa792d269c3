//! Emscripten `EMSCRIPTEN_BINDINGS` renderer.
//!
//! One block per class: an `enum_<…>` registration per nested enum, then a
//! `class_<…>` registration with one `.function` per bound member. Overloads
//! are bound individually through `select_overload` under their
//! disambiguated names.

use crate::classify::MemberIndex;
use crate::model::*;
use crate::render::Emitter;

pub struct EmbindEmitter;

impl Emitter for EmbindEmitter {
    fn emit(&self, class: &ClassModel, index: &MemberIndex) -> String {
        let qualified = &class.qualified_name;
        let simple = class.simple_name();
        let lower = simple.to_lowercase();
        let mut lines: Vec<String> = Vec::new();

        lines.push(String::new());
        lines.push("#include <emscripten/bind.h>\n".to_string());
        lines.push(format!("#include \"{}\"\n", header_path(class.namespace(), &lower)));
        lines.push("using namespace emscripten;\n".to_string());
        lines.push(format!("EMSCRIPTEN_BINDINGS({})", module_name(class.namespace(), &lower)));
        lines.push("{".to_string());

        for e in &class.enums {
            lines.push(format!("    enum_<{}::{}>(\"{}\")", qualified, e.name, e.name));
            for value in &e.values {
                lines.push(format!(
                    "        .value(\"{}\", {}::{}::{})",
                    value, qualified, e.name, value
                ));
            }
            lines.push("    ;\n".to_string());
        }

        lines.push(format!("    class_<{}>(\"{}\")", qualified, simple));
        for group in class.methods.iter() {
            if !group.is_overloaded() {
                lines.push(format!(
                    "        .function(\"{}\", &{})",
                    group.simple_name(),
                    group.key
                ));
                continue;
            }
            for (i, sig) in group.signatures.iter().enumerate() {
                lines.push(format!(
                    "        .function(\"{}\", select_overload<{}>(&{}))",
                    index.binding_name(&group, i),
                    sig.function_type(),
                    group.key
                ));
            }
        }
        lines.push("    ;".to_string());
        lines.push("}".to_string());

        if !class.warnings.is_empty() {
            lines.push(String::new());
            lines.push(format!("// Warnings: {}", simple));
            for warning in &class.warnings {
                lines.push(format!("//  - {}", warning));
            }
        }

        let mut out = lines.join("\n");
        out.push('\n');
        out
    }

    fn artifact(&self) -> &str {
        "bindings"
    }
}

/// `libcellml`, `model` → `libcellml/model.h`
fn header_path(namespace: &str, lower: &str) -> String {
    if namespace.is_empty() {
        format!("{}.h", lower)
    } else {
        format!("{}/{}.h", namespace.replace("::", "/"), lower)
    }
}

/// `libcellml`, `model` → `libcellml_model`
fn module_name(namespace: &str, lower: &str) -> String {
    if namespace.is_empty() {
        lower.to_string()
    } else {
        format!("{}_{}", namespace.replace("::", "_"), lower)
    }
}
