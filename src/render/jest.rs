//! Jest test-skeleton renderer.
//!
//! Emits one `describe` block per class with a `test` per distinct member:
//! predicates assert `true`, accessor pairs round-trip a sentinel, and
//! everything else gets a placeholder expecting the type's default value.

use crate::classify::{self, MemberIndex, STRING_SENTINEL};
use crate::model::*;
use crate::render::Emitter;
use std::collections::HashSet;

pub struct JestEmitter {
    /// JS module object the tests construct classes from
    namespace: String,
    module_loader: String,
}

impl JestEmitter {
    pub fn new(namespace: String, module_loader: String) -> Self {
        Self {
            namespace,
            module_loader,
        }
    }

    fn header(&self, out: &mut String, class: &str, label: &str) {
        out.push_str(&format!("  test(\"Checking {}.{}.\", () => {{\n", class, label));
        out.push_str(&format!("    const x = new {}.{}()\n\n", self.namespace, class));
    }

    fn predicate_test(&self, out: &mut String, class: &str, method: &str) {
        self.header(out, class, method);
        out.push_str(&format!("    expect(x.{}()).toBe(true)\n", method));
        out.push_str("  });\n");
    }

    fn pair_test(&self, out: &mut String, class: &str, getter: &MethodGroup, setter: &MethodGroup) {
        let getter_name = getter.simple_name();
        let sentinel = if getter_name.ends_with("String") {
            STRING_SENTINEL
        } else {
            setter.signatures[0]
                .parameters
                .first()
                .map(|p| classify::sentinel_literal(&p.ty))
                .unwrap_or(STRING_SENTINEL)
        };

        self.header(out, class, getter_name);
        out.push_str(&format!("    x.{}({})\n", setter.simple_name(), sentinel));
        out.push_str(&format!("    expect(x.{}()).toBe({})\n", getter_name, sentinel));
        out.push_str("  });\n");
    }

    fn skeleton_test(&self, out: &mut String, class: &str, method: &str, sig: &MethodSignature) {
        self.header(out, class, method);
        out.push_str(&format!(
            "    expect(x.{}()).toBe({})\n",
            method,
            classify::default_literal(&sig.return_type)
        ));
        out.push_str("  });\n");
    }
}

impl Emitter for JestEmitter {
    fn emit(&self, class: &ClassModel, index: &MemberIndex) -> String {
        let simple = class.simple_name();
        let mut out = String::new();

        out.push_str("\n\n");
        out.push_str(&format!(
            "const {} = require('{}.js/{}.common')\n",
            self.module_loader, self.namespace, self.namespace
        ));
        out.push_str(&format!("let {} = null\n\n", self.namespace));
        out.push_str(&format!("describe(\"{} tests\", () => {{\n", simple));
        out.push_str("  beforeAll(async () => {\n");
        out.push_str(&format!(
            "    {} = await {}();\n",
            self.namespace, self.module_loader
        ));
        out.push_str("  });\n");

        let mut visited_pairs: HashSet<String> = HashSet::new();
        for group in class.methods.iter() {
            let name = group.simple_name();
            let base = classify::base_name(name);
            if visited_pairs.contains(&base) {
                continue;
            }

            // Round trips go through the plain names, so both halves must be unambiguous.
            let pair = index.pair_for(&base).and_then(|pair| {
                let getter = class.methods.get(&pair.getter)?;
                let setter = class.methods.get(&pair.setter)?;
                (!getter.is_overloaded() && !setter.is_overloaded()).then_some((getter, setter))
            });
            if pair.is_some() {
                visited_pairs.insert(base);
            }

            if index.is_boolean_predicate(name) {
                for i in 0..group.signatures.len() {
                    self.predicate_test(&mut out, simple, &index.binding_name(&group, i));
                }
            } else if let Some((getter, setter)) = pair {
                self.pair_test(&mut out, simple, &getter, &setter);
            } else if group.is_overloaded() {
                let total = group.signatures.len();
                for (i, sig) in group.signatures.iter().enumerate() {
                    out.push_str(&format!(
                        "  // Overload {} of {}: {}\n",
                        i + 1,
                        total,
                        sig.function_type()
                    ));
                    self.skeleton_test(&mut out, simple, &index.binding_name(&group, i), sig);
                }
            } else {
                self.skeleton_test(&mut out, simple, name, &group.signatures[0]);
            }
        }

        out.push_str("})\n");
        out
    }

    fn artifact(&self) -> &str {
        "tests"
    }
}
