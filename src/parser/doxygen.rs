//! Doxygen XML class-record parser.
//!
//! Walks one `compounddef[kind=class]` and extracts:
//! - `sectiondef[kind=public-type]/memberdef[kind=enum]` → [`EnumModel`]
//! - `sectiondef[kind=public-func]/memberdef[kind=function]` → [`MethodSignature`]
//!
//! The brief description doubles as a directive channel: members without one,
//! or whose brief marks them as special members, are dropped with a warning.

use super::ExtractError;
use crate::config::GeneratorConfig;
use crate::model::*;
use roxmltree::{Document, Node};

/// Parse a record. Returns `Ok(None)` for non-class compounds.
pub fn parse(xml: &str, config: &GeneratorConfig) -> Result<Option<ClassModel>, ExtractError> {
    let doc = Document::parse(xml)?;
    let mut class = None;

    for compound in doc
        .root_element()
        .children()
        .filter(|n| n.has_tag_name("compounddef") && n.attribute("kind") == Some("class"))
    {
        class = Some(parse_class(compound, config)?);
    }

    Ok(class)
}

fn parse_class(compound: Node, config: &GeneratorConfig) -> Result<ClassModel, ExtractError> {
    let name = require(compound, "compoundname", "compounddef")?;
    let mut class = ClassModel::new(name.text().unwrap_or_default().trim());

    for member in section_members(compound, "public-type", "enum") {
        class.enums.push(parse_enum(member, &class.qualified_name)?);
    }

    for member in section_members(compound, "public-func", "function") {
        parse_function(member, config, &mut class)?;
    }

    Ok(class)
}

fn parse_enum(member: Node, class_name: &str) -> Result<EnumModel, ExtractError> {
    let context = format!("enum of {}", class_name);
    let name = require(member, "name", &context)?;
    let mut values = Vec::new();
    for value in member.children().filter(|n| n.has_tag_name("enumvalue")) {
        let value_name = require(value, "name", &context)?;
        values.push(value_name.text().unwrap_or_default().to_string());
    }
    Ok(EnumModel {
        name: name.text().unwrap_or_default().to_string(),
        values,
    })
}

fn parse_function(
    member: Node,
    config: &GeneratorConfig,
    class: &mut ClassModel,
) -> Result<(), ExtractError> {
    let context = format!("function of {}", class.qualified_name);
    let definition = require(member, "definition", &context)?
        .text()
        .unwrap_or_default()
        .to_string();

    let brief = require(member, "briefdescription", &context)?;
    let brief_text = child(brief, "para").and_then(leading_text);
    let Some(brief_text) = brief_text else {
        class
            .warnings
            .push(format!("Non standard brief description!!! {}", definition));
        return Ok(());
    };
    if config.is_excluded_brief(brief_text.trim_start()) {
        class.warnings.push(format!(
            "Function not marked with Doxygen directive @private: {}",
            definition
        ));
        return Ok(());
    }

    let return_type = collect_text(require(member, "type", &context)?);
    let args = require(member, "argsstring", &context)?
        .text()
        .unwrap_or_default();

    // Constructors have no return type, so their definition is a single token.
    let Some(qualified_name) = qualified_name_from_definition(&definition) else {
        return Ok(());
    };

    let mut parameters = Vec::new();
    for param in member.children().filter(|n| n.has_tag_name("param")) {
        let ty = collect_text(require(param, "type", &context)?);
        let name = require(param, "declname", &context)?;
        parameters.push(Parameter {
            ty: html_escape::decode_html_entities(&ty).into_owned(),
            name: name.text().unwrap_or_default().to_string(),
        });
    }

    class.methods.push(MethodSignature {
        qualified_name: qualified_name.to_string(),
        return_type,
        parameters,
        is_const: is_const_qualified(args),
    });
    Ok(())
}

/// `ComponentPtr libcellml::Model::component` → `libcellml::Model::component`.
///
/// The name is the token following the return type. Return types may span
/// several tokens (`const std::string &`), so the last token is taken.
fn qualified_name_from_definition(definition: &str) -> Option<&str> {
    let tokens: Vec<&str> = definition.split_whitespace().collect();
    if tokens.len() < 2 {
        return None;
    }
    tokens.last().copied()
}

/// `(size_t index) const` → true. Only qualifiers after the closing paren count.
fn is_const_qualified(args: &str) -> bool {
    let trailing = args.rsplit_once(')').map(|(_, rest)| rest).unwrap_or(args);
    trailing.split_whitespace().any(|q| q == "const")
}

fn section_members<'a, 'input>(
    compound: Node<'a, 'input>,
    section_kind: &'static str,
    member_kind: &'static str,
) -> impl Iterator<Item = Node<'a, 'input>> {
    compound
        .children()
        .filter(move |n| n.has_tag_name("sectiondef") && n.attribute("kind") == Some(section_kind))
        .flat_map(|section| section.children())
        .filter(move |n| n.has_tag_name("memberdef") && n.attribute("kind") == Some(member_kind))
}

fn child<'a, 'input>(node: Node<'a, 'input>, tag: &str) -> Option<Node<'a, 'input>> {
    node.children().find(|n| n.has_tag_name(tag))
}

fn require<'a, 'input>(
    node: Node<'a, 'input>,
    tag: &'static str,
    context: &str,
) -> Result<Node<'a, 'input>, ExtractError> {
    child(node, tag).ok_or_else(|| ExtractError::MissingElement {
        element: tag,
        context: context.to_string(),
    })
}

/// Text before the first child element, if any.
fn leading_text<'a>(node: Node<'a, '_>) -> Option<&'a str> {
    node.first_child().filter(|n| n.is_text()).and_then(|n| n.text())
}

/// Concatenation of every text fragment below `node`, so that
/// `std::vector&lt; <ref>UnitsPtr</ref> &gt;` reads as one type.
fn collect_text(node: Node) -> String {
    node.descendants()
        .filter(|n| n.is_text())
        .filter_map(|n| n.text())
        .collect()
}
