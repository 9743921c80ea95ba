//! Object literal evaluation

use indexmap::IndexMap;

use crate::syntax::{NodeKind, Role, SyntaxNode};
use crate::LiteralValue;

use super::literal::{number_to_key, parse_number};
use super::Evaluate;

/// Evaluate an object literal expression.
///
/// Only plain `key: value` properties contribute. Shorthand properties,
/// computed keys, spreads and methods are skipped without a trace. A key
/// that appears twice keeps its first position and its last value.
///
/// # Examples
///
/// - `{ a: 1, 'b-c': [] }` → Object with two properties
/// - `{ a, ...rest, [k]: 1 }` → empty Object
pub fn eval_object(object: &SyntaxNode) -> LiteralValue {
    let mut props: IndexMap<String, LiteralValue> = IndexMap::new();

    for prop in object.children() {
        if !prop.is(&NodeKind::PropertyAssignment) {
            continue;
        }
        let Some(key) = prop.child_by_role(Role::Key).and_then(property_name) else {
            continue;
        };
        let value = prop
            .child_by_role(Role::Value)
            .map_or(LiteralValue::Undefined, |v| v.eval());
        props.insert(key, value);
    }

    LiteralValue::Object(props)
}

/// Resolve a property or field name node to its key.
///
/// Identifiers and private names are taken verbatim, string keys use their
/// decoded text and numeric keys their canonical number spelling. Computed
/// names have no static key and yield `None`.
pub fn property_name(name: &SyntaxNode) -> Option<String> {
    match name.kind() {
        NodeKind::Identifier | NodeKind::PrivateIdentifier | NodeKind::StringLiteral => {
            name.text().map(str::to_string)
        }
        NodeKind::NumericLiteral => name.text().and_then(parse_number).map(number_to_key),
        _ => None,
    }
}
