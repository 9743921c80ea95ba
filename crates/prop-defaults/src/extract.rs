//! Default extraction from exported class declarations

use tracing::{debug, trace};

use crate::error::Result;
use crate::eval::{evaluate, property_name};
use crate::frontend::LanguageFrontend;
use crate::syntax::{kind_name, NodeKind, Role, SyntaxNode};
use crate::{DefaultsMap, LiteralValue};

/// Parse `source` with `frontend` and collect the field defaults of every
/// exported, named class in it.
///
/// `file_name` only identifies the source in diagnostics.
///
/// # Errors
///
/// Returns `DefaultsError::Parse` if the frontend rejects the source.
pub fn extract_defaults<F>(frontend: &F, source: &str, file_name: &str) -> Result<DefaultsMap>
where
    F: LanguageFrontend + ?Sized,
{
    let root = frontend.parse(source, file_name)?;
    let defaults = collect_defaults(&root);
    debug!(
        file = file_name,
        frontend = frontend.name(),
        fields = defaults.len(),
        "extracted field defaults"
    );
    Ok(defaults)
}

/// Walk `root` depth-first, pre-order, and merge the field defaults of every
/// exported, named class declaration.
///
/// A matching class is not descended into any further. When two classes
/// declare the same field, the one visited last provides the value.
pub fn collect_defaults(root: &SyntaxNode) -> DefaultsMap {
    let mut defaults = DefaultsMap::new();
    visit(root, &mut defaults);
    defaults
}

fn visit(node: &SyntaxNode, defaults: &mut DefaultsMap) {
    if let Some(class_name) = exported_class_name(node) {
        trace!(class = class_name, "reading field defaults");
        collect_fields(node, defaults);
        return;
    }

    for child in node.children() {
        visit(child, defaults);
    }
}

/// Name of `node` if it is a named class declaration carrying `export`.
pub fn exported_class_name(node: &SyntaxNode) -> Option<&str> {
    if !node.is(&NodeKind::ClassDeclaration) || !node.has_child_of_kind(&NodeKind::ExportKeyword) {
        return None;
    }
    node.child_by_role(Role::Name).and_then(SyntaxNode::text)
}

fn collect_fields(class: &SyntaxNode, defaults: &mut DefaultsMap) {
    let Some(body) = class.child_by_role(Role::Body) else {
        return;
    };

    for member in body.children() {
        if !member.is(&NodeKind::FieldDeclaration) {
            trace!(member = kind_name(member.kind()), "skipping class member");
            continue;
        }
        let Some(name) = member.child_by_role(Role::Name).and_then(property_name) else {
            trace!("skipping field without a static name");
            continue;
        };
        let value = member
            .child_by_role(Role::Initializer)
            .map_or(LiteralValue::Undefined, evaluate);
        defaults.insert(name, value);
    }
}
