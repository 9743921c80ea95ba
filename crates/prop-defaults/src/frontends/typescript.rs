//! TypeScript language frontend
//!
//! This frontend parses TypeScript with tree-sitter and lowers the concrete
//! syntax tree into [`SyntaxNode`]s. `export` statements wrapping a class are
//! folded into the class as `ExportKeyword`/`DefaultKeyword` modifiers, so the
//! extractor only has to look at class declarations.

use tracing::warn;
use tree_sitter::{Node, Parser};

use super::strings::{decode_string, decode_template};
use crate::frontend::{LanguageFrontend, ParseError, SourceLocation};
use crate::syntax::{NodeKind, Role, SyntaxNode};

/// TypeScript language frontend.
///
/// Files ending in `.tsx` are parsed with the TSX grammar, everything else
/// with the plain TypeScript grammar.
///
/// Syntax errors are tolerated by default: the grammar's error-recovered tree
/// is lowered and whatever classes survive are extracted. Only a source with
/// no recognizable structure at all is rejected. [`with_strict_syntax`]
/// rejects any syntax error instead.
///
/// [`with_strict_syntax`]: TypeScriptFrontend::with_strict_syntax
///
/// # Example
///
/// ```
/// use prop_defaults::frontends::TypeScriptFrontend;
/// use prop_defaults::frontend::LanguageFrontend;
/// use prop_defaults::syntax::NodeKind;
///
/// let frontend = TypeScriptFrontend::new();
/// let root = frontend.parse("export class A { x = 1 }", "a.ts").unwrap();
/// assert_eq!(root.kind(), &NodeKind::SourceFile);
/// assert_eq!(frontend.name(), "TypeScript");
/// assert_eq!(frontend.file_extension(), "ts");
/// ```
#[derive(Debug, Clone, Default)]
pub struct TypeScriptFrontend {
    strict_syntax: bool,
}

impl TypeScriptFrontend {
    /// Create a frontend that extracts from error-recovered trees.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject sources containing any syntax error.
    pub fn with_strict_syntax(mut self, strict: bool) -> Self {
        self.strict_syntax = strict;
        self
    }
}

impl LanguageFrontend for TypeScriptFrontend {
    fn parse(&self, source: &str, file_name: &str) -> Result<SyntaxNode, ParseError> {
        let language: tree_sitter::Language = if file_name.ends_with(".tsx") {
            tree_sitter_typescript::LANGUAGE_TSX.into()
        } else {
            tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into()
        };

        let mut parser = Parser::new();
        parser
            .set_language(&language)
            .map_err(|e| ParseError::new(format!("cannot load TypeScript grammar: {}", e)))?;

        let tree = parser
            .parse(source, None)
            .ok_or_else(|| ParseError::new("parser produced no tree"))?;

        let root = tree.root_node();
        if root.is_error() || (root.has_error() && self.strict_syntax) {
            return Err(syntax_error(root, source, file_name));
        }
        if root.has_error() {
            let err = syntax_error(root, source, file_name);
            warn!(
                file = file_name,
                error = %err.message,
                location = ?err.location,
                "syntax errors, extracting from recovered tree"
            );
        }

        Ok(Lowering { source }.lower(root))
    }

    fn name(&self) -> &str {
        "TypeScript"
    }

    fn file_extension(&self) -> &str {
        "ts"
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Syntax errors
// ═══════════════════════════════════════════════════════════════════════

/// Build a `ParseError` pointing at the first error or missing node.
fn syntax_error(root: Node<'_>, source: &str, file_name: &str) -> ParseError {
    let Some(node) = first_error(root) else {
        return ParseError::new("syntax error");
    };

    let message = if node.is_missing() {
        format!("missing `{}`", node.kind())
    } else {
        let text = source.get(node.byte_range()).unwrap_or_default();
        let near: String = text.chars().take(24).collect();
        format!("unexpected `{}`", near.trim())
    };

    let position = node.start_position();
    let line = source.lines().nth(position.row);
    let column = line.map_or(position.column, |line| char_column(line, position.column));
    let err = ParseError::new(message).with_location(SourceLocation::new(
        file_name,
        position.row + 1,
        column + 1,
    ));
    match line {
        Some(line) => err.with_snippet(line),
        None => err,
    }
}

/// Characters before byte offset `byte_column` of `line`.
fn char_column(line: &str, byte_column: usize) -> usize {
    line.char_indices().take_while(|(i, _)| *i < byte_column).count()
}

fn first_error(node: Node<'_>) -> Option<Node<'_>> {
    if node.is_error() || node.is_missing() {
        return Some(node);
    }
    if !node.has_error() {
        return None;
    }
    let mut cursor = node.walk();
    let children: Vec<Node<'_>> = node.children(&mut cursor).collect();
    children.into_iter().find_map(first_error)
}

// ═══════════════════════════════════════════════════════════════════════
// Lowering
// ═══════════════════════════════════════════════════════════════════════

/// A child of a tree-sitter node together with its grammar field name.
struct Child<'t> {
    field: Option<&'static str>,
    node: Node<'t>,
}

/// All children, named and anonymous, in source order.
fn children_with_fields(node: Node<'_>) -> Vec<Child<'_>> {
    let mut out = Vec::with_capacity(node.child_count());
    let mut cursor = node.walk();
    if cursor.goto_first_child() {
        loop {
            out.push(Child {
                field: cursor.field_name(),
                node: cursor.node(),
            });
            if !cursor.goto_next_sibling() {
                break;
            }
        }
    }
    out
}

fn is_class_declaration(node: Node<'_>) -> bool {
    matches!(node.kind(), "class_declaration" | "abstract_class_declaration")
}

fn ambient_class(node: Node<'_>) -> Option<Node<'_>> {
    let mut cursor = node.walk();
    for child in node.named_children(&mut cursor) {
        if is_class_declaration(child) {
            return Some(child);
        }
    }
    None
}

struct Lowering<'s> {
    source: &'s str,
}

impl Lowering<'_> {
    fn text(&self, node: Node<'_>) -> &str {
        self.source.get(node.byte_range()).unwrap_or_default()
    }

    fn lower(&self, node: Node<'_>) -> SyntaxNode {
        match node.kind() {
            "program" => SyntaxNode::new(NodeKind::SourceFile).with_children(self.lower_named(node)),

            "export_statement" => self.lower_export(node),
            "class_declaration" | "abstract_class_declaration" => self.lower_class(node, Vec::new()),
            "class_body" => self.lower_class_body(node),
            "public_field_definition" | "field_definition" => self.lower_field(node),
            "method_definition" => {
                SyntaxNode::new(NodeKind::MethodDeclaration).with_children(self.lower_named(node))
            }

            "true" => SyntaxNode::token(NodeKind::TrueKeyword, "true"),
            "false" => SyntaxNode::token(NodeKind::FalseKeyword, "false"),
            "null" => SyntaxNode::token(NodeKind::NullKeyword, "null"),
            "number" => self.lower_number(node),
            "string" => SyntaxNode::token(NodeKind::StringLiteral, decode_string(self.text(node))),
            "template_string" => self.lower_template(node),
            "array" => self.lower_array(node),
            "object" => self.lower_object(node),
            "pair" => self.lower_pair(node),
            "shorthand_property_identifier" => {
                SyntaxNode::token(NodeKind::ShorthandPropertyAssignment, self.text(node))
            }
            "spread_element" => {
                SyntaxNode::new(NodeKind::SpreadElement).with_children(self.lower_named(node))
            }

            "identifier" | "property_identifier" | "type_identifier" => {
                SyntaxNode::token(NodeKind::Identifier, self.text(node))
            }
            "private_property_identifier" => {
                SyntaxNode::token(NodeKind::PrivateIdentifier, self.text(node))
            }
            "computed_property_name" => SyntaxNode::new(NodeKind::ComputedPropertyName)
                .with_children(self.lower_named(node)),

            other if node.named_child_count() == 0 => {
                SyntaxNode::token(NodeKind::Other(other.to_string()), self.text(node))
            }
            other => SyntaxNode::other(other).with_children(self.lower_named(node)),
        }
    }

    /// Lower every named child except comments.
    fn lower_named(&self, node: Node<'_>) -> Vec<SyntaxNode> {
        let mut cursor = node.walk();
        let mut lowered = Vec::with_capacity(node.named_child_count());
        for child in node.named_children(&mut cursor) {
            if child.kind() != "comment" {
                lowered.push(self.lower(child));
            }
        }
        lowered
    }

    fn lower_export(&self, node: Node<'_>) -> SyntaxNode {
        let children = children_with_fields(node);

        let field = |name: &str| children.iter().find(|c| c.field == Some(name)).map(|c| c.node);

        let declaration = match field("declaration") {
            Some(decl) if is_class_declaration(decl) => Some(decl),
            // `export declare class ...`
            Some(decl) if decl.kind() == "ambient_declaration" => ambient_class(decl),
            Some(_) => None,
            // `export default class Name {}` parsed as a class expression
            None => field("value")
                .filter(|value| value.kind() == "class" && value.child_by_field_name("name").is_some()),
        };

        let Some(class) = declaration else {
            return SyntaxNode::other("export_statement").with_children(self.lower_named(node));
        };

        let mut modifiers = vec![SyntaxNode::token(NodeKind::ExportKeyword, "export").with_role(Role::Modifier)];
        if children.iter().any(|c| c.node.kind() == "default" && !c.node.is_named()) {
            modifiers.push(SyntaxNode::token(NodeKind::DefaultKeyword, "default").with_role(Role::Modifier));
        }
        self.lower_class(class, modifiers)
    }

    fn lower_class(&self, node: Node<'_>, modifiers: Vec<SyntaxNode>) -> SyntaxNode {
        let mut class = SyntaxNode::new(NodeKind::ClassDeclaration).with_children(modifiers);
        for child in children_with_fields(node) {
            if !child.node.is_named() || child.node.kind() == "comment" {
                continue;
            }
            let lowered = self.lower(child.node);
            class.push(match child.field {
                Some("name") => lowered.with_role(Role::Name),
                Some("body") => lowered.with_role(Role::Body),
                _ => lowered,
            });
        }
        class
    }

    fn lower_class_body(&self, node: Node<'_>) -> SyntaxNode {
        SyntaxNode::new(NodeKind::ClassBody).with_children(self.lower_named(node))
    }

    fn lower_field(&self, node: Node<'_>) -> SyntaxNode {
        let mut field = SyntaxNode::new(NodeKind::FieldDeclaration);
        for child in children_with_fields(node) {
            if !child.node.is_named() || child.node.kind() == "comment" {
                continue;
            }
            field.push(match child.field {
                Some("name") | Some("property") => self.lower(child.node).with_role(Role::Name),
                Some("value") => self.lower(child.node).with_role(Role::Initializer),
                _ => self.lower(child.node),
            });
        }
        field
    }

    fn lower_number(&self, node: Node<'_>) -> SyntaxNode {
        let text = self.text(node);
        if text.ends_with('n') {
            SyntaxNode::token(NodeKind::BigIntLiteral, text)
        } else {
            SyntaxNode::token(NodeKind::NumericLiteral, text)
        }
    }

    fn lower_template(&self, node: Node<'_>) -> SyntaxNode {
        let mut cursor = node.walk();
        let has_substitution = node
            .named_children(&mut cursor)
            .any(|child| child.kind() == "template_substitution");

        if has_substitution {
            SyntaxNode::new(NodeKind::TemplateExpression).with_children(self.lower_named(node))
        } else {
            SyntaxNode::token(NodeKind::NoSubstitutionTemplateLiteral, decode_template(self.text(node)))
        }
    }

    /// Elements in order, with an `OmittedExpression` for every elided slot.
    fn lower_array(&self, node: Node<'_>) -> SyntaxNode {
        let mut array = SyntaxNode::new(NodeKind::ArrayLiteral);
        let mut expecting_element = true;
        for child in children_with_fields(node) {
            let child = child.node;
            if child.is_named() {
                if child.kind() != "comment" {
                    array.push(self.lower(child));
                    expecting_element = false;
                }
            } else if child.kind() == "," {
                if expecting_element {
                    array.push(SyntaxNode::new(NodeKind::OmittedExpression));
                }
                expecting_element = true;
            }
        }
        array
    }

    fn lower_object(&self, node: Node<'_>) -> SyntaxNode {
        SyntaxNode::new(NodeKind::ObjectLiteral).with_children(self.lower_named(node))
    }

    fn lower_pair(&self, node: Node<'_>) -> SyntaxNode {
        let mut pair = SyntaxNode::new(NodeKind::PropertyAssignment);
        for child in children_with_fields(node) {
            match child.field {
                Some("key") => pair.push(self.lower(child.node).with_role(Role::Key)),
                Some("value") => pair.push(self.lower(child.node).with_role(Role::Value)),
                _ => {}
            }
        }
        pair
    }
}
