//! Parser-independent syntax tree
//!
//! Frontends lower whatever concrete tree their parser produces into
//! [`SyntaxNode`]s. The extractor and the literal evaluator only ever look at
//! a node's [`NodeKind`], its [`Role`] inside the parent, its decoded token
//! text and its ordered children.
//!
//! Trees can also be built by hand, which is how the core is tested without
//! a parser:
//!
//! ```
//! use prop_defaults::syntax::{NodeKind, Role, SyntaxNode};
//!
//! let pair = SyntaxNode::new(NodeKind::PropertyAssignment)
//!     .with_child(SyntaxNode::token(NodeKind::Identifier, "port").with_role(Role::Key))
//!     .with_child(SyntaxNode::token(NodeKind::NumericLiteral, "8080").with_role(Role::Value));
//! assert_eq!(pair.child_by_role(Role::Key).and_then(|k| k.text()), Some("port"));
//! ```

/// Discriminant of a syntax node.
///
/// Only the constructs the extractor and evaluator care about get their own
/// variant; everything else is carried as `Other` with the parser's kind name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// Root of a parsed file
    SourceFile,

    // Declarations
    /// `class Name { ... }`, with modifiers as children
    ClassDeclaration,
    /// `{ ... }` member list of a class
    ClassBody,
    /// Property declaration inside a class body
    FieldDeclaration,
    /// `export` modifier
    ExportKeyword,
    /// `default` modifier
    DefaultKeyword,

    // Names
    /// Plain identifier (also used for property names)
    Identifier,
    /// `#name`
    PrivateIdentifier,
    /// `[expr]` in name position
    ComputedPropertyName,

    // Literals
    /// `true`
    TrueKeyword,
    /// `false`
    FalseKeyword,
    /// `null`
    NullKeyword,
    /// Numeric literal; text is the raw source spelling
    NumericLiteral,
    /// `123n`
    BigIntLiteral,
    /// Quoted string; text is the decoded contents
    StringLiteral,
    /// Template literal without substitutions; text is the cooked contents
    NoSubstitutionTemplateLiteral,
    /// Template literal with `${...}` substitutions
    TemplateExpression,
    /// `[a, b]`
    ArrayLiteral,
    /// Elided array element, as in `[a, , b]`
    OmittedExpression,
    /// `{ k: v }`
    ObjectLiteral,
    /// `k: v` inside an object literal
    PropertyAssignment,
    /// `{ k }` inside an object literal
    ShorthandPropertyAssignment,
    /// `...expr`
    SpreadElement,
    /// `m() {}` inside an object literal or class body
    MethodDeclaration,

    /// Any construct not listed above, by the parser's kind name
    Other(String),
}

/// Role of a node inside its parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// Declared name of a class or field
    Name,
    /// Initializer expression of a field
    Initializer,
    /// Key of an object property
    Key,
    /// Value of an object property
    Value,
    /// Member list of a class
    Body,
    /// Modifier keyword (`export`, `default`, ...)
    Modifier,
}

/// An owned, immutable syntax node.
#[derive(Debug, Clone, PartialEq)]
pub struct SyntaxNode {
    kind: NodeKind,
    role: Option<Role>,
    text: Option<String>,
    children: Vec<SyntaxNode>,
}

impl SyntaxNode {
    /// Create an interior node with no children.
    pub fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            role: None,
            text: None,
            children: Vec::new(),
        }
    }

    /// Create a token node carrying text.
    pub fn token(kind: NodeKind, text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Self::new(kind)
        }
    }

    /// Create an `Other` node from a parser kind name.
    pub fn other(kind: impl Into<String>) -> Self {
        Self::new(NodeKind::Other(kind.into()))
    }

    /// Set the node's role inside its parent (builder pattern).
    pub fn with_role(mut self, role: Role) -> Self {
        self.role = Some(role);
        self
    }

    /// Append a child (builder pattern).
    pub fn with_child(mut self, child: SyntaxNode) -> Self {
        self.children.push(child);
        self
    }

    /// Append several children (builder pattern).
    pub fn with_children(mut self, children: impl IntoIterator<Item = SyntaxNode>) -> Self {
        self.children.extend(children);
        self
    }

    /// Append a child in place.
    pub fn push(&mut self, child: SyntaxNode) {
        self.children.push(child);
    }

    /// The node's discriminant.
    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    /// The node's role inside its parent, if it has one.
    pub fn role(&self) -> Option<Role> {
        self.role
    }

    /// Decoded text of a token node.
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Children in source order.
    pub fn children(&self) -> &[SyntaxNode] {
        &self.children
    }

    /// First child playing `role`.
    pub fn child_by_role(&self, role: Role) -> Option<&SyntaxNode> {
        self.children.iter().find(|c| c.role == Some(role))
    }

    /// Whether any direct child has the given kind.
    pub fn has_child_of_kind(&self, kind: &NodeKind) -> bool {
        self.children.iter().any(|c| &c.kind == kind)
    }

    /// Whether this node is of the given kind.
    pub fn is(&self, kind: &NodeKind) -> bool {
        &self.kind == kind
    }
}

/// Human-readable name of a node kind, for logs and diagnostics.
pub fn kind_name(kind: &NodeKind) -> &str {
    match kind {
        NodeKind::SourceFile => "source file",
        NodeKind::ClassDeclaration => "class declaration",
        NodeKind::ClassBody => "class body",
        NodeKind::FieldDeclaration => "field declaration",
        NodeKind::ExportKeyword => "export",
        NodeKind::DefaultKeyword => "default",
        NodeKind::Identifier => "identifier",
        NodeKind::PrivateIdentifier => "private identifier",
        NodeKind::ComputedPropertyName => "computed property name",
        NodeKind::TrueKeyword => "true",
        NodeKind::FalseKeyword => "false",
        NodeKind::NullKeyword => "null",
        NodeKind::NumericLiteral => "numeric literal",
        NodeKind::BigIntLiteral => "bigint literal",
        NodeKind::StringLiteral => "string literal",
        NodeKind::NoSubstitutionTemplateLiteral => "template literal",
        NodeKind::TemplateExpression => "template expression",
        NodeKind::ArrayLiteral => "array literal",
        NodeKind::OmittedExpression => "omitted expression",
        NodeKind::ObjectLiteral => "object literal",
        NodeKind::PropertyAssignment => "property assignment",
        NodeKind::ShorthandPropertyAssignment => "shorthand property",
        NodeKind::SpreadElement => "spread element",
        NodeKind::MethodDeclaration => "method",
        NodeKind::Other(name) => name,
    }
}
