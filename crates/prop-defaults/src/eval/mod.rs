//! Literal evaluation

pub mod array;
pub mod literal;
pub mod object;

use crate::syntax::{NodeKind, SyntaxNode};
use crate::LiteralValue;

/// Trait for evaluating syntax nodes to literal values.
///
/// Evaluation is purely syntactic: nothing is executed and no identifier is
/// resolved. Any node outside the literal grammar evaluates to
/// `LiteralValue::Undefined`, so evaluation cannot fail.
pub trait Evaluate {
    /// Evaluate this node.
    fn eval(&self) -> LiteralValue;
}

// ═══════════════════════════════════════════════════════════════════════
// Main Expression Dispatcher
// ═══════════════════════════════════════════════════════════════════════

impl Evaluate for SyntaxNode {
    fn eval(&self) -> LiteralValue {
        match self.kind() {
            NodeKind::FalseKeyword => LiteralValue::Boolean(false),
            NodeKind::NullKeyword => LiteralValue::Null,
            NodeKind::TrueKeyword => LiteralValue::Boolean(true),

            NodeKind::ArrayLiteral => array::eval_array(self),
            NodeKind::NumericLiteral => literal::eval_number(self),
            NodeKind::ObjectLiteral => object::eval_object(self),

            NodeKind::StringLiteral | NodeKind::NoSubstitutionTemplateLiteral => {
                literal::eval_string(self)
            }

            // Identifiers (including `undefined`), calls, operators,
            // substituted templates, bigints, ...
            _ => LiteralValue::Undefined,
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Convenience Functions
// ═══════════════════════════════════════════════════════════════════════

/// Evaluate an expression node (convenience wrapper).
pub fn evaluate(node: &SyntaxNode) -> LiteralValue {
    node.eval()
}

pub use literal::{number_to_key, parse_number};
pub use object::property_name;
