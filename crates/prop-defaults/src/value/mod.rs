//! Value representation for evaluated literals

mod display;
mod impls;
mod serialize;

pub use serialize::UNDEFINED_MARKER;

use indexmap::IndexMap;

/// Field name → default value, in declaration order.
///
/// A key declared again later keeps its original position and takes the
/// later value.
pub type DefaultsMap = IndexMap<String, LiteralValue>;

/// Language-agnostic value of a literal expression.
///
/// The variants mirror what a TypeScript literal can evaluate to at runtime.
/// `Undefined` is the sentinel for "no literal value could be determined",
/// which is distinct from `Null`.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum LiteralValue {
    /// `true` or `false`
    Boolean(bool),

    /// `null`
    Null,

    /// Any numeric literal, as a double
    Number(f64),

    /// Decoded string or template contents
    String(String),

    /// Initializer missing or not a literal
    #[default]
    Undefined,

    /// Array literal, elements in source order
    Array(Vec<LiteralValue>),

    /// Object literal, properties in source order
    Object(IndexMap<String, LiteralValue>),
}
