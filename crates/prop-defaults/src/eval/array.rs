//! Array literal evaluation

use crate::syntax::SyntaxNode;
use crate::LiteralValue;

use super::Evaluate;

/// Evaluate an array literal expression.
///
/// Every element is evaluated on its own, so a non-literal element yields an
/// `Undefined` entry instead of spoiling the whole array.
///
/// # Examples
///
/// - `[1, 2, 3]` → Array with three numbers
/// - `[true, foo(), 3]` → `[true, undefined, 3]`
/// - `[1, , 2]` → `[1, undefined, 2]`
pub fn eval_array(array: &SyntaxNode) -> LiteralValue {
    let elements = array.children().iter().map(|elem| elem.eval()).collect();

    LiteralValue::array(elements)
}
