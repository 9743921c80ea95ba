//! Scalar literal evaluation

use crate::syntax::SyntaxNode;
use crate::LiteralValue;

/// Evaluate a numeric literal token.
///
/// Text the number grammar does not accept evaluates to `Undefined`.
pub fn eval_number(node: &SyntaxNode) -> LiteralValue {
    node.text()
        .and_then(parse_number)
        .map_or(LiteralValue::Undefined, LiteralValue::Number)
}

/// Evaluate a string or template token. The frontend has already decoded it.
pub fn eval_string(node: &SyntaxNode) -> LiteralValue {
    node.text()
        .map_or(LiteralValue::Undefined, LiteralValue::string)
}

/// Parse the source spelling of a numeric literal.
///
/// Handles decimal integers and floats with exponents, `_` separators,
/// `0x`/`0o`/`0b` prefixes and legacy octal (`017`).
pub fn parse_number(text: &str) -> Option<f64> {
    let cleaned: String = text.chars().filter(|c| *c != '_').collect();
    let lower = cleaned.to_ascii_lowercase();

    if let Some(digits) = lower.strip_prefix("0x") {
        return parse_radix(digits, 16);
    }
    if let Some(digits) = lower.strip_prefix("0o") {
        return parse_radix(digits, 8);
    }
    if let Some(digits) = lower.strip_prefix("0b") {
        return parse_radix(digits, 2);
    }
    if lower.len() > 1 && lower.starts_with('0') && lower.bytes().all(|b| (b'0'..=b'7').contains(&b)) {
        return parse_radix(&lower[1..], 8);
    }

    // Rust accepts spellings like "inf" that are not numeric literals.
    if !lower.bytes().all(|b| b.is_ascii_digit() || matches!(b, b'.' | b'e' | b'+' | b'-')) {
        return None;
    }
    lower.parse::<f64>().ok()
}

fn parse_radix(digits: &str, radix: u32) -> Option<f64> {
    if digits.is_empty() {
        return None;
    }
    if let Ok(n) = u128::from_str_radix(digits, radix) {
        return Some(n as f64);
    }
    digits.chars().try_fold(0f64, |acc, c| {
        c.to_digit(radix).map(|d| acc * f64::from(radix) + f64::from(d))
    })
}

/// Property key for a number, spelled the way `String(n)` would.
pub fn number_to_key(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    let magnitude = n.abs();
    if n.fract() == 0.0 && magnitude < 1e21 {
        format!("{}", n as i128)
    } else if (1e-6..1e21).contains(&magnitude) {
        format!("{}", n)
    } else {
        // Exponent form with an explicit sign, as in `1e+21` and `1.5e-7`.
        let exp = format!("{:e}", n);
        match exp.split_once('e') {
            Some((mantissa, power)) if !power.starts_with('-') => format!("{mantissa}e+{power}"),
            _ => exp,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::NodeKind;

    #[test]
    fn test_decimal_numbers() {
        assert_eq!(parse_number("42"), Some(42.0));
        assert_eq!(parse_number("2.75"), Some(2.75));
        assert_eq!(parse_number(".5"), Some(0.5));
        assert_eq!(parse_number("5."), Some(5.0));
        assert_eq!(parse_number("1e3"), Some(1000.0));
        assert_eq!(parse_number("2.5E-3"), Some(0.0025));
        assert_eq!(parse_number("1_000_000"), Some(1_000_000.0));
    }

    #[test]
    fn test_prefixed_numbers() {
        assert_eq!(parse_number("0xFF"), Some(255.0));
        assert_eq!(parse_number("0o17"), Some(15.0));
        assert_eq!(parse_number("0b1010"), Some(10.0));
        assert_eq!(parse_number("017"), Some(15.0));
        assert_eq!(parse_number("0"), Some(0.0));
        assert_eq!(parse_number("09"), Some(9.0));
    }

    #[test]
    fn test_rejected_spellings() {
        assert_eq!(parse_number("inf"), None);
        assert_eq!(parse_number("NaN"), None);
        assert_eq!(parse_number("0x"), None);
        assert_eq!(parse_number("10n"), None);
        assert_eq!(parse_number(""), None);
    }

    #[test]
    fn test_eval_number_node() {
        let node = SyntaxNode::token(NodeKind::NumericLiteral, "0.1");
        assert_eq!(eval_number(&node), LiteralValue::Number(0.1));

        let bare = SyntaxNode::new(NodeKind::NumericLiteral);
        assert_eq!(eval_number(&bare), LiteralValue::Undefined);
    }

    #[test]
    fn test_eval_string_node() {
        let node = SyntaxNode::token(NodeKind::StringLiteral, "tab\there");
        assert_eq!(eval_string(&node), LiteralValue::string("tab\there"));
    }

    #[test]
    fn test_number_to_key() {
        assert_eq!(number_to_key(1.0), "1");
        assert_eq!(number_to_key(-0.0), "0");
        assert_eq!(number_to_key(1.5), "1.5");
        assert_eq!(number_to_key(255.0), "255");
        assert_eq!(number_to_key(0.000001), "0.000001");
    }

    #[test]
    fn test_number_to_key_exponent_form() {
        assert_eq!(number_to_key(1e21), "1e+21");
        assert_eq!(number_to_key(1.5e300), "1.5e+300");
        assert_eq!(number_to_key(1e-7), "1e-7");
        assert_eq!(number_to_key(2.5e-10), "2.5e-10");
        assert_eq!(number_to_key(f64::INFINITY), "Infinity");
    }
}
