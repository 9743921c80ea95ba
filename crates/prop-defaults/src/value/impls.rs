//! Value trait implementations: constructors, predicates, extractors, From traits

use indexmap::IndexMap;

use super::LiteralValue;

// ═══════════════════════════════════════════════════════════════════
// Convenience Constructors
// ═══════════════════════════════════════════════════════════════════

impl LiteralValue {
    /// Create a string value
    pub fn string(s: impl Into<String>) -> Self {
        LiteralValue::String(s.into())
    }

    /// Create an array value
    pub fn array(items: Vec<LiteralValue>) -> Self {
        LiteralValue::Array(items)
    }

    /// Create an object value from `(key, value)` pairs.
    ///
    /// Later pairs overwrite earlier ones with the same key.
    pub fn object<K, I>(entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, LiteralValue)>,
    {
        LiteralValue::Object(entries.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    // ═══════════════════════════════════════════════════════════════════
    // Type Predicates
    // ═══════════════════════════════════════════════════════════════════

    /// Check if no literal value could be determined
    pub fn is_undefined(&self) -> bool {
        matches!(self, LiteralValue::Undefined)
    }

    /// Check if value is `null`
    pub fn is_null(&self) -> bool {
        matches!(self, LiteralValue::Null)
    }

    /// Check if value is an array or an object
    pub fn is_compound(&self) -> bool {
        matches!(self, LiteralValue::Array(_) | LiteralValue::Object(_))
    }

    /// Name of the value's runtime type, as `typeof` would report it
    /// (`null` and arrays are reported separately).
    pub fn type_name(&self) -> &'static str {
        match self {
            LiteralValue::Boolean(_) => "boolean",
            LiteralValue::Null => "null",
            LiteralValue::Number(_) => "number",
            LiteralValue::String(_) => "string",
            LiteralValue::Undefined => "undefined",
            LiteralValue::Array(_) => "array",
            LiteralValue::Object(_) => "object",
        }
    }

    // ═══════════════════════════════════════════════════════════════════
    // Value Extractors
    // ═══════════════════════════════════════════════════════════════════

    /// Extract bool value
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            LiteralValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Extract number value
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            LiteralValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Extract string slice
    pub fn as_str(&self) -> Option<&str> {
        match self {
            LiteralValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Extract array elements
    pub fn as_array(&self) -> Option<&[LiteralValue]> {
        match self {
            LiteralValue::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Extract object properties
    pub fn as_object(&self) -> Option<&IndexMap<String, LiteralValue>> {
        match self {
            LiteralValue::Object(props) => Some(props),
            _ => None,
        }
    }
}

// ═══════════════════════════════════════════════════════════════════
// From Implementations
// ═══════════════════════════════════════════════════════════════════

impl From<bool> for LiteralValue {
    fn from(b: bool) -> Self {
        LiteralValue::Boolean(b)
    }
}

impl From<f64> for LiteralValue {
    fn from(n: f64) -> Self {
        LiteralValue::Number(n)
    }
}

impl From<i32> for LiteralValue {
    fn from(n: i32) -> Self {
        LiteralValue::Number(f64::from(n))
    }
}

impl From<&str> for LiteralValue {
    fn from(s: &str) -> Self {
        LiteralValue::String(s.to_string())
    }
}

impl From<String> for LiteralValue {
    fn from(s: String) -> Self {
        LiteralValue::String(s)
    }
}

impl From<Vec<LiteralValue>> for LiteralValue {
    fn from(items: Vec<LiteralValue>) -> Self {
        LiteralValue::Array(items)
    }
}

impl<T: Into<LiteralValue>> From<Option<T>> for LiteralValue {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(LiteralValue::Null, Into::into)
    }
}
