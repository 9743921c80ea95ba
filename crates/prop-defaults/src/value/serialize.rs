//! Serde serialization for LiteralValue
//!
//! Scalars, arrays and objects map onto their natural serde shapes. Since
//! serde formats have no notion of "undefined", `Undefined` is written as the
//! single-entry map `{"$undefined": true}` so that it stays distinguishable
//! from `null`.

use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};

use super::LiteralValue;

/// Key of the map that stands in for `LiteralValue::Undefined`.
pub const UNDEFINED_MARKER: &str = "$undefined";

impl Serialize for LiteralValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            LiteralValue::Boolean(b) => serializer.serialize_bool(*b),
            LiteralValue::Null => serializer.serialize_none(),
            LiteralValue::Number(n) if is_safe_integer(*n) => serializer.serialize_i64(*n as i64),
            LiteralValue::Number(n) => serializer.serialize_f64(*n),
            LiteralValue::String(s) => serializer.serialize_str(s),
            LiteralValue::Undefined => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry(UNDEFINED_MARKER, &true)?;
                map.end()
            }
            LiteralValue::Array(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            LiteralValue::Object(props) => {
                let mut map = serializer.serialize_map(Some(props.len()))?;
                for (k, v) in props {
                    map.serialize_entry(k, v)?;
                }
                map.end()
            }
        }
    }
}

/// Integral and exactly representable, so it can be written without a fraction.
fn is_safe_integer(n: f64) -> bool {
    const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;
    n.fract() == 0.0 && n.abs() <= MAX_SAFE_INTEGER
}
