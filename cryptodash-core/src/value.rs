//! Cell values exposed by table rows.

use std::fmt;

/// A single cell of a row, borrowed from the row that owns it.
///
/// `Number(NaN)` is accepted but behaves like `Null` for ordering and display.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value<'a> {
    Text(&'a str),
    Number(f64),
    Null,
}

impl<'a> Value<'a> {
    pub fn as_number(&self) -> Option<f64> {
        match *self {
            Value::Number(n) if !n.is_nan() => Some(n),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&'a str> {
        match *self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// True for `Null` and for `Number(NaN)`.
    pub fn is_null(&self) -> bool {
        match *self {
            Value::Null => true,
            Value::Number(n) => n.is_nan(),
            Value::Text(_) => false,
        }
    }

    /// Unformatted rendering used for exports: text as-is, numbers via `Display`,
    /// null as the empty string.
    pub fn to_plain_string(&self) -> String {
        if self.is_null() {
            return String::new();
        }
        match *self {
            Value::Text(s) => s.to_string(),
            Value::Number(n) => n.to_string(),
            Value::Null => String::new(),
        }
    }
}

impl From<f64> for Value<'_> {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl<'a> From<&'a str> for Value<'a> {
    fn from(s: &'a str) -> Self {
        Value::Text(s)
    }
}

impl From<Option<f64>> for Value<'_> {
    fn from(n: Option<f64>) -> Self {
        n.map_or(Value::Null, Value::Number)
    }
}

impl fmt::Display for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_null() {
            return f.write_str(crate::format::PLACEHOLDER);
        }
        match self {
            Value::Text(s) => f.write_str(s),
            Value::Number(n) => write!(f, "{n}"),
            Value::Null => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nan_is_null() {
        assert!(Value::Number(f64::NAN).is_null());
        assert_eq!(Value::Number(f64::NAN).as_number(), None);
        assert!(!Value::Number(0.0).is_null());
    }

    #[test]
    fn plain_string() {
        assert_eq!(Value::Text("BTC").to_plain_string(), "BTC");
        assert_eq!(Value::Number(425.5).to_plain_string(), "425.5");
        assert_eq!(Value::Null.to_plain_string(), "");
        assert_eq!(Value::from(None::<f64>), Value::Null);
    }

    #[test]
    fn display_uses_placeholder_for_null() {
        assert_eq!(Value::Null.to_string(), "-");
        assert_eq!(Value::Text("ETH").to_string(), "ETH");
    }
}
