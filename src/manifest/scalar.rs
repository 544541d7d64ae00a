// Scalar coercion for element text
//
// Precedence: null, decimal integer, boolean, binary integer, hex integer,
// float, string. Integer forms that overflow i64 fall through to the next
// rule, so the function is total.

use regex::Regex;
use std::sync::OnceLock;

/// The most specific scalar inferable from a text value
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
}

fn float_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[+-]?(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)(?:[eE][+-]?[0-9]+)?$")
            .expect("float pattern is valid")
    })
}

fn hex_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^0[xX][0-9a-fA-F]+$").expect("hex pattern is valid"))
}

fn binary_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^0b[01]+$").expect("binary pattern is valid"))
}

/// Coerce element text into a scalar
pub fn phpize(text: &str) -> Scalar {
    let lowercase = text.to_ascii_lowercase();

    if lowercase == "null" {
        return Scalar::Null;
    }

    if let Some(value) = parse_decimal_int(text) {
        return Scalar::Int(value);
    }

    match lowercase.as_str() {
        "true" => return Scalar::Bool(true),
        "false" => return Scalar::Bool(false),
        _ => {}
    }

    if binary_pattern().is_match(text) {
        if let Ok(value) = i64::from_str_radix(&text[2..], 2) {
            return Scalar::Int(value);
        }
    }

    if hex_pattern().is_match(text) {
        if let Ok(value) = i64::from_str_radix(&text[2..], 16) {
            return Scalar::Int(value);
        }
    }

    if float_pattern().is_match(text) {
        if let Ok(value) = text.parse::<f64>() {
            if value.is_finite() {
                return Scalar::Float(value);
            }
        }
    }

    Scalar::Str(text.to_string())
}

fn parse_decimal_int(text: &str) -> Option<i64> {
    let digits = text.strip_prefix('-').unwrap_or(text);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    text.parse::<i64>().ok()
}

impl Scalar {
    /// Null and empty strings count as absent for required-field checks
    pub fn is_empty(&self) -> bool {
        match self {
            Scalar::Null => true,
            Scalar::Str(s) => s.is_empty(),
            _ => false,
        }
    }
}
