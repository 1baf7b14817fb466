//! Typed interpretation of parsed statements
//!
//! The lexer and parser only classify and slice text. Turning that text into
//! booleans, integers, floats or unescaped strings happens here, as a pure
//! function of the value text and its declared kind.

use crate::parser::{Statement, ValueKind};
use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Numeric subtype of a number literal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NumberClass {
    Int,
    Float,
    Unclassifiable,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValueError {
    #[error("number {0:?} is neither an integer nor a float")]
    UnclassifiableNumber(String),

    #[error("{0:?} is not a boolean")]
    InvalidBool(String),

    #[error("malformed string literal {0:?}")]
    MalformedString(String),
}

/// A materialized configuration value
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
}

impl Value {
    pub fn from_statement(stmt: &Statement) -> Result<Self, ValueError> {
        materialize(&stmt.value, stmt.kind)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Floats, and integers widened to floats
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            Value::Int(n) => Some(*n as f64),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(n) => write!(f, "{}", n),
            Value::Float(x) => write!(f, "{}", x),
            Value::String(s) => write!(f, "{:?}", s),
        }
    }
}

/// Interpret value text according to its syntactic kind
pub fn materialize(text: &str, kind: ValueKind) -> Result<Value, ValueError> {
    match kind {
        ValueKind::Bool => match text {
            "true" => Ok(Value::Bool(true)),
            "false" => Ok(Value::Bool(false)),
            _ => Err(ValueError::InvalidBool(text.to_string())),
        },
        ValueKind::Number => {
            if let Some(n) = parse_int(text) {
                Ok(Value::Int(n))
            } else if let Some(x) = parse_float(text) {
                Ok(Value::Float(x))
            } else {
                Err(ValueError::UnclassifiableNumber(text.to_string()))
            }
        }
        ValueKind::String => unquote(text).map(Value::String),
    }
}

/// Integer parse first, then floating point
pub fn classify_number(text: &str) -> NumberClass {
    if parse_int(text).is_some() {
        NumberClass::Int
    } else if parse_float(text).is_some() {
        NumberClass::Float
    } else {
        NumberClass::Unclassifiable
    }
}

/// Signed 64-bit integer with `0x` hex and leading-zero octal prefixes
pub fn parse_int(text: &str) -> Option<i64> {
    let (negative, unsigned) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    let (radix, digits) = if let Some(hex) = unsigned
        .strip_prefix("0x")
        .or_else(|| unsigned.strip_prefix("0X"))
    {
        (16, hex)
    } else if unsigned.len() > 1 && unsigned.starts_with('0') {
        (8, &unsigned[1..])
    } else {
        (10, unsigned)
    };

    if digits.is_empty() || !digits.chars().all(|ch| ch.is_digit(radix)) {
        return None;
    }

    let magnitude = u64::from_str_radix(digits, radix).ok()?;
    if negative {
        0i64.checked_sub_unsigned(magnitude)
    } else {
        i64::try_from(magnitude).ok()
    }
}

/// Finite 64-bit float; literals that overflow to infinity are rejected
pub fn parse_float(text: &str) -> Option<f64> {
    text.parse::<f64>().ok().filter(|x| x.is_finite())
}

/// Strip the surrounding quotes and resolve backslash escapes
pub fn unquote(text: &str) -> Result<String, ValueError> {
    let malformed = || ValueError::MalformedString(text.to_string());

    let inner = text
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .ok_or_else(malformed)?;

    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(ch) = chars.next() {
        if ch != '\\' {
            out.push(ch);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('r') => out.push('\r'),
            Some('0') => out.push('\0'),
            Some(other) => out.push(other),
            None => return Err(malformed()),
        }
    }

    Ok(out)
}
