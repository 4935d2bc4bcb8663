//! Variables module - Validated name/value bindings for placeholders
//!
//! Names must match [`config::names::PATTERN`]; values are scalars (text or
//! number). Everything is checked on insertion, so a [`Variables`] value is
//! always safe to hand to a renderer.

use indexmap::IndexMap;
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

use super::config;
use super::error::{Result, TemplateError};

static NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(config::names::PATTERN).expect("valid name pattern"));

/// Check a variable name against the naming rule
pub fn is_valid_name(name: &str) -> bool {
    NAME_RE.is_match(name)
}

/// Numeric variable value
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Integer(i64),
    Float(f64),
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Integer(n) => write!(f, "{}", n),
            // shortest round-trip form, so 5.0 prints as "5"
            Number::Float(n) => write!(f, "{}", n),
        }
    }
}

/// Scalar variable value
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Text(String),
    Number(Number),
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Text(s) => f.write_str(s),
            Scalar::Number(n) => n.fmt(f),
        }
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Scalar::Text(value.to_string())
    }
}

impl From<String> for Scalar {
    fn from(value: String) -> Self {
        Scalar::Text(value)
    }
}

impl From<i64> for Scalar {
    fn from(value: i64) -> Self {
        Scalar::Number(Number::Integer(value))
    }
}

impl From<i32> for Scalar {
    fn from(value: i32) -> Self {
        Scalar::Number(Number::Integer(value.into()))
    }
}

impl From<u32> for Scalar {
    fn from(value: u32) -> Self {
        Scalar::Number(Number::Integer(value.into()))
    }
}

impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        Scalar::Number(Number::Float(value))
    }
}

impl TryFrom<toml::Value> for Scalar {
    type Error = TemplateError;

    fn try_from(value: toml::Value) -> Result<Self> {
        match value {
            toml::Value::String(s) => Ok(Scalar::Text(s)),
            toml::Value::Integer(n) => Ok(Scalar::Number(Number::Integer(n))),
            toml::Value::Float(n) => Ok(Scalar::Number(Number::Float(n))),
            other => Err(TemplateError::invalid(format!(
                "variable values must be a string or a number, got {}",
                other.type_str()
            ))),
        }
    }
}

/// Ordered variable mapping
///
/// Iteration follows insertion order. Re-inserting an existing name replaces
/// its value but keeps its original position.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Variables {
    entries: IndexMap<String, Scalar>,
}

impl Variables {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from `(name, value)` pairs, failing on the first invalid entry
    pub fn from_pairs<I, K, V>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Scalar>,
    {
        let mut vars = Self::new();
        for (name, value) in pairs {
            vars.insert(name, value)?;
        }
        Ok(vars)
    }

    /// Validate and store one binding
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Scalar>) -> Result<()> {
        let name = name.into();
        let value = value.into();

        if !is_valid_name(&name) {
            return Err(TemplateError::invalid(format!(
                "variable name {:?} must match {}",
                name,
                config::names::PATTERN
            )));
        }
        if let Scalar::Number(Number::Float(n)) = value {
            if !n.is_finite() {
                return Err(TemplateError::invalid(format!(
                    "variable {:?} must be a finite number, got {}",
                    name, n
                )));
            }
        }

        self.entries.insert(name, value);
        Ok(())
    }

    /// Parse and store a `KEY=VALUE` assignment; the value is kept as text
    pub fn insert_assignment(&mut self, assignment: &str) -> Result<()> {
        let (name, value) = assignment.split_once('=').ok_or_else(|| {
            TemplateError::invalid(format!(
                "expected KEY=VALUE, got {:?}",
                assignment
            ))
        })?;
        self.insert(name, value)
    }

    /// Merge `other` into `self`; values from `other` win
    pub fn merge(&mut self, other: Variables) {
        self.entries.extend(other.entries);
    }

    pub fn get(&self, name: &str) -> Option<&Scalar> {
        self.entries.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Scalar)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl TryFrom<toml::Table> for Variables {
    type Error = TemplateError;

    fn try_from(table: toml::Table) -> Result<Self> {
        let mut vars = Self::new();
        for (name, value) in table {
            let scalar = Scalar::try_from(value).map_err(|e| match e {
                TemplateError::InvalidArgument(msg) => {
                    TemplateError::invalid(format!("{} (variable {:?})", msg, name))
                }
                other => other,
            })?;
            vars.insert(name, scalar)?;
        }
        Ok(vars)
    }
}

impl TryFrom<toml::Value> for Variables {
    type Error = TemplateError;

    fn try_from(value: toml::Value) -> Result<Self> {
        match value {
            toml::Value::Table(table) => Self::try_from(table),
            other => Err(TemplateError::invalid(format!(
                "variables must be a key/value mapping, got {}",
                other.type_str()
            ))),
        }
    }
}
