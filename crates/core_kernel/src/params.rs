//! Rule parameters and their declared schemas
//!
//! Rate and discount kinds are parameterized by an untyped mapping of
//! names to JSON values. Each kind declares a [`ParamSchema`] describing
//! what it expects; front ends read the schema to drive input and the
//! registry validates supplied parameters against it before building.
//!
//! # Schema entry shape
//!
//! ```text
//! { "name": "Rate", "type": "float", "description": "Cost per unit time",
//!   "constraints": { "min": 0 } }
//! ```
//!
//! Supported types are `int`, `float`, `str`, `bool` and `list[<type>]`.

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors raised while reading or validating parameters
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParamError {
    #[error("Missing parameter '{0}'")]
    Missing(String),

    #[error("Parameter '{name}' must be {expected}")]
    WrongType {
        name: String,
        expected: String,
    },

    #[error("Parameter '{name}' value {value} is below the minimum {min}")]
    BelowMinimum {
        name: String,
        value: Decimal,
        min: Decimal,
    },

    #[error("Parameter '{name}' value {value} is above the maximum {max}")]
    AboveMaximum {
        name: String,
        value: Decimal,
        max: Decimal,
    },

    #[error("Parameter '{name}' value '{value}' is not one of: {choices}")]
    NotAChoice {
        name: String,
        value: String,
        choices: String,
    },

    #[error("Unknown parameter type '{0}'")]
    UnknownType(String),

    #[error("Invalid parameter '{name}': {reason}")]
    Invalid {
        name: String,
        reason: String,
    },
}

impl ParamError {
    pub fn wrong_type(name: impl Into<String>, expected: impl Into<String>) -> Self {
        ParamError::WrongType {
            name: name.into(),
            expected: expected.into(),
        }
    }

    pub fn invalid(name: impl Into<String>, reason: impl Into<String>) -> Self {
        ParamError::Invalid {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

/// Reads a JSON number or numeric string as a decimal
fn value_as_decimal(value: &Value) -> Option<Decimal> {
    let text = match value {
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.trim().to_string(),
        _ => return None,
    };
    Decimal::from_str(&text)
        .or_else(|_| Decimal::from_scientific(&text))
        .ok()
}

/// Parameters supplied when building a rate or discount
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Params(BTreeMap<String, Value>);

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a parameter, builder style
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    /// Returns a required parameter
    pub fn require(&self, name: &str) -> Result<&Value, ParamError> {
        self.get(name)
            .ok_or_else(|| ParamError::Missing(name.to_string()))
    }

    /// Reads a required numeric parameter (JSON number or numeric string)
    pub fn decimal(&self, name: &str) -> Result<Decimal, ParamError> {
        value_as_decimal(self.require(name)?)
            .ok_or_else(|| ParamError::wrong_type(name, "a number"))
    }

    /// Reads a required string parameter
    pub fn string(&self, name: &str) -> Result<&str, ParamError> {
        self.require(name)?
            .as_str()
            .ok_or_else(|| ParamError::wrong_type(name, "a string"))
    }

    /// Reads a required list-of-strings parameter
    pub fn string_list(&self, name: &str) -> Result<Vec<String>, ParamError> {
        let items = self
            .require(name)?
            .as_array()
            .ok_or_else(|| ParamError::wrong_type(name, "a list of strings"))?;

        items
            .iter()
            .map(|item| {
                item.as_str()
                    .map(str::to_string)
                    .ok_or_else(|| ParamError::wrong_type(name, "a list of strings"))
            })
            .collect()
    }
}

impl From<serde_json::Map<String, Value>> for Params {
    fn from(map: serde_json::Map<String, Value>) -> Self {
        Self(map.into_iter().collect())
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// Declared type of a parameter
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamType {
    Int,
    Float,
    Str,
    Bool,
    List(Box<ParamType>),
}

impl ParamType {
    /// Shorthand for `list[<inner>]`
    pub fn list_of(inner: ParamType) -> Self {
        ParamType::List(Box::new(inner))
    }

    fn describe(&self) -> String {
        match self {
            ParamType::Int => "an integer".to_string(),
            ParamType::Float => "a number".to_string(),
            ParamType::Str => "a string".to_string(),
            ParamType::Bool => "a boolean".to_string(),
            ParamType::List(inner) => format!("a list of {}", inner),
        }
    }
}

impl fmt::Display for ParamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamType::Int => f.write_str("int"),
            ParamType::Float => f.write_str("float"),
            ParamType::Str => f.write_str("str"),
            ParamType::Bool => f.write_str("bool"),
            ParamType::List(inner) => write!(f, "list[{}]", inner),
        }
    }
}

impl FromStr for ParamType {
    type Err = ParamError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        match s {
            "int" => Ok(ParamType::Int),
            "float" => Ok(ParamType::Float),
            "str" => Ok(ParamType::Str),
            "bool" => Ok(ParamType::Bool),
            _ => s
                .strip_prefix("list[")
                .and_then(|rest| rest.strip_suffix(']'))
                .ok_or_else(|| ParamError::UnknownType(s.to_string()))
                .and_then(|inner| inner.parse().map(ParamType::list_of)),
        }
    }
}

impl Serialize for ParamType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ParamType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Optional restrictions on a parameter's values
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParamConstraints {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub choices: Option<Vec<String>>,

    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::float_option"
    )]
    pub min: Option<Decimal>,

    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::float_option"
    )]
    pub max: Option<Decimal>,
}

impl ParamConstraints {
    fn check(&self, name: &str, value: &Value) -> Result<(), ParamError> {
        if let Some(choices) = &self.choices {
            let text = match value {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            if !choices.iter().any(|c| *c == text) {
                return Err(ParamError::NotAChoice {
                    name: name.to_string(),
                    value: text,
                    choices: choices.join(", "),
                });
            }
        }

        if self.min.is_none() && self.max.is_none() {
            return Ok(());
        }

        if let Some(number) = value_as_decimal(value) {
            if let Some(min) = self.min {
                if number < min {
                    return Err(ParamError::BelowMinimum {
                        name: name.to_string(),
                        value: number,
                        min,
                    });
                }
            }
            if let Some(max) = self.max {
                if number > max {
                    return Err(ParamError::AboveMaximum {
                        name: name.to_string(),
                        value: number,
                        max,
                    });
                }
            }
        }

        Ok(())
    }
}

/// Declaration of a single parameter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParamSpec {
    pub name: String,

    #[serde(rename = "type")]
    pub param_type: ParamType,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub constraints: Option<ParamConstraints>,
}

impl ParamSpec {
    pub fn new(name: impl Into<String>, param_type: ParamType) -> Self {
        Self {
            name: name.into(),
            param_type,
            description: None,
            constraints: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_choices<I, S>(mut self, choices: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.constraints_mut().choices = Some(choices.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_min(mut self, min: Decimal) -> Self {
        self.constraints_mut().min = Some(min);
        self
    }

    pub fn with_max(mut self, max: Decimal) -> Self {
        self.constraints_mut().max = Some(max);
        self
    }

    fn constraints_mut(&mut self) -> &mut ParamConstraints {
        self.constraints.get_or_insert_with(ParamConstraints::default)
    }

    /// Checks a supplied value against this declaration
    pub fn validate(&self, value: &Value) -> Result<(), ParamError> {
        self.validate_as(&self.param_type, value)
    }

    fn validate_as(&self, param_type: &ParamType, value: &Value) -> Result<(), ParamError> {
        let well_typed = match param_type {
            ParamType::Int => value_as_decimal(value).is_some_and(|d| d.fract().is_zero()),
            ParamType::Float => value_as_decimal(value).is_some(),
            ParamType::Str => value.is_string(),
            ParamType::Bool => value.is_boolean(),
            ParamType::List(inner) => {
                let items = value
                    .as_array()
                    .ok_or_else(|| ParamError::wrong_type(&self.name, param_type.describe()))?;
                // Constraints apply to each element, not the list itself
                return items.iter().try_for_each(|item| self.validate_as(inner, item));
            }
        };

        if !well_typed {
            return Err(ParamError::wrong_type(&self.name, param_type.describe()));
        }

        match &self.constraints {
            Some(constraints) => constraints.check(&self.name, value),
            None => Ok(()),
        }
    }
}

/// Ordered list of parameter declarations for one rule kind
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParamSchema(Vec<ParamSpec>);

impl ParamSchema {
    pub fn new(specs: Vec<ParamSpec>) -> Self {
        Self(specs)
    }

    pub fn specs(&self) -> &[ParamSpec] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the declaration for a parameter by name
    pub fn get(&self, name: &str) -> Option<&ParamSpec> {
        self.0.iter().find(|spec| spec.name == name)
    }

    /// Checks that every declared parameter is present and well-formed
    ///
    /// Parameters not mentioned by the schema are ignored.
    pub fn validate(&self, params: &Params) -> Result<(), ParamError> {
        self.0
            .iter()
            .try_for_each(|spec| spec.validate(params.require(&spec.name)?))
    }
}

impl From<Vec<ParamSpec>> for ParamSchema {
    fn from(specs: Vec<ParamSpec>) -> Self {
        Self(specs)
    }
}
