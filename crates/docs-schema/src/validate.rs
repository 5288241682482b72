//! # Front Matter Validation
//!
//! Total, field-by-field validation of a raw front matter record against the
//! `DocumentEntry` contract.
//!
//! ## Invariant
//!
//! Validation never short-circuits. Every field is checked and every failure
//! is reported, in declaration order (`title`, `description`, `group`,
//! `priority`), so an author sees the complete list of problems from one
//! build. A record with any violation produces no `DocumentEntry` at all:
//! there is no partial acceptance and no default substitution for a bad
//! `group`.
//!
//! Keys outside the contract are ignored.

use std::fmt;

use docs_core::{Category, DocumentEntry};
use serde_json::{Map, Value};

/// Field name used when the record itself is not a mapping.
pub const ROOT_FIELD: &str = "(root)";

/// Why a field failed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViolationReason {
    /// A required field is absent.
    Missing,
    /// A required text field is empty or whitespace only.
    Empty,
    /// The field holds the wrong primitive type.
    WrongType {
        /// Type the contract requires.
        expected: &'static str,
        /// Type actually present.
        found: &'static str,
    },
    /// `group` names something outside the closed category set.
    NotInSet {
        /// The rejected value.
        value: String,
    },
}

impl fmt::Display for ViolationReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing => f.write_str("required field is missing"),
            Self::Empty => f.write_str("must not be empty"),
            Self::WrongType { expected, found } => {
                write!(f, "expected {expected}, found {found}")
            }
            Self::NotInSet { value } => write!(
                f,
                "{value:?} is not one of: {}",
                Category::names().join(", ")
            ),
        }
    }
}

/// A single offending field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaViolation {
    /// Name of the front matter field, or [`ROOT_FIELD`].
    pub field: String,
    /// Constraint the field did not satisfy.
    pub reason: ViolationReason,
}

impl SchemaViolation {
    fn new(field: &str, reason: ViolationReason) -> Self {
        Self {
            field: field.to_string(),
            reason,
        }
    }
}

impl fmt::Display for SchemaViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "  {}: {}", self.field, self.reason)
    }
}

/// Every violation found in one entry. Never empty when returned as an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaViolations {
    violations: Vec<SchemaViolation>,
}

impl SchemaViolations {
    /// Returns the number of violations.
    pub fn len(&self) -> usize {
        self.violations.len()
    }

    /// Returns true if there are no violations.
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// Returns a slice of all violations.
    pub fn violations(&self) -> &[SchemaViolation] {
        &self.violations
    }

    /// Names of the offending fields, in report order.
    pub fn fields(&self) -> Vec<&str> {
        self.violations.iter().map(|v| v.field.as_str()).collect()
    }

    /// Returns the violation for `field`, if any.
    pub fn get(&self, field: &str) -> Option<&SchemaViolation> {
        self.violations.iter().find(|v| v.field == field)
    }

    /// Consumes self and returns the inner Vec.
    pub fn into_inner(self) -> Vec<SchemaViolation> {
        self.violations
    }
}

impl fmt::Display for SchemaViolations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, v) in self.violations.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{v}")?;
        }
        Ok(())
    }
}

impl std::error::Error for SchemaViolations {}

/// Validate a raw front matter record.
///
/// # Errors
///
/// Returns every [`SchemaViolation`] of the record when any field fails its
/// constraint.
pub fn validate(raw: &Value) -> Result<DocumentEntry, SchemaViolations> {
    let Some(record) = raw.as_object() else {
        return Err(SchemaViolations {
            violations: vec![SchemaViolation::new(
                ROOT_FIELD,
                ViolationReason::WrongType {
                    expected: "mapping",
                    found: json_type(raw),
                },
            )],
        });
    };

    let mut violations = Vec::new();
    let title = required_text(record, "title", &mut violations);
    let description = required_text(record, "description", &mut violations);
    let group = optional_group(record, &mut violations);
    let priority = optional_number(record, "priority", &mut violations);

    match (title, description) {
        (Some(title), Some(description)) if violations.is_empty() => Ok(DocumentEntry {
            title,
            description,
            group,
            priority,
        }),
        _ => Err(SchemaViolations { violations }),
    }
}

fn required_text(
    record: &Map<String, Value>,
    field: &str,
    violations: &mut Vec<SchemaViolation>,
) -> Option<String> {
    match record.get(field) {
        None => {
            violations.push(SchemaViolation::new(field, ViolationReason::Missing));
            None
        }
        Some(Value::String(s)) if s.trim().is_empty() => {
            violations.push(SchemaViolation::new(field, ViolationReason::Empty));
            None
        }
        Some(Value::String(s)) => Some(s.clone()),
        Some(other) => {
            violations.push(wrong_type(field, "string", other));
            None
        }
    }
}

fn optional_group(
    record: &Map<String, Value>,
    violations: &mut Vec<SchemaViolation>,
) -> Option<Category> {
    match record.get("group")? {
        Value::String(s) => match s.parse::<Category>() {
            Ok(category) => Some(category),
            Err(_) => {
                violations.push(SchemaViolation::new(
                    "group",
                    ViolationReason::NotInSet { value: s.clone() },
                ));
                None
            }
        },
        other => {
            violations.push(wrong_type("group", "string", other));
            None
        }
    }
}

fn optional_number(
    record: &Map<String, Value>,
    field: &str,
    violations: &mut Vec<SchemaViolation>,
) -> Option<f64> {
    match record.get(field)? {
        // serde_json numbers are always finite.
        Value::Number(n) => n.as_f64(),
        other => {
            violations.push(wrong_type(field, "number", other));
            None
        }
    }
}

fn wrong_type(field: &str, expected: &'static str, found: &Value) -> SchemaViolation {
    SchemaViolation::new(
        field,
        ViolationReason::WrongType {
            expected,
            found: json_type(found),
        },
    )
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "sequence",
        Value::Object(_) => "mapping",
    }
}
