use serde_json::Value;

use super::{ValidationIssue, ValidationIssues, Validator};

/// Minimal structural validator over JSON-compatible values.
///
/// Covers the type set the param codec can produce: strings, numbers,
/// booleans, null, arrays, and objects, with per-key optionality.
#[derive(Debug, Clone, PartialEq)]
pub enum TypeShape {
    Any,
    String,
    Number,
    Boolean,
    Null,
    Optional(Box<TypeShape>),
    Array(Box<TypeShape>),
    Object(Vec<(String, TypeShape)>),
}

impl TypeShape {
    fn check(&self, input: &Value, path: &mut Vec<String>, issues: &mut Vec<ValidationIssue>) {
        match self {
            TypeShape::Any => {}
            TypeShape::String => {
                if !input.is_string() {
                    push_mismatch(path, issues, "string", input);
                }
            }
            TypeShape::Number => {
                if !input.is_number() {
                    push_mismatch(path, issues, "number", input);
                }
            }
            TypeShape::Boolean => {
                if !input.is_boolean() {
                    push_mismatch(path, issues, "boolean", input);
                }
            }
            TypeShape::Null => {
                if !input.is_null() {
                    push_mismatch(path, issues, "null", input);
                }
            }
            TypeShape::Optional(inner) => inner.check(input, path, issues),
            TypeShape::Array(element) => match input {
                Value::Array(items) => {
                    for (index, item) in items.iter().enumerate() {
                        path.push(index.to_string());
                        element.check(item, path, issues);
                        path.pop();
                    }
                }
                other => push_mismatch(path, issues, "array", other),
            },
            TypeShape::Object(fields) => match input {
                Value::Object(map) => {
                    for (key, shape) in fields {
                        match map.get(key) {
                            Some(value) => {
                                path.push(key.clone());
                                shape.check(value, path, issues);
                                path.pop();
                            }
                            None => {
                                if !matches!(shape, TypeShape::Optional(_)) {
                                    issues.push(ValidationIssue {
                                        path: appended(path, key),
                                        message: "required key is missing".to_string(),
                                    });
                                }
                            }
                        }
                    }
                }
                other => push_mismatch(path, issues, "object", other),
            },
        }
    }
}

impl Validator for TypeShape {
    fn validate(&self, input: &Value) -> Result<Value, ValidationIssues> {
        let mut issues = Vec::new();
        self.check(input, &mut Vec::new(), &mut issues);
        if issues.is_empty() {
            Ok(input.clone())
        } else {
            Err(ValidationIssues(issues))
        }
    }
}

fn push_mismatch(
    path: &[String],
    issues: &mut Vec<ValidationIssue>,
    expected: &str,
    actual: &Value,
) {
    issues.push(ValidationIssue {
        path: path.to_vec(),
        message: format!("expected {expected}, got {}", type_name(actual)),
    });
}

fn appended(path: &[String], key: &str) -> Vec<String> {
    let mut extended = path.to_vec();
    extended.push(key.to_string());
    extended
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
