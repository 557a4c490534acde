//! Record-shape checks over loosely typed JSON.

use crate::error::{Error, Result};
use serde_json::{Map, Value};

/// Check that `record` has every field in `required`.
///
/// # Errors
/// Returns [`Error::MissingFields`] naming every absent field, in the order given.
pub fn validate_required_fields(record: &Map<String, Value>, required: &[&str]) -> Result<()> {
    let missing: Vec<String> = required
        .iter()
        .filter(|field| !record.contains_key(**field))
        .map(ToString::to_string)
        .collect();
    if missing.is_empty() {
        Ok(())
    } else {
        Err(Error::MissingFields(missing))
    }
}

/// Whether `value` lies within the optional inclusive bounds.
#[must_use]
pub fn validate_numeric_range(value: f64, min: Option<f64>, max: Option<f64>) -> bool {
    if min.is_some_and(|lo| value < lo) {
        return false;
    }
    if max.is_some_and(|hi| value > hi) {
        return false;
    }
    true
}

/// A user object needs an email containing `@`, a non-empty name, and a positive age.
#[must_use]
pub fn validate_user(user: &Value) -> bool {
    let Some(obj) = user.as_object() else {
        return false;
    };

    let email = obj.get("email").and_then(Value::as_str).unwrap_or_default();
    if !email.contains('@') {
        return false;
    }

    let name = obj.get("name").and_then(Value::as_str).unwrap_or_default();
    if name.is_empty() {
        return false;
    }

    obj.get("age")
        .and_then(Value::as_f64)
        .is_some_and(|age| age > 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn reports_all_missing_fields() -> anyhow::Result<()> {
        let record = json!({"name": "Alice", "age": 25});
        let obj = record
            .as_object()
            .ok_or_else(|| anyhow::anyhow!("not an object"))?;
        assert!(validate_required_fields(obj, &["name", "age"]).is_ok());
        match validate_required_fields(obj, &["email", "name", "phone"]) {
            Err(Error::MissingFields(f)) => assert_eq!(f, ["email", "phone"]),
            other => anyhow::bail!("unexpected: {other:?}"),
        }
        Ok(())
    }

    #[test]
    fn numeric_range_bounds_are_inclusive_and_optional() {
        assert!(validate_numeric_range(50.0, Some(0.0), Some(100.0)));
        assert!(validate_numeric_range(0.0, Some(0.0), None));
        assert!(!validate_numeric_range(-0.1, Some(0.0), None));
        assert!(!validate_numeric_range(100.5, None, Some(100.0)));
        assert!(validate_numeric_range(1e9, None, None));
    }

    #[test]
    fn user_validation() {
        assert!(validate_user(&json!({"name": "Alice", "email": "alice@example.com", "age": 25})));
        assert!(!validate_user(&json!({"name": "", "email": "invalid", "age": -1})));
        assert!(!validate_user(&json!({"name": "Bob", "email": "bob@example.com", "age": 0})));
        assert!(!validate_user(&json!({"name": "Bob", "email": "bob@example.com"})));
        assert!(!validate_user(&Value::Null));
    }
}
