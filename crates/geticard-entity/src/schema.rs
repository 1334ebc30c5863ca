//! Turning untyped JSON request bodies into validated schema objects.

use serde::de::DeserializeOwned;
use serde_json::Value;
use validator::{Validate, ValidationErrors, ValidationErrorsKind};

use geticard_core::error::{AppError, FieldError};
use geticard_core::result::AppResult;

/// Deserialize `body` into `T` and run its validation rules.
///
/// Type mismatches and rule violations both surface as a
/// [`geticard_core::error::ErrorKind::Validation`] error with field-level details.
pub fn parse<T>(body: Value) -> AppResult<T>
where
    T: DeserializeOwned + Validate,
{
    if !body.is_object() {
        return Err(AppError::invalid_fields(
            "Request body must be a JSON object",
            vec![FieldError::new("body", "type", "expected a JSON object")],
        ));
    }

    let parsed: T = serde_json::from_value(body).map_err(|e| {
        AppError::invalid_fields(
            "Invalid request body",
            vec![FieldError::new("body", "type", e.to_string())],
        )
    })?;

    parsed
        .validate()
        .map_err(|e| AppError::invalid_fields("Invalid request body", field_errors(&e)))?;

    Ok(parsed)
}

/// Flatten validator output into a stable, sorted list of field errors.
pub fn field_errors(errors: &ValidationErrors) -> Vec<FieldError> {
    let mut out = Vec::new();
    for (field, kind) in errors.errors() {
        if let ValidationErrorsKind::Field(list) = kind {
            for error in list {
                let message = error
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("{field} is invalid ({})", error.code));
                out.push(FieldError::new(field.to_string(), error.code.to_string(), message));
            }
        }
    }
    out.sort_by(|a, b| a.field.cmp(&b.field).then(a.code.cmp(&b.code)));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Deserialize, Validate)]
    struct Probe {
        #[validate(required, email)]
        email: Option<String>,
    }

    #[test]
    fn test_parse_ok() {
        let probe: Probe = parse(json!({"email": "a@x.com"})).expect("valid");
        assert_eq!(probe.email.as_deref(), Some("a@x.com"));
    }

    #[test]
    fn test_parse_reports_missing_field() {
        let err = parse::<Probe>(json!({})).expect_err("missing email");
        assert_eq!(err.fields.len(), 1);
        assert_eq!(err.fields[0].field, "email");
        assert_eq!(err.fields[0].code, "required");
    }

    #[test]
    fn test_parse_reports_type_mismatch() {
        let err = parse::<Probe>(json!({"email": 42})).expect_err("wrong type");
        assert_eq!(err.fields[0].code, "type");
    }

    #[test]
    fn test_parse_rejects_non_object() {
        let err = parse::<Probe>(json!(["a@x.com"])).expect_err("array body");
        assert_eq!(err.fields[0].field, "body");
    }
}
