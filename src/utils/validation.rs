use crate::utils::error::{ImpactError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(ImpactError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(ImpactError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: usize, min_value: usize) -> Result<()> {
    if value < min_value {
        return Err(ImpactError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

/// Length in characters of the raw value, before any trimming.
pub fn validate_max_length(field: &'static str, value: &str, max_length: usize) -> Result<()> {
    let actual_length = value.chars().count();
    if actual_length > max_length {
        return Err(ImpactError::FieldTooLong {
            field,
            max_length,
            actual_length,
        });
    }
    Ok(())
}

pub fn validate_required_text(field: &'static str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(ImpactError::MissingRequiredField { field });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("export.output_dir", ".").is_ok());
        assert!(validate_path("export.output_dir", "").is_err());
        assert!(validate_path("export.output_dir", "out\0put").is_err());
    }

    #[test]
    fn test_validate_positive_number() {
        assert!(validate_positive_number("prompt.max_attempts", 5, 1).is_ok());
        assert!(validate_positive_number("prompt.max_attempts", 0, 1).is_err());
    }

    #[test]
    fn test_validate_max_length_counts_characters() {
        assert!(validate_max_length("action", &"a".repeat(125), 125).is_ok());
        assert!(validate_max_length("action", &"é".repeat(125), 125).is_ok());

        match validate_max_length("action", &"a".repeat(126), 125) {
            Err(ImpactError::FieldTooLong {
                field,
                max_length,
                actual_length,
            }) => {
                assert_eq!(field, "action");
                assert_eq!(max_length, 125);
                assert_eq!(actual_length, 126);
            }
            other => panic!("expected FieldTooLong, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_required_text() {
        assert!(validate_required_text("action", "Shipped it").is_ok());
        assert!(matches!(
            validate_required_text("action", ""),
            Err(ImpactError::MissingRequiredField { field: "action" })
        ));
    }
}
