use crate::utils::error::{CountError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.trim().is_empty() {
        return Err(CountError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(CountError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

/// Fails when more than one of the named settings is present.
pub fn validate_exclusive(fields: &[(&str, bool)]) -> Result<()> {
    let set: Vec<&str> = fields
        .iter()
        .filter(|(_, present)| *present)
        .map(|(name, _)| *name)
        .collect();

    if set.len() > 1 {
        return Err(CountError::ConfigValidationError {
            field: set.join(", "),
            message: format!("only one of {} may be given", set.join(", ")),
        });
    }
    Ok(())
}
