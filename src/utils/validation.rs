use crate::utils::error::{ListError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.trim().is_empty() {
        return Err(ListError::ConfigError {
            message: format!("{field_name} cannot be empty"),
        });
    }

    if path.contains('\0') {
        return Err(ListError::ConfigError {
            message: format!("{field_name} contains null bytes: {path:?}"),
        });
    }

    Ok(())
}
