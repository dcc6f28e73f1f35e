use crate::utils::error::{CatalogError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(CatalogError::validation(
            field_name,
            "Value cannot be empty or whitespace-only",
        ));
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(CatalogError::validation(
            field_name,
            format!("Value {} must be between {} and {}", value, min, max),
        ));
    }
    Ok(())
}

pub fn validate_positive(field_name: &str, value: u32) -> Result<()> {
    if value == 0 {
        return Err(CatalogError::validation(
            field_name,
            "Value must be greater than zero",
        ));
    }
    Ok(())
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(CatalogError::validation(field_name, "Path cannot be empty"));
    }

    if path.contains('\0') {
        return Err(CatalogError::validation(
            field_name,
            "Path contains null bytes",
        ));
    }

    Ok(())
}
