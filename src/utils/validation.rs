use crate::utils::error::{EngineError, Result};
use regex::Regex;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

fn invalid(field: &str, reason: impl std::fmt::Display) -> EngineError {
    EngineError::ValidationError {
        message: format!("{}: {}", field, reason),
    }
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(invalid(field_name, "value cannot be empty or whitespace-only"));
    }
    Ok(())
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(invalid(field_name, "path cannot be empty"));
    }

    if path.contains('\0') {
        return Err(invalid(field_name, "path contains null bytes"));
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
        return Err(invalid(
            field_name,
            format!("value {} must be between {} and {}", value, min, max),
        ));
    }
    Ok(())
}

pub fn validate_non_negative<T: PartialOrd + Default + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
) -> Result<()> {
    if value < T::default() {
        return Err(invalid(
            field_name,
            format!("value {} cannot be negative", value),
        ));
    }
    Ok(())
}

pub fn validate_email(field_name: &str, value: &str) -> Result<()> {
    let re = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
    if !re.is_match(value.trim()) {
        return Err(invalid(
            field_name,
            format!("{:?} is not a valid email address", value),
        ));
    }
    Ok(())
}
