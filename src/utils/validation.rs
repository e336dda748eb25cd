use crate::utils::error::{ModelError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ModelError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(ModelError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(ModelError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

/// Dimensions in mm must be finite and strictly positive.
pub fn validate_positive_dimension(field_name: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(ModelError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value must be a positive finite number of millimeters".to_string(),
        });
    }
    Ok(())
}

/// Radii may be zero but never negative.
pub fn validate_non_negative_dimension(field_name: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(ModelError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value must be a non-negative finite number of millimeters".to_string(),
        });
    }
    Ok(())
}

/// The taper angle enters the geometry only through its tangent, which must
/// be finite (rules out ±90° and any non-finite input).
pub fn validate_finite_tangent(field_name: &str, degrees: f64) -> Result<()> {
    if !degrees.is_finite() || !degrees.to_radians().tan().is_finite() {
        return Err(ModelError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: degrees.to_string(),
            reason: "Angle must have a finite tangent".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("text", "https://example.com").is_ok());
        assert!(validate_non_empty_string("text", "").is_err());
        assert!(validate_non_empty_string("text", "   ").is_err());
    }

    #[test]
    fn test_validate_path() {
        assert!(validate_path("output", "model.scad").is_ok());
        assert!(validate_path("output", "").is_err());
        assert!(validate_path("output", "bad\0path").is_err());
    }

    #[test]
    fn test_validate_positive_dimension() {
        assert!(validate_positive_dimension("line_width", 0.8).is_ok());
        assert!(validate_positive_dimension("line_width", 0.0).is_err());
        assert!(validate_positive_dimension("line_width", -1.0).is_err());
        assert!(validate_positive_dimension("line_width", f64::NAN).is_err());
        assert!(validate_positive_dimension("line_width", f64::INFINITY).is_err());
    }

    #[test]
    fn test_validate_non_negative_dimension() {
        assert!(validate_non_negative_dimension("corner_radius", 0.0).is_ok());
        assert!(validate_non_negative_dimension("corner_radius", 0.1).is_ok());
        assert!(validate_non_negative_dimension("corner_radius", -0.1).is_err());
    }

    #[test]
    fn test_validate_finite_tangent() {
        assert!(validate_finite_tangent("taper_angle", 0.0).is_ok());
        assert!(validate_finite_tangent("taper_angle", 45.0).is_ok());
        assert!(validate_finite_tangent("taper_angle", -30.0).is_ok());
        assert!(validate_finite_tangent("taper_angle", f64::NAN).is_err());
        assert!(validate_finite_tangent("taper_angle", f64::INFINITY).is_err());
    }
}
