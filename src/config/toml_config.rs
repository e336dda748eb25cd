use crate::domain::model::ModelParams;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{ModelError, Result};
use crate::utils::validation::{
    validate_finite_tangent, validate_non_empty_string, validate_non_negative_dimension,
    validate_path, validate_positive_dimension, Validate,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub model: ModelSection,
    pub output: Option<OutputSection>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelSection {
    pub text: String,
    #[serde(default = "default_line_width")]
    pub line_width: f64,
    #[serde(default = "default_base_thickness")]
    pub base_thickness: f64,
    #[serde(default = "default_qr_height")]
    pub qr_height: f64,
    #[serde(default)]
    pub taper_angle: f64,
    #[serde(default = "default_corner_radius")]
    pub corner_radius: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputSection {
    pub filename: String,
}

fn default_line_width() -> f64 {
    0.8
}

fn default_base_thickness() -> f64 {
    2.0
}

fn default_qr_height() -> f64 {
    1.0
}

fn default_corner_radius() -> f64 {
    0.1
}

const DEFAULT_OUTPUT_FILENAME: &str = "qrcode_model.scad";

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ModelError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| ModelError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Substitutes `${VAR_NAME}` references with environment values;
    /// unknown variables stay as written.
    fn substitute_env_vars(content: &str) -> String {
        use regex::Regex;
        // Fixed pattern, cannot fail to compile.
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .to_string()
    }
}

impl ConfigProvider for TomlConfig {
    fn model_params(&self) -> ModelParams {
        ModelParams {
            text: self.model.text.clone(),
            line_width: self.model.line_width,
            base_thickness: self.model.base_thickness,
            qr_height: self.model.qr_height,
            taper_angle: self.model.taper_angle,
            corner_radius: self.model.corner_radius,
            output_filename: self.output_filename().to_string(),
        }
    }

    fn output_filename(&self) -> &str {
        self.output
            .as_ref()
            .map(|o| o.filename.as_str())
            .unwrap_or(DEFAULT_OUTPUT_FILENAME)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("model.text", &self.model.text)?;
        validate_positive_dimension("model.line_width", self.model.line_width)?;
        validate_positive_dimension("model.base_thickness", self.model.base_thickness)?;
        validate_positive_dimension("model.qr_height", self.model.qr_height)?;
        validate_finite_tangent("model.taper_angle", self.model.taper_angle)?;
        validate_non_negative_dimension("model.corner_radius", self.model.corner_radius)?;
        validate_path("output.filename", self.output_filename())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let config = TomlConfig::from_toml_str(
            r#"
            [model]
            text = "https://mihatama.com/"
            line_width = 1.2
            base_thickness = 3.0
            qr_height = 2.0
            taper_angle = 10.0
            corner_radius = 0.2

            [output]
            filename = "plate.scad"
            "#,
        )
        .unwrap();

        assert_eq!(config.model.line_width, 1.2);
        assert_eq!(config.model.taper_angle, 10.0);
        assert_eq!(config.output_filename(), "plate.scad");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let config = TomlConfig::from_toml_str(
            r#"
            [model]
            text = "hello"
            "#,
        )
        .unwrap();

        assert_eq!(config.model.line_width, 0.8);
        assert_eq!(config.model.base_thickness, 2.0);
        assert_eq!(config.model.qr_height, 1.0);
        assert_eq!(config.model.taper_angle, 0.0);
        assert_eq!(config.model.corner_radius, 0.1);
        assert_eq!(config.output_filename(), DEFAULT_OUTPUT_FILENAME);
    }

    #[test]
    fn test_missing_text_is_a_parse_error() {
        assert!(TomlConfig::from_toml_str("[model]\nline_width = 0.8").is_err());
    }

    #[test]
    fn test_invalid_dimension_fails_validation() {
        let config = TomlConfig::from_toml_str(
            r#"
            [model]
            text = "hello"
            line_width = -0.8
            "#,
        )
        .unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("QRSCAD_TEST_TEXT", "from-env");
        let config = TomlConfig::from_toml_str(
            r#"
            [model]
            text = "${QRSCAD_TEST_TEXT}"
            "#,
        )
        .unwrap();
        assert_eq!(config.model.text, "from-env");
    }

    #[test]
    fn test_unknown_env_var_stays_literal() {
        let config = TomlConfig::from_toml_str(
            r#"
            [model]
            text = "${QRSCAD_TEST_UNSET_VARIABLE}"
            "#,
        )
        .unwrap();
        assert_eq!(config.model.text, "${QRSCAD_TEST_UNSET_VARIABLE}");
    }
}
