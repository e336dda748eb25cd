pub mod toml_config;

use crate::domain::model::ModelParams;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_finite_tangent, validate_non_empty_string, validate_non_negative_dimension,
    validate_path, validate_positive_dimension, Validate,
};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "qrscad")]
#[command(about = "Generate a 3D-printable QR code plate as an OpenSCAD model")]
pub struct CliConfig {
    /// Text to encode in the QR code
    #[arg(long, default_value = "https://mihatama.com/")]
    pub text: String,

    /// Width of one QR module in mm
    #[arg(long, default_value = "0.8")]
    pub line_width: f64,

    /// Thickness of the base plate in mm
    #[arg(long, default_value = "2.0")]
    pub base_thickness: f64,

    /// Height of the raised QR pattern in mm
    #[arg(long, default_value = "1.0")]
    pub qr_height: f64,

    /// Side-wall taper in degrees from vertical
    #[arg(long, default_value = "0.0")]
    pub taper_angle: f64,

    /// Rounding radius for the pattern's outer corners in mm
    #[arg(long, default_value = "0.1")]
    pub corner_radius: f64,

    /// Output .scad file path
    #[arg(long, default_value = "qrcode_model.scad")]
    pub output: String,

    /// Load model parameters from a TOML file instead of the flags above
    #[arg(long)]
    pub config: Option<String>,

    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn model_params(&self) -> ModelParams {
        ModelParams {
            text: self.text.clone(),
            line_width: self.line_width,
            base_thickness: self.base_thickness,
            qr_height: self.qr_height,
            taper_angle: self.taper_angle,
            corner_radius: self.corner_radius,
            output_filename: self.output.clone(),
        }
    }

    fn output_filename(&self) -> &str {
        &self.output
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("text", &self.text)?;
        validate_positive_dimension("line_width", self.line_width)?;
        validate_positive_dimension("base_thickness", self.base_thickness)?;
        validate_positive_dimension("qr_height", self.qr_height)?;
        validate_finite_tangent("taper_angle", self.taper_angle)?;
        validate_non_negative_dimension("corner_radius", self.corner_radius)?;
        validate_path("output", &self.output)?;
        Ok(())
    }
}
