use serde::{Deserialize, Serialize};

/// Smallest top-face scale the tapered extrusion is allowed to reach.
/// A zero or negative scale would make the extrusion degenerate.
pub const MIN_TOP_SCALE: f64 = 0.01;

/// Geometric parameters of one model run. Built once from a config
/// provider, never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelParams {
    pub text: String,
    /// Width of one QR module in mm.
    pub line_width: f64,
    /// Thickness of the base plate in mm.
    pub base_thickness: f64,
    /// Height of the raised QR pattern in mm.
    pub qr_height: f64,
    /// Taper of the pattern side walls, degrees from vertical.
    pub taper_angle: f64,
    /// Rounding radius applied to the pattern's outer corners, mm.
    pub corner_radius: f64,
    pub output_filename: String,
}

impl ModelParams {
    /// Edge length of the full plate for a grid of `module_count` modules.
    pub fn total_width(&self, module_count: usize) -> f64 {
        module_count as f64 * self.line_width
    }

    /// Top-face scale factor of the tapered extrusion.
    ///
    /// The taper narrows each wall by `qr_height * tan(angle)`, so one
    /// module loses twice that across its top face. When the reduction eats
    /// the whole line width the scale clamps to [`MIN_TOP_SCALE`] instead
    /// of going to zero or negative. A zero angle yields exactly 1.0.
    pub fn top_scale(&self) -> f64 {
        let top_reduction = self.qr_height * self.taper_angle.to_radians().tan() * 2.0;
        if self.line_width > top_reduction {
            (self.line_width - top_reduction) / self.line_width
        } else {
            MIN_TOP_SCALE
        }
    }
}

/// Square boolean matrix of QR modules, quiet zone included.
/// Row 0 is the top of the symbol as encoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleGrid {
    modules: Vec<Vec<bool>>,
}

impl ModuleGrid {
    /// Wraps a square matrix. The encoder adapter is the only producer and
    /// guarantees every row has the same length as the row count.
    pub fn new(modules: Vec<Vec<bool>>) -> Self {
        debug_assert!(modules.iter().all(|row| row.len() == modules.len()));
        Self { modules }
    }

    pub fn module_count(&self) -> usize {
        self.modules.len()
    }

    pub fn is_dark(&self, row: usize, col: usize) -> bool {
        self.modules[row][col]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[bool]> {
        self.modules.iter().map(|row| row.as_slice())
    }

    pub fn dark_count(&self) -> usize {
        self.modules
            .iter()
            .map(|row| row.iter().filter(|&&m| m).count())
            .sum()
    }
}

/// Rendered SCAD text together with the path it belongs at.
#[derive(Debug, Clone)]
pub struct GeometryDocument {
    pub content: String,
    pub output_filename: String,
}
