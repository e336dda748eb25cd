use crate::domain::model::{ModelParams, ModuleGrid};
use chrono::Local;

/// Formats a millimeter quantity as a dotted-decimal OpenSCAD literal.
/// Always keeps a decimal point (`2.0`, never `2`) and cuts float noise
/// at four decimal places, which is far below printable resolution.
/// Rust's formatter is locale-independent, as the SCAD grammar requires.
pub fn fmt_decimal(value: f64) -> String {
    let mut s = format!("{:.4}", value);
    while s.ends_with('0') && !s.ends_with(".0") {
        s.pop();
    }
    s
}

/// Formats the extrusion scale with shortest round-trip precision, so a
/// unit scale emits as `1` and a clamped scale as `0.01`.
pub fn fmt_scale(value: f64) -> String {
    format!("{}", value)
}

/// Incremental OpenSCAD document builder. Statements append as typed
/// fields with consistent indentation; consumers only see the finished
/// string.
#[derive(Debug, Default)]
pub struct ScadBuilder {
    buf: String,
    indent: usize,
}

impl ScadBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    fn push_line(&mut self, line: &str) {
        for _ in 0..self.indent {
            self.buf.push_str("    ");
        }
        self.buf.push_str(line);
        self.buf.push('\n');
    }

    pub fn comment(&mut self, text: &str) {
        self.push_line(&format!("// {}", text));
    }

    pub fn blank(&mut self) {
        self.buf.push('\n');
    }

    /// `name = <value>;` with the dotted-decimal formatting.
    pub fn assign_decimal(&mut self, name: &str, value: f64) {
        self.push_line(&format!("{} = {};", name, fmt_decimal(value)));
    }

    /// `name = <value>;` with a caller-formatted right-hand side.
    pub fn assign_raw(&mut self, name: &str, value: &str) {
        self.push_line(&format!("{} = {};", name, value));
    }

    /// A terminated statement: `cube(...)` becomes `cube(...);`.
    pub fn statement(&mut self, stmt: &str) {
        self.push_line(&format!("{};", stmt));
    }

    /// Opens `head { ... }`; every `open_block` needs a matching
    /// `close_block`.
    pub fn open_block(&mut self, head: &str) {
        self.push_line(&format!("{} {{", head));
        self.indent += 1;
    }

    pub fn close_block(&mut self) {
        self.indent -= 1;
        self.push_line("}");
    }

    /// Serializes the grid as a 0/1 array literal, rows in encoded order.
    /// The literal doubles as JSON so tests and downstream tooling can
    /// parse it back.
    pub fn matrix(&mut self, name: &str, grid: &ModuleGrid) {
        self.push_line(&format!("{} = [", name));
        let count = grid.module_count();
        for (i, row) in grid.rows().enumerate() {
            let cells: Vec<&str> = row.iter().map(|&m| if m { "1" } else { "0" }).collect();
            let sep = if i + 1 < count { "," } else { "" };
            self.push_line(&format!("[{}]{}", cells.join(","), sep));
        }
        self.push_line("];");
    }

    pub fn finish(self) -> String {
        self.buf
    }
}

/// Renders the full model document: parameter echo, grid literal, base
/// plate, and the tapered extrusion holding one square per dark module.
pub fn render(params: &ModelParams, grid: &ModuleGrid) -> String {
    let module_count = grid.module_count();
    let total_width = params.total_width(module_count);
    let final_scale = params.top_scale();

    let mut doc = ScadBuilder::new();

    doc.comment(&format!(
        "Generated by qr-scad {} on {}",
        env!("CARGO_PKG_VERSION"),
        Local::now().format("%Y-%m-%d %H:%M:%S")
    ));
    doc.comment(&format!("text: {:?}", params.text));
    doc.blank();

    doc.comment("--- parameters ---");
    doc.assign_decimal("line_width", params.line_width);
    doc.assign_decimal("base_thickness", params.base_thickness);
    doc.assign_decimal("qr_height", params.qr_height);
    doc.assign_decimal("taper_angle", params.taper_angle);
    doc.assign_decimal("corner_radius", params.corner_radius);
    doc.assign_raw("module_count", &module_count.to_string());
    doc.assign_decimal("total_width", total_width);
    doc.assign_raw("final_scale", &fmt_scale(final_scale));
    doc.blank();

    doc.comment("--- QR module grid, 1 = dark ---");
    doc.matrix("qr_matrix", grid);
    doc.blank();

    doc.comment("base plate");
    doc.statement(&format!(
        "cube([{tw}, {tw}, {bt}])",
        tw = fmt_decimal(total_width),
        bt = fmt_decimal(params.base_thickness)
    ));
    doc.blank();

    doc.comment("raised QR pattern, one square per dark module");
    doc.open_block(&format!(
        "translate([0, 0, {}])",
        fmt_decimal(params.base_thickness)
    ));
    doc.open_block(&format!(
        "linear_extrude(height = {}, scale = {}, convexity = 10)",
        fmt_decimal(params.qr_height),
        fmt_scale(final_scale)
    ));
    // Offsetting outward then back inward rounds only the outer perimeter
    // while preserving the overall footprint and the module width.
    doc.open_block(&format!(
        "offset(r = -{r}, $fn = 32)",
        r = fmt_decimal(params.corner_radius)
    ));
    doc.open_block(&format!(
        "offset(r = {r}, $fn = 32)",
        r = fmt_decimal(params.corner_radius)
    ));
    doc.open_block("union()");

    for row in 0..module_count {
        for col in 0..module_count {
            if grid.is_dark(row, col) {
                let x = col as f64 * params.line_width;
                // Row 0 is the top of the symbol; SCAD's y axis grows
                // upward, so the row order flips.
                let y = (module_count - 1 - row) as f64 * params.line_width;
                doc.statement(&format!(
                    "translate([{}, {}, 0]) square({})",
                    fmt_decimal(x),
                    fmt_decimal(y),
                    fmt_decimal(params.line_width)
                ));
            }
        }
    }

    doc.close_block(); // union
    doc.close_block(); // offset inward
    doc.close_block(); // offset outward
    doc.close_block(); // linear_extrude
    doc.close_block(); // translate

    doc.finish()
}
