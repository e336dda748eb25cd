use crate::domain::ports::Pipeline;
use crate::utils::error::Result;

/// Drives one model run: encode, emit, write. Two abort points only, the
/// QR encoding and the file write.
pub struct ModelEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> ModelEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub fn run(&self) -> Result<String> {
        println!("Starting model generation...");

        // Encode
        let grid = self.pipeline.encode()?;
        println!(
            "Generated QR code data ({count}x{count} modules)",
            count = grid.module_count()
        );

        // Emit
        let document = self.pipeline.emit(&grid)?;
        println!("Rendered SCAD document ({} bytes)", document.content.len());

        // Write. Failure here is reported where it happens and returned as
        // the run outcome, never raised past the caller.
        match self.pipeline.write(document) {
            Ok(path) => {
                println!("Saved '{}' successfully.", path);
                Ok(path)
            }
            Err(e) => {
                eprintln!("Error: failed to write output file. {}", e);
                Err(e)
            }
        }
    }
}
