use crate::adapters::qr;
use crate::core::scad;
use crate::domain::model::{GeometryDocument, ModelParams, ModuleGrid};
use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
use crate::utils::error::Result;

pub struct ScadPipeline<S: Storage> {
    storage: S,
    params: ModelParams,
}

impl<S: Storage> ScadPipeline<S> {
    pub fn new<C: ConfigProvider>(storage: S, config: &C) -> Self {
        Self {
            storage,
            params: config.model_params(),
        }
    }
}

impl<S: Storage> Pipeline for ScadPipeline<S> {
    fn encode(&self) -> Result<ModuleGrid> {
        tracing::debug!("Encoding text: {:?}", self.params.text);
        qr::encode(&self.params.text)
    }

    fn emit(&self, grid: &ModuleGrid) -> Result<GeometryDocument> {
        let content = scad::render(&self.params, grid);
        tracing::debug!(
            "Rendered document: {} bytes, {} dark modules",
            content.len(),
            grid.dark_count()
        );
        Ok(GeometryDocument {
            content,
            output_filename: self.params.output_filename.clone(),
        })
    }

    fn write(&self, document: GeometryDocument) -> Result<String> {
        tracing::debug!(
            "Writing document ({} bytes) to {}",
            document.content.len(),
            document.output_filename
        );
        self.storage
            .write_file(&document.output_filename, document.content.as_bytes())?;
        Ok(document.output_filename)
    }
}
