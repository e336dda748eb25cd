use crate::domain::model::{GeometryDocument, ModelParams, ModuleGrid};
use crate::utils::error::Result;

pub trait Storage {
    fn read_file(&self, path: &str) -> Result<Vec<u8>>;
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
}

pub trait ConfigProvider {
    fn model_params(&self) -> ModelParams;
    fn output_filename(&self) -> &str;
}

/// The three stages of a model run: encode the text into a module grid,
/// emit the geometry document, write it out.
pub trait Pipeline {
    fn encode(&self) -> Result<ModuleGrid>;
    fn emit(&self, grid: &ModuleGrid) -> Result<GeometryDocument>;
    fn write(&self, document: GeometryDocument) -> Result<String>;
}
