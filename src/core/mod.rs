pub mod engine;
pub mod pipeline;
pub mod scad;

pub use crate::domain::model::{GeometryDocument, ModelParams, ModuleGrid};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
