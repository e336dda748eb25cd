pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::storage::LocalStorage;
pub use config::{toml_config::TomlConfig, CliConfig};
pub use core::{engine::ModelEngine, pipeline::ScadPipeline};
pub use domain::model::{GeometryDocument, ModelParams, ModuleGrid};
pub use utils::error::{ModelError, Result};
