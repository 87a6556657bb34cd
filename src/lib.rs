pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::{cli::LocalStorage, toml_config::TomlConfig};
pub use core::{
    engine::PortfolioEngine,
    render::{render, render_with, DocumentRenderer},
    FilePipeline, ProfileBuilder, ProfileModel, ProjectEntry, TemplateKind, TemplateSpec,
};
pub use utils::error::{PortfolioError, Result};
