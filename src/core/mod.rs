pub mod engine;
pub mod output;
pub mod placeholder;
pub mod render;
pub mod style;

pub use crate::app::pipelines::file_pipeline::FilePipeline;
pub use crate::domain::model::{ProfileBuilder, ProfileModel, ProjectEntry, ProjectFragment};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::domain::template::{ExternalTemplate, RenderOptions, TemplateKind, TemplateSpec};
pub use crate::utils::error::Result;
