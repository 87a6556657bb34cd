use crate::core::output::{load_template, output_file_name, write_document};
use crate::core::{ConfigProvider, Pipeline, ProfileModel, Storage, TemplateKind, TemplateSpec};
use crate::utils::error::Result;
use std::path::Path;

/// Reads templates from one storage and writes the finished portfolio to
/// another.
pub struct FilePipeline<S: Storage, C: ConfigProvider> {
    pub(crate) storage: S,
    pub(crate) templates: S,
    pub(crate) config: C,
}

impl<S: Storage, C: ConfigProvider> FilePipeline<S, C> {
    pub fn new(storage: S, templates: S, config: C) -> Self {
        Self {
            storage,
            templates,
            config,
        }
    }

    fn template_location(&self, kind: TemplateKind) -> Option<String> {
        match self.config.template_file() {
            Some(file) => Some(file.to_string()),
            None if self.config.use_template_file() => {
                Some(kind.default_template_file().to_string())
            }
            None => None,
        }
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for FilePipeline<S, C> {
    async fn collect(&self) -> Result<ProfileModel> {
        self.config.profile()
    }

    async fn resolve_template(&self) -> Result<TemplateSpec> {
        let kind: TemplateKind = self.config.template_mode().parse()?;
        tracing::debug!("Template mode: {}", kind);

        match self.template_location(kind) {
            Some(location) => Ok(load_template(&self.templates, &location).await),
            None => Ok(TemplateSpec::Layout(kind)),
        }
    }

    async fn publish(&self, profile: &ProfileModel, document: String) -> Result<String> {
        let file_name = output_file_name(self.config.output_name(), profile);
        write_document(&self.storage, &file_name, &document).await?;

        let output_path = Path::new(self.config.output_path()).join(&file_name);
        Ok(output_path.to_string_lossy().into_owned())
    }

    fn escape_html(&self) -> bool {
        self.config.escape_html()
    }
}
