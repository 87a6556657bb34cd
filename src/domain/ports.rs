use crate::domain::model::ProfileModel;
use crate::domain::template::TemplateSpec;
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    /// Builds the profile this configuration describes.
    fn profile(&self) -> Result<ProfileModel>;
    fn output_path(&self) -> &str;
    fn output_name(&self) -> Option<&str>;
    fn template_mode(&self) -> &str;
    fn template_file(&self) -> Option<&str>;
    /// Read the mode's default template file when no explicit one is set.
    fn use_template_file(&self) -> bool;
    fn escape_html(&self) -> bool;
}

/// The caller side of a generation run. Rendering itself sits between
/// `resolve_template` and `publish` and is not part of this port.
#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn collect(&self) -> Result<ProfileModel>;
    async fn resolve_template(&self) -> Result<TemplateSpec>;
    async fn publish(&self, profile: &ProfileModel, document: String) -> Result<String>;

    fn escape_html(&self) -> bool {
        false
    }
}
