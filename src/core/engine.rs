use crate::core::placeholder::{placeholders_in, Placeholder};
use crate::core::render::DocumentRenderer;
use crate::core::Pipeline;
use crate::domain::model::ProfileModel;
use crate::domain::template::{RenderOptions, TemplateSpec};
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;

pub struct PortfolioEngine<P: Pipeline> {
    pipeline: P,
    monitor: SystemMonitor,
}

impl<P: Pipeline> PortfolioEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self::new_with_monitoring(pipeline, false)
    }

    pub fn new_with_monitoring(pipeline: P, monitor_enabled: bool) -> Self {
        Self {
            pipeline,
            monitor: SystemMonitor::new(monitor_enabled),
        }
    }

    /// Collects, renders and publishes. Nothing is written when rendering
    /// fails. Returns the published location.
    pub async fn run(&self) -> Result<String> {
        let (profile, document) = self.render_document().await?;

        tracing::info!("Publishing document...");
        let output_path = self.pipeline.publish(&profile, document).await?;
        self.monitor.log_stats("Publish");

        tracing::info!("Portfolio saved to: {}", output_path);
        Ok(output_path)
    }

    /// Everything `run` does except publishing.
    pub async fn preview(&self) -> Result<String> {
        let (_, document) = self.render_document().await?;
        Ok(document)
    }

    async fn render_document(&self) -> Result<(ProfileModel, String)> {
        tracing::info!("Collecting profile...");
        let profile = self.pipeline.collect().await?;
        tracing::info!(
            "Collected profile for '{}' with {} projects",
            profile.name(),
            profile.projects().len()
        );
        self.monitor.log_stats("Collect");

        tracing::info!("Resolving template...");
        let spec = self.pipeline.resolve_template().await?;
        tracing::info!("Using {}", spec.describe());
        inspect_template(&spec, &profile);

        let renderer = DocumentRenderer::new(RenderOptions {
            escape_html: self.pipeline.escape_html(),
        });
        let document = renderer.render(&profile, &spec)?;
        tracing::info!("Rendered {} bytes", document.len());
        self.monitor.log_stats("Render");

        Ok((profile, document))
    }
}

fn inspect_template(spec: &TemplateSpec, profile: &ProfileModel) {
    let TemplateSpec::External(template) = spec else {
        return;
    };
    let Some(body) = template.body.as_deref() else {
        return;
    };

    let found = placeholders_in(body);
    if found.is_empty() {
        tracing::warn!(
            "Template {} contains no placeholders; output will match the template verbatim",
            template.location
        );
        return;
    }

    let uses_project = found.iter().any(|p| {
        matches!(
            p,
            Placeholder::ProjectTitle | Placeholder::ProjectDescription | Placeholder::ProjectLink
        )
    });
    if uses_project && profile.projects().len() > 1 {
        tracing::debug!(
            "Template {} shows one project; {} later projects are not rendered",
            template.location,
            profile.projects().len() - 1
        );
    }
}
