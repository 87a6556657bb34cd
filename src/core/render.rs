use crate::core::placeholder;
use crate::core::style::{style_for, StyleSheet};
use crate::domain::model::{ProfileModel, ProjectFragment, TextEncoder};
use crate::domain::template::{ExternalTemplate, RenderOptions, TemplateSpec};
use crate::utils::error::{PortfolioError, Result};

/// Turns a profile into a finished HTML document.
///
/// Rendering is a pure function of the profile, the template selection and
/// the options: no I/O, no clock, no randomness. A renderer can be shared
/// freely between threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentRenderer {
    options: RenderOptions,
}

impl DocumentRenderer {
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> RenderOptions {
        self.options
    }

    pub fn render(&self, profile: &ProfileModel, spec: &TemplateSpec) -> Result<String> {
        let encoder = TextEncoder::new(self.options.escape_html);
        match spec {
            TemplateSpec::Layout(kind) => Ok(render_layout(profile, style_for(*kind), encoder)),
            TemplateSpec::External(template) => render_external(profile, template, encoder),
        }
    }
}

/// Renders with default options (no escaping).
pub fn render(profile: &ProfileModel, spec: &TemplateSpec) -> Result<String> {
    DocumentRenderer::default().render(profile, spec)
}

pub fn render_with(
    profile: &ProfileModel,
    spec: &TemplateSpec,
    options: RenderOptions,
) -> Result<String> {
    DocumentRenderer::new(options).render(profile, spec)
}

fn render_layout(profile: &ProfileModel, style: &StyleSheet, encoder: TextEncoder) -> String {
    let mut html = String::with_capacity(2048 + profile.projects().len() * 128);

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    html.push_str("<title>Portfolio</title>\n<style>\n");
    html.push_str(&style.to_css());
    html.push_str("\n</style>\n</head>\n<body>\n<h1>Portfolio</h1>\n");

    html.push_str("<section class=\"contact\">\n");
    push_field(&mut html, "Name", profile.name(), encoder);
    push_field(&mut html, "Email", profile.email(), encoder);
    push_field(&mut html, "Phone Number", profile.phone(), encoder);
    if let Some(address) = profile.address() {
        push_field(&mut html, "Address", address, encoder);
    }
    html.push_str("</section>\n");

    html.push_str("<h2>Projects</h2>\n<ul class=\"projects\">\n");
    for project in profile.projects() {
        project.write_fragment(&mut html, encoder);
        html.push('\n');
    }
    html.push_str("</ul>\n</body>\n</html>\n");

    html
}

fn push_field(html: &mut String, label: &str, value: &str, encoder: TextEncoder) {
    html.push_str("<p><strong>");
    html.push_str(label);
    html.push_str(":</strong> ");
    html.push_str(&encoder.text(value));
    html.push_str("</p>\n");
}

fn render_external(
    profile: &ProfileModel,
    template: &ExternalTemplate,
    encoder: TextEncoder,
) -> Result<String> {
    let body = template
        .body
        .as_deref()
        .ok_or_else(|| PortfolioError::TemplateUnavailable {
            location: template.location.clone(),
        })?;

    Ok(placeholder::substitute(body, profile, encoder))
}
