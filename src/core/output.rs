use crate::domain::model::ProfileModel;
use crate::domain::ports::Storage;
use crate::domain::template::{ExternalTemplate, TemplateSpec};
use crate::utils::error::Result;

const FALLBACK_STEM: &str = "portfolio";

/// Writes a finished document. Stateless: every call names its destination.
pub async fn write_document<S: Storage>(storage: &S, file_name: &str, document: &str) -> Result<()> {
    tracing::debug!("Writing {} bytes to {}", document.len(), file_name);
    storage.write_file(file_name, document.as_bytes()).await
}

/// Reads an external template. A read failure does not error here: the
/// template is marked missing and the renderer reports it as unavailable.
pub async fn load_template<S: Storage>(storage: &S, location: &str) -> TemplateSpec {
    let template = match storage.read_file(location).await {
        Ok(bytes) => match String::from_utf8(bytes) {
            Ok(body) => {
                tracing::debug!("Loaded template {} ({} bytes)", location, body.len());
                ExternalTemplate::loaded(location, body)
            }
            Err(e) => {
                tracing::warn!("Template {} is not valid UTF-8: {}", location, e);
                ExternalTemplate::missing(location)
            }
        },
        Err(e) => {
            tracing::warn!("Could not read template {}: {}", location, e);
            ExternalTemplate::missing(location)
        }
    };
    TemplateSpec::External(template)
}

/// `explicit` wins; otherwise the profile name as a lowercase slug, or
/// `portfolio` when the name has nothing usable.
pub fn output_file_name(explicit: Option<&str>, profile: &ProfileModel) -> String {
    if let Some(name) = explicit.map(str::trim).filter(|n| !n.is_empty()) {
        return if name.ends_with(".html") {
            name.to_string()
        } else {
            format!("{}.html", name)
        };
    }

    let slug = slugify(profile.name());
    let stem = if slug.is_empty() { FALLBACK_STEM } else { &slug };
    format!("{}.html", stem)
}

fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    for ch in name.chars() {
        if ch.is_alphanumeric() {
            slug.extend(ch.to_lowercase());
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    slug.trim_end_matches('-').to_string()
}
