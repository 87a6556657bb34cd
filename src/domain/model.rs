use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Contact details and projects for one generated portfolio.
///
/// Built once through [`ProfileBuilder`]; there is no way to change a profile
/// afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileModel {
    name: String,
    email: String,
    phone: String,
    address: Option<String>,
    projects: Vec<ProjectEntry>,
}

impl ProfileModel {
    pub fn builder(
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
    ) -> ProfileBuilder {
        ProfileBuilder::new(name, email, phone)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }

    pub fn projects(&self) -> &[ProjectEntry] {
        &self.projects
    }
}

#[derive(Debug, Clone, Default)]
pub struct ProfileBuilder {
    name: String,
    email: String,
    phone: String,
    address: Option<String>,
    projects: Vec<ProjectEntry>,
}

impl ProfileBuilder {
    pub fn new(name: impl Into<String>, email: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
            address: None,
            projects: Vec::new(),
        }
    }

    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    /// Appends one project after the ones already added.
    pub fn add_project(mut self, project: impl Into<ProjectEntry>) -> Self {
        self.projects.push(project.into());
        self
    }

    pub fn extend_projects<I>(mut self, projects: I) -> Self
    where
        I: IntoIterator<Item = ProjectEntry>,
    {
        self.projects.extend(projects);
        self
    }

    pub fn build(self) -> ProfileModel {
        ProfileModel {
            name: self.name,
            email: self.email,
            phone: self.phone,
            address: self.address,
            projects: self.projects,
        }
    }
}

/// Encodes user-supplied values on their way into markup.
///
/// With escaping off, values pass through untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TextEncoder {
    escape: bool,
}

impl TextEncoder {
    pub fn new(escape: bool) -> Self {
        Self { escape }
    }

    pub fn text<'a>(&self, value: &'a str) -> Cow<'a, str> {
        if self.escape {
            html_escape::encode_text(value)
        } else {
            Cow::Borrowed(value)
        }
    }

    pub fn attribute<'a>(&self, value: &'a str) -> Cow<'a, str> {
        if self.escape {
            html_escape::encode_double_quoted_attribute(value)
        } else {
            Cow::Borrowed(value)
        }
    }
}

/// Shared contract of every project shape: the three substitutable fields
/// and a displayable HTML fragment for the literal layouts.
pub trait ProjectFragment {
    fn title(&self) -> &str;

    fn description(&self) -> &str {
        ""
    }

    fn link(&self) -> &str {
        ""
    }

    fn write_fragment(&self, out: &mut String, encoder: TextEncoder);
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectLabel(pub String);

impl ProjectFragment for ProjectLabel {
    fn title(&self) -> &str {
        &self.0
    }

    fn write_fragment(&self, out: &mut String, encoder: TextEncoder) {
        out.push_str("<li class=\"project\">");
        out.push_str(&encoder.text(&self.0));
        out.push_str("</li>");
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectDetail {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub link: String,
}

impl ProjectFragment for ProjectDetail {
    fn title(&self) -> &str {
        &self.title
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn link(&self) -> &str {
        &self.link
    }

    fn write_fragment(&self, out: &mut String, encoder: TextEncoder) {
        out.push_str("<li class=\"project project-detail\"><h3>");
        out.push_str(&encoder.text(&self.title));
        out.push_str("</h3>");
        if !self.description.is_empty() {
            out.push_str("<p>");
            out.push_str(&encoder.text(&self.description));
            out.push_str("</p>");
        }
        if !self.link.is_empty() {
            out.push_str("<a href=\"");
            out.push_str(&encoder.attribute(&self.link));
            out.push_str("\">");
            out.push_str(&encoder.text(&self.link));
            out.push_str("</a>");
        }
        out.push_str("</li>");
    }
}

/// A project in either of its two accepted shapes.
///
/// Deserializes from a bare string (label) or a table with `title`,
/// `description` and `link`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProjectEntry {
    Label(ProjectLabel),
    Detailed(ProjectDetail),
}

impl ProjectEntry {
    pub fn label(label: impl Into<String>) -> Self {
        ProjectEntry::Label(ProjectLabel(label.into()))
    }

    pub fn detailed(
        title: impl Into<String>,
        description: impl Into<String>,
        link: impl Into<String>,
    ) -> Self {
        ProjectEntry::Detailed(ProjectDetail {
            title: title.into(),
            description: description.into(),
            link: link.into(),
        })
    }

    fn as_fragment(&self) -> &dyn ProjectFragment {
        match self {
            ProjectEntry::Label(label) => label,
            ProjectEntry::Detailed(detail) => detail,
        }
    }
}

impl ProjectFragment for ProjectEntry {
    fn title(&self) -> &str {
        self.as_fragment().title()
    }

    fn description(&self) -> &str {
        self.as_fragment().description()
    }

    fn link(&self) -> &str {
        self.as_fragment().link()
    }

    fn write_fragment(&self, out: &mut String, encoder: TextEncoder) {
        self.as_fragment().write_fragment(out, encoder)
    }
}

impl From<&str> for ProjectEntry {
    fn from(label: &str) -> Self {
        ProjectEntry::label(label)
    }
}

impl From<String> for ProjectEntry {
    fn from(label: String) -> Self {
        ProjectEntry::label(label)
    }
}

impl From<ProjectDetail> for ProjectEntry {
    fn from(detail: ProjectDetail) -> Self {
        ProjectEntry::Detailed(detail)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_preserves_project_order_and_duplicates() {
        let profile = ProfileModel::builder("Ada", "ada@example.com", "555-0100")
            .add_project("Engine")
            .add_project("Notes")
            .add_project("Engine")
            .build();

        let titles: Vec<&str> = profile.projects().iter().map(|p| p.title()).collect();
        assert_eq!(titles, vec!["Engine", "Notes", "Engine"]);
    }

    #[test]
    fn test_builder_accepts_empty_fields() {
        let profile = ProfileBuilder::new("", "", "").build();
        assert_eq!(profile.name(), "");
        assert!(profile.address().is_none());
        assert!(profile.projects().is_empty());
    }

    #[test]
    fn test_label_fragment_fields() {
        let entry = ProjectEntry::label("Difference Engine");
        assert_eq!(entry.title(), "Difference Engine");
        assert_eq!(entry.description(), "");
        assert_eq!(entry.link(), "");

        let mut out = String::new();
        entry.write_fragment(&mut out, TextEncoder::default());
        assert_eq!(out, "<li class=\"project\">Difference Engine</li>");
    }

    #[test]
    fn test_detailed_fragment_skips_empty_parts() {
        let entry = ProjectEntry::detailed("Notes", "", "");
        let mut out = String::new();
        entry.write_fragment(&mut out, TextEncoder::default());
        assert_eq!(
            out,
            "<li class=\"project project-detail\"><h3>Notes</h3></li>"
        );
    }

    #[test]
    fn test_encoder_escapes_only_when_enabled() {
        assert_eq!(TextEncoder::new(false).text("<b>"), "<b>");
        assert_eq!(TextEncoder::new(true).text("<b>"), "&lt;b&gt;");
        assert_eq!(
            TextEncoder::new(true).attribute("a\"b"),
            "a&quot;b"
        );
    }

    #[test]
    fn test_project_entry_deserializes_both_shapes() {
        let entries: Vec<ProjectEntry> = serde_json::from_str(
            r#"["Plain", {"title": "Rich", "link": "https://example.com"}]"#,
        )
        .unwrap();

        assert_eq!(entries[0], ProjectEntry::label("Plain"));
        assert_eq!(
            entries[1],
            ProjectEntry::detailed("Rich", "", "https://example.com")
        );
    }
}
