use crate::utils::error::PortfolioError;
use std::fmt;
use std::str::FromStr;

/// The two built-in portfolio flavors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateKind {
    Basic,
    Fancy,
}

impl TemplateKind {
    pub const ALL: [TemplateKind; 2] = [TemplateKind::Basic, TemplateKind::Fancy];

    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateKind::Basic => "basic",
            TemplateKind::Fancy => "fancy",
        }
    }

    /// File looked up when the caller asks for an external template of this
    /// flavor without naming one.
    pub fn default_template_file(&self) -> &'static str {
        match self {
            TemplateKind::Basic => "basic_portfolio_template.html",
            TemplateKind::Fancy => "detailed_portfolio_template.html",
        }
    }
}

impl FromStr for TemplateKind {
    type Err = PortfolioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "basic" => Ok(TemplateKind::Basic),
            "fancy" => Ok(TemplateKind::Fancy),
            other => Err(PortfolioError::InvalidSpec {
                mode: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A caller-supplied template. `body` is `None` when the caller could not
/// read it from `location`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalTemplate {
    pub location: String,
    pub body: Option<String>,
}

impl ExternalTemplate {
    pub fn loaded(location: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            body: Some(body.into()),
        }
    }

    pub fn missing(location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            body: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateSpec {
    Layout(TemplateKind),
    External(ExternalTemplate),
}

impl TemplateSpec {
    pub fn basic() -> Self {
        TemplateSpec::Layout(TemplateKind::Basic)
    }

    pub fn fancy() -> Self {
        TemplateSpec::Layout(TemplateKind::Fancy)
    }

    /// Looks up a built-in layout by its tag.
    pub fn from_mode(mode: &str) -> Result<Self, PortfolioError> {
        mode.parse().map(TemplateSpec::Layout)
    }

    pub fn describe(&self) -> String {
        match self {
            TemplateSpec::Layout(kind) => format!("{} layout", kind),
            TemplateSpec::External(template) => format!("template file {}", template.location),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    pub escape_html: bool,
}
