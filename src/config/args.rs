use crate::config::projects_csv;
use crate::core::{ConfigProvider, ProfileModel, ProjectEntry, ProjectFragment};
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_file_name, validate_link, validate_non_empty_string, validate_path,
    validate_template_mode, Validate,
};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "portfolio-gen")]
#[command(about = "Generate a single-page HTML portfolio from contact details and projects")]
pub struct CliConfig {
    #[arg(long)]
    pub name: String,

    #[arg(long, default_value = "")]
    pub email: String,

    #[arg(long, default_value = "")]
    pub phone: String,

    #[arg(long)]
    pub address: Option<String>,

    /// A project label, or "title|description|link" for a detailed entry.
    /// Repeat for more projects; order is kept.
    #[arg(long = "project")]
    pub projects: Vec<String>,

    /// CSV file with a title,description,link header; rows follow --project entries.
    #[arg(long)]
    pub projects_csv: Option<String>,

    #[arg(long, default_value = "basic", help = "Template mode: basic or fancy")]
    pub template: String,

    #[arg(long, help = "Render through this HTML template instead of the built-in layout")]
    pub template_file: Option<String>,

    #[arg(long, help = "Read the mode's default template file from the working directory")]
    pub use_template_file: bool,

    #[arg(long, default_value = "./output")]
    pub output_path: String,

    #[arg(long, help = "Output file name (defaults to the profile name)")]
    pub output_name: Option<String>,

    #[arg(long, help = "HTML-escape profile values")]
    pub escape_html: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Log per-phase process statistics")]
    pub monitor: bool,

    #[arg(long, help = "Emit logs as JSON lines on stderr")]
    pub log_json: bool,
}

/// `title|description|link`; anything without a `|` is a plain label.
pub fn parse_project_arg(raw: &str) -> ProjectEntry {
    if !raw.contains('|') {
        return ProjectEntry::label(raw.trim());
    }

    let mut parts = raw.splitn(3, '|').map(str::trim);
    let title = parts.next().unwrap_or_default();
    let description = parts.next().unwrap_or_default();
    let link = parts.next().unwrap_or_default();
    ProjectEntry::detailed(title, description, link)
}

impl CliConfig {
    fn project_entries(&self) -> Result<Vec<ProjectEntry>> {
        let mut entries: Vec<ProjectEntry> =
            self.projects.iter().map(|p| parse_project_arg(p)).collect();

        if let Some(csv_path) = &self.projects_csv {
            let from_csv = projects_csv::read_projects_csv(csv_path)?;
            tracing::debug!("Read {} projects from {}", from_csv.len(), csv_path);
            entries.extend(from_csv);
        }

        Ok(entries)
    }
}

impl ConfigProvider for CliConfig {
    fn profile(&self) -> Result<ProfileModel> {
        let mut builder = ProfileModel::builder(&self.name, &self.email, &self.phone)
            .extend_projects(self.project_entries()?);
        if let Some(address) = &self.address {
            builder = builder.address(address);
        }
        Ok(builder.build())
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn output_name(&self) -> Option<&str> {
        self.output_name.as_deref()
    }

    fn template_mode(&self) -> &str {
        &self.template
    }

    fn template_file(&self) -> Option<&str> {
        self.template_file.as_deref()
    }

    fn use_template_file(&self) -> bool {
        self.use_template_file
    }

    fn escape_html(&self) -> bool {
        self.escape_html
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("name", &self.name)?;
        validate_path("output_path", &self.output_path)?;
        validate_template_mode("template", &self.template)?;

        if let Some(file) = &self.template_file {
            validate_path("template_file", file)?;
        }
        if let Some(name) = &self.output_name {
            validate_file_name("output_name", name)?;
        }
        for raw in &self.projects {
            let entry = parse_project_arg(raw);
            validate_link("project", entry.link())?;
        }

        // CSV rows end up in the same project list, so their links get the same check.
        if let Some(csv_path) = &self.projects_csv {
            validate_path("projects_csv", csv_path)?;
            for entry in projects_csv::read_projects_csv(csv_path)? {
                validate_link("projects_csv", entry.link())?;
            }
        }

        Ok(())
    }
}
