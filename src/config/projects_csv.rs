use crate::core::ProjectEntry;
use crate::utils::error::Result;
use serde::Deserialize;
use std::io::Read;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct ProjectRow {
    title: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    link: String,
}

impl From<ProjectRow> for ProjectEntry {
    fn from(row: ProjectRow) -> Self {
        if row.description.is_empty() && row.link.is_empty() {
            ProjectEntry::label(row.title)
        } else {
            ProjectEntry::detailed(row.title, row.description, row.link)
        }
    }
}

pub fn read_projects_csv<P: AsRef<Path>>(path: P) -> Result<Vec<ProjectEntry>> {
    let file = std::fs::File::open(path)?;
    parse_projects_csv(file)
}

/// Rows come back in file order. A row with only a title becomes a plain label.
pub fn parse_projects_csv<R: Read>(reader: R) -> Result<Vec<ProjectEntry>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);

    let mut entries = Vec::new();
    for row in csv_reader.deserialize::<ProjectRow>() {
        entries.push(row?.into());
    }
    Ok(entries)
}
