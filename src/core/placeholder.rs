use crate::domain::model::{ProfileModel, ProjectFragment, TextEncoder};
use regex::{Captures, Regex};
use std::sync::LazyLock;

static PLACEHOLDER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{(name|email|phone|projectTitle|projectDescription|projectLink)\}")
        .expect("placeholder pattern is valid")
});

/// The tokens an external template may contain. Matching is exact and
/// case-sensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Placeholder {
    Name,
    Email,
    Phone,
    ProjectTitle,
    ProjectDescription,
    ProjectLink,
}

impl Placeholder {
    pub const ALL: [Placeholder; 6] = [
        Placeholder::Name,
        Placeholder::Email,
        Placeholder::Phone,
        Placeholder::ProjectTitle,
        Placeholder::ProjectDescription,
        Placeholder::ProjectLink,
    ];

    pub fn token(&self) -> &'static str {
        match self {
            Placeholder::Name => "{name}",
            Placeholder::Email => "{email}",
            Placeholder::Phone => "{phone}",
            Placeholder::ProjectTitle => "{projectTitle}",
            Placeholder::ProjectDescription => "{projectDescription}",
            Placeholder::ProjectLink => "{projectLink}",
        }
    }

    fn from_key(key: &str) -> Option<Self> {
        match key {
            "name" => Some(Placeholder::Name),
            "email" => Some(Placeholder::Email),
            "phone" => Some(Placeholder::Phone),
            "projectTitle" => Some(Placeholder::ProjectTitle),
            "projectDescription" => Some(Placeholder::ProjectDescription),
            "projectLink" => Some(Placeholder::ProjectLink),
            _ => None,
        }
    }

    /// Project tokens read from the first project only; an empty project
    /// list yields empty strings.
    fn value<'a>(&self, profile: &'a ProfileModel) -> &'a str {
        let first = profile.projects().first();
        match self {
            Placeholder::Name => profile.name(),
            Placeholder::Email => profile.email(),
            Placeholder::Phone => profile.phone(),
            Placeholder::ProjectTitle => first.map(|p| p.title()).unwrap_or(""),
            Placeholder::ProjectDescription => first.map(|p| p.description()).unwrap_or(""),
            Placeholder::ProjectLink => first.map(|p| p.link()).unwrap_or(""),
        }
    }
}

/// Distinct placeholders found in `template`, in order of first appearance.
pub fn placeholders_in(template: &str) -> Vec<Placeholder> {
    let mut found = Vec::new();
    for caps in PLACEHOLDER_RE.captures_iter(template) {
        if let Some(placeholder) = Placeholder::from_key(&caps[1]) {
            if !found.contains(&placeholder) {
                found.push(placeholder);
            }
        }
    }
    found
}

/// Replaces every placeholder occurrence in one scan. Inserted values are
/// never rescanned, so a value that itself looks like a token stays as is.
pub fn substitute(template: &str, profile: &ProfileModel, encoder: TextEncoder) -> String {
    PLACEHOLDER_RE
        .replace_all(template, |caps: &Captures| {
            let Some(placeholder) = Placeholder::from_key(&caps[1]) else {
                return caps[0].to_string();
            };
            let value = placeholder.value(profile);
            match placeholder {
                Placeholder::ProjectLink => encoder.attribute(value).into_owned(),
                _ => encoder.text(value).into_owned(),
            }
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::ProjectEntry;

    fn profile() -> ProfileModel {
        ProfileModel::builder("Ada", "ada@example.com", "555-0100")
            .add_project(ProjectEntry::detailed(
                "Engine",
                "Mechanical computer",
                "https://example.com/engine",
            ))
            .add_project("Second")
            .build()
    }

    #[test]
    fn test_substitutes_every_occurrence() {
        let template = "{name}/{name} {email}{email} {phone} {phone}";
        let out = substitute(template, &profile(), TextEncoder::default());
        assert_eq!(
            out,
            "Ada/Ada ada@example.comada@example.com 555-0100 555-0100"
        );
    }

    #[test]
    fn test_project_tokens_use_first_project() {
        let template = "{projectTitle}|{projectDescription}|{projectLink}";
        let out = substitute(template, &profile(), TextEncoder::default());
        assert_eq!(out, "Engine|Mechanical computer|https://example.com/engine");
    }

    #[test]
    fn test_project_tokens_empty_without_projects() {
        let profile = ProfileModel::builder("Ada", "a@b.c", "1").build();
        let out = substitute("[{projectTitle}][{projectLink}]", &profile, TextEncoder::default());
        assert_eq!(out, "[][]");
    }

    #[test]
    fn test_unknown_and_wrong_case_tokens_untouched() {
        let out = substitute("{Name} {address} {name}", &profile(), TextEncoder::default());
        assert_eq!(out, "{Name} {address} Ada");
    }

    #[test]
    fn test_values_are_not_rescanned() {
        let profile = ProfileModel::builder("{email}", "ada@example.com", "1").build();
        let out = substitute("{name} {email}", &profile, TextEncoder::default());
        assert_eq!(out, "{email} ada@example.com");
    }

    #[test]
    fn test_placeholders_in_lists_distinct_tokens_in_order() {
        let found = placeholders_in("{phone} {name} {phone} {nope}");
        assert_eq!(found, vec![Placeholder::Phone, Placeholder::Name]);
        assert!(placeholders_in("<html></html>").is_empty());
    }
}
