use portfolio_gen::core::output::{load_template, write_document};
use portfolio_gen::{
    render, FilePipeline, LocalStorage, PortfolioEngine, PortfolioError, ProfileModel,
    TemplateSpec, TomlConfig,
};
use tempfile::TempDir;

fn write_config(dir: &TempDir, body: &str) -> TomlConfig {
    let config_path = dir.path().join("portfolio.toml");
    std::fs::write(&config_path, body).unwrap();
    TomlConfig::from_file(&config_path).unwrap()
}

fn config_toml(output_path: &str, template_section: &str) -> String {
    format!(
        r#"
[profile]
name = "Ada Lovelace"
email = "ada@example.com"
phone = "555-0100"
address = "1 Analytical Engine Way"

[[projects]]
title = "Compiler for the Analytical Engine"

[[projects]]
title = "Note G"
description = "Bernoulli numbers"
link = "https://example.com/note-g"

{}

[output]
path = "{}"
"#,
        template_section, output_path
    )
}

#[tokio::test]
async fn test_end_to_end_basic_layout() {
    let temp_dir = TempDir::new().unwrap();
    let output_dir = temp_dir.path().join("site");
    let output_path = output_dir.to_str().unwrap().replace('\\', "/");

    let config = write_config(&temp_dir, &config_toml(&output_path, "[template]\nmode = \"basic\""));
    let storage = LocalStorage::new(output_dir.clone());
    let pipeline = FilePipeline::new(storage, LocalStorage::new(temp_dir.path()), config);
    let engine = PortfolioEngine::new(pipeline);

    let result = engine.run().await.unwrap();

    assert!(result.ends_with("ada-lovelace.html"));
    let html = std::fs::read_to_string(output_dir.join("ada-lovelace.html")).unwrap();
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("Ada Lovelace"));
    assert!(html.contains("<h3>Note G</h3>"));
    assert!(html.contains("<a href=\"https://example.com/note-g\">"));
}

#[tokio::test]
async fn test_end_to_end_external_template_from_disk() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(
        temp_dir.path().join("card.html"),
        "<html><body><h1>{name}</h1><p>{email} / {phone}</p>\
         <h2>{projectTitle}</h2><p>{projectDescription}</p></body></html>",
    )
    .unwrap();
    let output_dir = temp_dir.path().join("site");
    let output_path = output_dir.to_str().unwrap().replace('\\', "/");

    let config = write_config(
        &temp_dir,
        &config_toml(&output_path, "[template]\nmode = \"fancy\"\nfile = \"card.html\""),
    );
    let pipeline = FilePipeline::new(
        LocalStorage::new(output_dir.clone()),
        LocalStorage::new(temp_dir.path()),
        config,
    );

    PortfolioEngine::new(pipeline).run().await.unwrap();

    let html = std::fs::read_to_string(output_dir.join("ada-lovelace.html")).unwrap();
    assert_eq!(
        html,
        "<html><body><h1>Ada Lovelace</h1><p>ada@example.com / 555-0100</p>\
         <h2>Compiler for the Analytical Engine</h2><p></p></body></html>"
    );
}

#[tokio::test]
async fn test_missing_template_produces_no_file() {
    let temp_dir = TempDir::new().unwrap();
    let output_dir = temp_dir.path().join("site");
    let output_path = output_dir.to_str().unwrap().replace('\\', "/");

    let config = write_config(
        &temp_dir,
        &config_toml(&output_path, "[template]\nfile = \"nowhere/template.html\""),
    );
    let pipeline = FilePipeline::new(
        LocalStorage::new(output_dir.clone()),
        LocalStorage::new(temp_dir.path()),
        config,
    );

    let err = PortfolioEngine::new(pipeline).run().await.unwrap_err();

    assert!(matches!(err, PortfolioError::TemplateUnavailable { .. }));
    assert!(!output_dir.exists());
}

#[tokio::test]
async fn test_default_template_file_for_mode() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(
        temp_dir.path().join("basic_portfolio_template.html"),
        "<html><body>{name}</body></html>",
    )
    .unwrap();
    let output_dir = temp_dir.path().join("site");
    let output_path = output_dir.to_str().unwrap().replace('\\', "/");

    let mut config = write_config(
        &temp_dir,
        &config_toml(&output_path, "[template]\nuse_file = true"),
    );
    config.output.filename = Some("index.html".to_string());
    let pipeline = FilePipeline::new(
        LocalStorage::new(output_dir.clone()),
        LocalStorage::new(temp_dir.path()),
        config,
    );

    PortfolioEngine::new(pipeline).run().await.unwrap();

    let html = std::fs::read_to_string(output_dir.join("index.html")).unwrap();
    assert_eq!(html, "<html><body>Ada Lovelace</body></html>");
}

#[tokio::test]
async fn test_preview_writes_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let output_dir = temp_dir.path().join("site");
    let output_path = output_dir.to_str().unwrap().replace('\\', "/");

    let config = write_config(&temp_dir, &config_toml(&output_path, ""));
    let pipeline = FilePipeline::new(
        LocalStorage::new(output_dir.clone()),
        LocalStorage::new(temp_dir.path()),
        config,
    );

    let html = PortfolioEngine::new(pipeline).preview().await.unwrap();

    assert!(html.contains("Ada Lovelace"));
    assert!(!output_dir.exists());
}

/// The core hands back a string; callers fan it out however they like.
#[tokio::test]
async fn test_rendered_document_feeds_several_consumers() {
    let temp_dir = TempDir::new().unwrap();
    let profile = ProfileModel::builder("Grace Hopper", "grace@example.com", "555-0199")
        .add_project("COBOL")
        .build();
    let html = render(&profile, &TemplateSpec::fancy()).unwrap();

    let primary = LocalStorage::new(temp_dir.path().join("a"));
    let mirror = LocalStorage::new(temp_dir.path().join("b"));
    let mut seen = Vec::new();
    for storage in [&primary, &mirror] {
        write_document(storage, "grace.html", &html).await.unwrap();
        seen.push(std::fs::read_to_string(storage.base_path().join("grace.html")).unwrap());
    }

    assert!(seen.iter().all(|doc| doc == &html));
}

#[tokio::test]
async fn test_load_template_missing_on_disk() {
    let temp_dir = TempDir::new().unwrap();
    let storage = LocalStorage::new(temp_dir.path());

    let spec = load_template(&storage, "absent.html").await;
    let err = render(&ProfileModel::builder("A", "", "").build(), &spec).unwrap_err();

    assert!(matches!(
        err,
        PortfolioError::TemplateUnavailable { ref location } if location == "absent.html"
    ));
}
