use clap::Parser;
use portfolio_gen::core::{ConfigProvider, ProjectFragment};
use portfolio_gen::utils::error::PortfolioError;
use portfolio_gen::utils::{logger, validation::Validate};
use portfolio_gen::{FilePipeline, LocalStorage, PortfolioEngine, TomlConfig};

#[derive(Parser)]
#[command(name = "toml-portfolio")]
#[command(about = "Portfolio generator driven by a TOML (or JSON) profile file")]
struct Args {
    /// Path to the profile file (.toml or .json)
    #[arg(short, long, default_value = "portfolio.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Override monitoring setting from config
    #[arg(long)]
    monitor: Option<bool>,

    /// Override the template mode from config
    #[arg(long)]
    template: Option<String>,

    /// Render and summarize without writing anything
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // 載入設定（日誌格式取決於設定檔，因此先載入）
    let loaded = TomlConfig::from_file(&args.config);
    let json_logs = loaded.as_ref().is_ok_and(|c| c.json_logs());
    if json_logs {
        logger::init_json_logger(args.verbose);
    } else {
        logger::init_cli_logger(args.verbose);
    }

    tracing::info!("📁 Loading configuration from: {}", args.config);

    let mut config = match loaded {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load config file '{}': {}", args.config, e);
            eprintln!("💡 Make sure the file exists and is valid TOML or JSON");
            std::process::exit(1);
        }
    };

    if let Some(mode) = args.template.clone() {
        tracing::info!("🔧 Template mode overridden to: {}", mode);
        config.template.mode = mode;
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    tracing::info!("✅ Configuration loaded and validated successfully");
    display_config_summary(&config, &args);

    let monitor_enabled = args.monitor.unwrap_or_else(|| config.monitoring_enabled());
    let storage = LocalStorage::new(config.output_path().to_string());
    let dry_run = args.dry_run;
    // 範本路徑相對於設定檔所在目錄
    let templates = LocalStorage::beside(&args.config);
    let pipeline = FilePipeline::new(storage, templates, config);
    let engine = PortfolioEngine::new_with_monitoring(pipeline, monitor_enabled);

    if dry_run {
        tracing::info!("🔍 DRY RUN MODE - nothing will be written");
        match engine.preview().await {
            Ok(document) => {
                println!("🔍 Dry run: rendered {} bytes, nothing written", document.len());
            }
            Err(e) => exit_with(e),
        }
        return Ok(());
    }

    match engine.run().await {
        Ok(output_path) => {
            println!("✅ Portfolio generated");
            println!("📁 Saved to: {}", output_path);
        }
        Err(e) => exit_with(e),
    }

    Ok(())
}

fn exit_with(e: PortfolioError) -> ! {
    tracing::error!(
        "❌ Generation failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(e.exit_code());
}

fn display_config_summary(config: &TomlConfig, args: &Args) {
    println!("📋 Configuration Summary:");
    println!("  Document: {}", config.document_name());
    if let Some(description) = config.document.as_ref().and_then(|d| d.description.as_deref()) {
        println!("  Description: {}", description);
    }
    println!("  Name: {}", config.profile.name);
    println!("  Projects: {}", config.projects.len());
    for project in &config.projects {
        println!("    - {}", project.title());
    }
    println!("  Template: {}", config.template_mode());
    if let Some(file) = config.template_file() {
        println!("  Template file: {}", file);
    } else if config.use_template_file() {
        println!("  Template file: default for mode");
    }
    println!("  Output: {}", config.output_path());
    if let Some(filename) = config.output_name() {
        println!("  Filename: {}", filename);
    }
    println!("  Escape HTML: {}", config.escape_html());

    if args.dry_run {
        println!("  🔍 DRY RUN MODE ENABLED");
    }

    println!();
}
