use crate::core::{ConfigProvider, ProfileModel, ProjectEntry, ProjectFragment};
use crate::utils::error::{PortfolioError, Result};
use crate::utils::validation::{
    validate_file_name, validate_link, validate_non_empty_string, validate_path,
    validate_template_mode, Validate,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub document: Option<DocumentConfig>,
    pub profile: ProfileConfig,
    #[serde(default)]
    pub projects: Vec<ProjectEntry>,
    #[serde(default)]
    pub template: TemplateConfig,
    pub output: OutputConfig,
    pub monitoring: Option<MonitoringConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentConfig {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileConfig {
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    pub address: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateConfig {
    #[serde(default = "default_mode")]
    pub mode: String,
    /// 範本檔路徑；相對路徑以設定檔所在目錄為準
    pub file: Option<String>,
    /// 未指定 `file` 時，改讀該模式的預設範本檔
    pub use_file: Option<bool>,
}

impl Default for TemplateConfig {
    fn default() -> Self {
        Self {
            mode: default_mode(),
            file: None,
            use_file: None,
        }
    }
}

fn default_mode() -> String {
    "basic".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub path: String,
    pub filename: Option<String>,
    pub escape_html: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitoringConfig {
    pub enabled: bool,
    pub log_format: Option<String>,
}

impl TomlConfig {
    /// 從檔案載入設定；`.json` 走 JSON，其餘一律當作 TOML
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;

        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        if is_json {
            Self::from_json_str(&content)
        } else {
            Self::from_toml_str(&content)
        }
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| PortfolioError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);
        Ok(serde_json::from_str(&processed_content)?)
    }

    /// 替換環境變數 (例如 ${PORTFOLIO_EMAIL})；未設定的變數原樣保留
    fn substitute_env_vars(content: &str) -> String {
        use regex::Regex;
        use std::sync::LazyLock;

        static ENV_RE: LazyLock<Regex> =
            LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("env pattern is valid"));

        ENV_RE
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn validate_config(&self) -> Result<()> {
        validate_non_empty_string("profile.name", &self.profile.name)?;
        validate_path("output.path", &self.output.path)?;
        validate_template_mode("template.mode", &self.template.mode)?;

        if let Some(file) = &self.template.file {
            validate_path("template.file", file)?;
        }
        if let Some(filename) = &self.output.filename {
            validate_file_name("output.filename", filename)?;
        }

        for project in &self.projects {
            validate_link("projects.link", project.link())?;
        }

        Ok(())
    }

    pub fn monitoring_enabled(&self) -> bool {
        self.monitoring.as_ref().map(|m| m.enabled).unwrap_or(false)
    }

    pub fn json_logs(&self) -> bool {
        self.monitoring
            .as_ref()
            .and_then(|m| m.log_format.as_deref())
            .is_some_and(|format| format.eq_ignore_ascii_case("json"))
    }

    pub fn document_name(&self) -> &str {
        self.document
            .as_ref()
            .map(|d| d.name.as_str())
            .unwrap_or("portfolio")
    }
}

impl ConfigProvider for TomlConfig {
    fn profile(&self) -> Result<ProfileModel> {
        let mut builder =
            ProfileModel::builder(&self.profile.name, &self.profile.email, &self.profile.phone)
                .extend_projects(self.projects.iter().cloned());
        if let Some(address) = &self.profile.address {
            builder = builder.address(address);
        }
        Ok(builder.build())
    }

    fn output_path(&self) -> &str {
        &self.output.path
    }

    fn output_name(&self) -> Option<&str> {
        self.output.filename.as_deref()
    }

    fn template_mode(&self) -> &str {
        &self.template.mode
    }

    fn template_file(&self) -> Option<&str> {
        self.template.file.as_deref()
    }

    fn use_template_file(&self) -> bool {
        self.template.use_file.unwrap_or(false)
    }

    fn escape_html(&self) -> bool {
        self.output.escape_html.unwrap_or(false)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
