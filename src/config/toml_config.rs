use crate::core::ConfigProvider;
use crate::domain::model::{InputSource, OutputFormat, SortOrder};
use crate::utils::error::{CountError, Result};
use crate::utils::validation::{validate_exclusive, validate_path, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InputConfig {
    pub text: Option<String>,
    pub file: Option<String>,
    pub stdin: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    pub format: Option<OutputFormat>,
    pub sort: Option<SortOrder>,
    pub path: Option<String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(CountError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| CountError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${HOME})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| CountError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }

    fn stdin_requested(&self) -> bool {
        self.input.stdin.unwrap_or(false)
    }
}

impl ConfigProvider for TomlConfig {
    fn input(&self) -> InputSource {
        if self.stdin_requested() {
            InputSource::Stdin
        } else if let Some(file) = &self.input.file {
            InputSource::File(file.clone())
        } else if let Some(text) = &self.input.text {
            InputSource::Inline(text.clone())
        } else {
            InputSource::Sample
        }
    }

    fn output_format(&self) -> OutputFormat {
        self.output.format.unwrap_or_default()
    }

    fn sort_order(&self) -> SortOrder {
        self.output.sort.unwrap_or_default()
    }

    fn output_path(&self) -> Option<&str> {
        self.output.path.as_deref()
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_exclusive(&[
            ("input.text", self.input.text.is_some()),
            ("input.file", self.input.file.is_some()),
            ("input.stdin", self.stdin_requested()),
        ])?;

        if let Some(file) = &self.input.file {
            validate_path("input.file", file)?;
        }
        if let Some(path) = &self.output.path {
            validate_path("output.path", path)?;
        }

        Ok(())
    }
}
