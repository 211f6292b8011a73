use super::toml_config::TomlConfig;
use crate::core::ConfigProvider;
use crate::domain::model::{InputSource, OutputFormat, SortOrder};
use crate::utils::error::Result;
use crate::utils::validation::{validate_exclusive, validate_path, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "letter-count")]
#[command(about = "Count how often each letter occurs in a text, ignoring case")]
pub struct CliConfig {
    /// Text to count; several words are joined with spaces.
    /// Counts "Hello, World!" when no input is given
    pub text: Vec<String>,

    /// Read the text from a file
    #[arg(short, long)]
    pub file: Option<String>,

    /// Read the text from standard input
    #[arg(long)]
    pub stdin: bool,

    /// Load settings from a TOML file; flags override it
    #[arg(short, long)]
    pub config: Option<String>,

    /// Output format [default: debug]
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Order of the entries [default: first-seen]
    #[arg(long, value_enum)]
    pub sort: Option<SortOrder>,

    /// Write the result to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Emit log lines as JSON
    #[arg(long)]
    pub log_json: bool,
}

impl CliConfig {
    fn has_input(&self) -> bool {
        self.stdin || self.file.is_some() || !self.text.is_empty()
    }

    /// 命令列參數覆蓋 TOML 設定；給了任何輸入參數就取代整個 [input]
    pub fn overlay(&self, config: &mut TomlConfig) {
        if self.has_input() {
            config.input.stdin = self.stdin.then_some(true);
            config.input.file = self.file.clone();
            config.input.text = (!self.text.is_empty()).then(|| self.text.join(" "));
        }
        if let Some(format) = self.format {
            config.output.format = Some(format);
        }
        if let Some(sort) = self.sort {
            config.output.sort = Some(sort);
        }
        if let Some(output) = &self.output {
            config.output.path = Some(output.clone());
        }
    }
}

impl ConfigProvider for CliConfig {
    fn input(&self) -> InputSource {
        if self.stdin {
            InputSource::Stdin
        } else if let Some(file) = &self.file {
            InputSource::File(file.clone())
        } else if !self.text.is_empty() {
            InputSource::Inline(self.text.join(" "))
        } else {
            InputSource::Sample
        }
    }

    fn output_format(&self) -> OutputFormat {
        self.format.unwrap_or_default()
    }

    fn sort_order(&self) -> SortOrder {
        self.sort.unwrap_or_default()
    }

    fn output_path(&self) -> Option<&str> {
        self.output.as_deref()
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_exclusive(&[
            ("TEXT", !self.text.is_empty()),
            ("--file", self.file.is_some()),
            ("--stdin", self.stdin),
        ])?;

        if let Some(file) = &self.file {
            validate_path("--file", file)?;
        }
        if let Some(output) = &self.output {
            validate_path("--output", output)?;
        }
        Ok(())
    }
}
