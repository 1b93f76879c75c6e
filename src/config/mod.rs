pub mod cli;
pub mod toml_config;

use crate::adapters::OutputFormat;
use crate::core::assigner::DEFAULT_MAX_ATTEMPTS;
use crate::core::ConfigProvider;
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::error::SantaError;
use crate::utils::validation::{validate_optional_path, validate_path, validate_positive_number, Validate};

#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use toml_config::TomlConfig;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "secret-santa")]
#[command(version, about = "Draw Secret Santa pairs while respecting exclusions and last year's results")]
#[command(after_help = crate::utils::error::USAGE)]
pub struct CliConfig {
    /// Newline-delimited list of participant names
    pub names: String,

    /// Exclusions file (count-prefixed format)
    pub exclusions: Option<String>,

    /// Last year's results, one "<giver> buys for <giftee>" per line
    pub last_year: Option<String>,

    /// Optional TOML configuration file
    #[arg(long)]
    pub config: Option<String>,

    /// Maximum number of shuffles before giving up
    #[arg(long)]
    pub max_attempts: Option<usize>,

    /// Seed the shuffle for a reproducible draw
    #[arg(long)]
    pub seed: Option<u64>,

    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Also write the text results to this file
    #[arg(long)]
    pub save_to: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// 合併 TOML 設定檔（若有指定）與命令列參數，命令列優先
    pub fn into_settings(self) -> Result<RunSettings> {
        let file_config = match &self.config {
            Some(path) => {
                tracing::debug!("Loading configuration from {}", path);
                TomlConfig::from_file(path)?
            }
            None => TomlConfig::default(),
        };
        file_config.validate()?;

        Ok(RunSettings::from_sources(self, &file_config))
    }
}

/// 把 clap 的解析錯誤轉成 Usage 錯誤，只保留第一行說明，完整用法由錯誤訊息附上
#[cfg(feature = "cli")]
pub fn usage_error(error: &clap::Error) -> SantaError {
    let rendered = error.to_string();
    let message = rendered
        .lines()
        .next()
        .unwrap_or_default()
        .trim_start_matches("error: ")
        .to_string();
    SantaError::Usage { message }
}

/// 一次執行所需的完整設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSettings {
    pub names_path: String,
    pub exclusions_path: Option<String>,
    pub last_year_path: Option<String>,
    pub max_attempts: usize,
    pub seed: Option<u64>,
    pub format: OutputFormat,
    pub save_to: Option<String>,
}

impl RunSettings {
    pub fn new(names_path: impl Into<String>) -> Self {
        Self {
            names_path: names_path.into(),
            exclusions_path: None,
            last_year_path: None,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            seed: None,
            format: OutputFormat::default(),
            save_to: None,
        }
    }

    #[cfg(feature = "cli")]
    fn from_sources(cli: CliConfig, file: &TomlConfig) -> Self {
        Self {
            names_path: cli.names,
            exclusions_path: cli.exclusions,
            last_year_path: cli.last_year,
            max_attempts: cli
                .max_attempts
                .or(file.max_attempts())
                .unwrap_or(DEFAULT_MAX_ATTEMPTS),
            seed: cli.seed.or(file.seed()),
            format: cli.format.or(file.format()).unwrap_or_default(),
            save_to: cli.save_to.or_else(|| file.save_to().map(str::to_string)),
        }
    }
}

impl ConfigProvider for RunSettings {
    fn names_path(&self) -> &str {
        &self.names_path
    }

    fn exclusions_path(&self) -> Option<&str> {
        self.exclusions_path.as_deref()
    }

    fn last_year_path(&self) -> Option<&str> {
        self.last_year_path.as_deref()
    }

    fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    fn save_to(&self) -> Option<&str> {
        self.save_to.as_deref()
    }
}

impl Validate for RunSettings {
    fn validate(&self) -> Result<()> {
        validate_path("names", &self.names_path)?;
        validate_optional_path("exclusions", self.exclusions_path.as_deref())?;
        validate_optional_path("last_year", self.last_year_path.as_deref())?;
        validate_optional_path("save_to", self.save_to.as_deref())?;
        validate_positive_number("max_attempts", self.max_attempts, 1)
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_positional_arguments() {
        let cli = CliConfig::try_parse_from(["secret-santa", "names.txt", "ex.txt", "last.txt"]).unwrap();
        let settings = cli.into_settings().unwrap();

        assert_eq!(settings.names_path, "names.txt");
        assert_eq!(settings.exclusions_path.as_deref(), Some("ex.txt"));
        assert_eq!(settings.last_year_path.as_deref(), Some("last.txt"));
        assert_eq!(settings.max_attempts, DEFAULT_MAX_ATTEMPTS);
        assert_eq!(settings.format, OutputFormat::Text);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_argument_count_is_one_to_three() {
        assert!(CliConfig::try_parse_from(["secret-santa"]).is_err());
        assert!(CliConfig::try_parse_from(["secret-santa", "a", "b", "c", "d"]).is_err());
        assert!(CliConfig::try_parse_from(["secret-santa", "a"]).is_ok());
    }

    #[test]
    fn test_extra_argument_maps_to_usage_error() {
        let err = CliConfig::try_parse_from(["secret-santa", "a", "b", "c", "d"]).unwrap_err();
        let error = usage_error(&err);

        match &error {
            SantaError::Usage { message } => {
                assert!(message.contains("unexpected argument"));
                assert!(!message.starts_with("error:"));
                assert!(!message.contains('\n'));
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(error.exit_code(), 1);
        assert!(error
            .user_friendly_message()
            .contains("Usage: secret-santa <names.txt> [exclusions.txt] [lastyear.txt]"));
    }

    #[test]
    fn test_cli_overrides_config_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[assignment]\nmax_attempts = 50\nseed = 9\n\n[output]\nformat = \"json\"\n")
            .unwrap();
        let config_path = temp_file.path().to_str().unwrap().to_string();

        let cli = CliConfig::try_parse_from([
            "secret-santa",
            "names.txt",
            "--config",
            config_path.as_str(),
            "--max-attempts",
            "10",
        ])
        .unwrap();
        let settings = cli.into_settings().unwrap();

        assert_eq!(settings.max_attempts, 10);
        assert_eq!(settings.seed, Some(9));
        assert_eq!(settings.format, OutputFormat::Json);
    }

    #[test]
    fn test_zero_attempts_fails_validation() {
        let cli = CliConfig::try_parse_from(["secret-santa", "names.txt", "--max-attempts", "0"]).unwrap();
        let settings = cli.into_settings().unwrap();
        assert!(settings.validate().is_err());
    }
}
