pub mod cli;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_path, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
use serde::{Deserialize, Serialize};

/// Where the emoji project keeps its data.
pub const DEFAULT_INPUT_PATH: &str = "internal/emojis.json";
pub const DEFAULT_NAME_FIELD: &str = "name";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(Parser))]
#[cfg_attr(feature = "cli", command(name = "emoji-dupes", version))]
#[cfg_attr(
    feature = "cli",
    command(about = "Report emoji names that occur more than once")
)]
pub struct CliConfig {
    // 路徑不開放給命令列，只有程式內部與測試可改
    #[cfg_attr(feature = "cli", arg(skip = String::from(DEFAULT_INPUT_PATH)))]
    pub input_path: String,

    #[cfg_attr(feature = "cli", arg(skip = String::from(DEFAULT_NAME_FIELD)))]
    pub name_field: String,

    #[cfg_attr(feature = "cli", arg(short, long, help = "Enable verbose logging on stderr"))]
    pub verbose: bool,
}

impl CliConfig {
    pub fn with_input_path(input_path: impl Into<String>) -> Self {
        Self {
            input_path: input_path.into(),
            ..Self::default()
        }
    }
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            input_path: DEFAULT_INPUT_PATH.to_string(),
            name_field: DEFAULT_NAME_FIELD.to_string(),
            verbose: false,
        }
    }
}

impl ConfigProvider for CliConfig {
    fn input_path(&self) -> &str {
        &self.input_path
    }

    fn name_field(&self) -> &str {
        &self.name_field
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("input_path", &self.input_path)?;
        validate_non_empty_string("name_field", &self.name_field)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_points_at_emoji_data() {
        let config = CliConfig::default();
        assert_eq!(config.input_path(), "internal/emojis.json");
        assert_eq!(config.name_field(), "name");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_input_path_fails_validation() {
        let config = CliConfig::with_input_path("");
        assert!(config.validate().unwrap_err().is_input_error());
    }

    #[cfg(feature = "cli")]
    #[test]
    fn test_cli_has_no_path_flag() {
        let config = CliConfig::try_parse_from(["emoji-dupes", "--verbose"]).unwrap();
        assert!(config.verbose);
        assert_eq!(config.input_path, DEFAULT_INPUT_PATH);
        assert_eq!(config.name_field, DEFAULT_NAME_FIELD);

        assert!(CliConfig::try_parse_from(["emoji-dupes", "other.json"]).is_err());
        assert!(CliConfig::try_parse_from(["emoji-dupes", "--input-path", "x.json"]).is_err());
    }
}
