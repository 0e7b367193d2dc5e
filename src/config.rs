use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Represents the complete configuration for changelog-relay.
///
/// Everything here can also be supplied on the command line; CLI values win
/// over file values.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    /// Release tag to resolve against the two most recent tags
    #[serde(default)]
    pub tag: Option<String>,

    /// Explicit range start (mutually exclusive with `tag`)
    #[serde(default)]
    pub from_tag: Option<String>,

    /// Explicit range end (mutually exclusive with `tag`)
    #[serde(default)]
    pub to_tag: Option<String>,

    /// Optional header text for the rendered changelog
    #[serde(default)]
    pub title: String,

    /// Category aliases whose sections are suppressed
    #[serde(default)]
    pub exclude_types: Vec<String>,

    /// Fallback (`type = "other"`) instead of dropping unparseable commits
    #[serde(default)]
    pub include_invalid_commits: bool,

    /// Reverse per-category commit listing order (not breaking-change order)
    #[serde(default)]
    pub reverse_order: bool,

    #[serde(default)]
    pub delivery: DeliveryConfig,
}

/// Delivery settings.
///
/// A token plus at least one destination switches the sink from "emit
/// artifact" to "deliver directly".
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct DeliveryConfig {
    #[serde(default)]
    pub token: Option<String>,

    /// Destination identifiers (channel ids), one delivery each
    #[serde(default)]
    pub destinations: Vec<String>,

    /// Message API endpoint the payload is posted to
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
}

fn default_endpoint() -> String {
    "https://slack.com/api/chat.postMessage".to_string()
}

impl Default for DeliveryConfig {
    fn default() -> Self {
        DeliveryConfig {
            token: None,
            destinations: Vec::new(),
            endpoint: default_endpoint(),
        }
    }
}

impl DeliveryConfig {
    /// Whether delivery is fully configured
    pub fn is_configured(&self) -> bool {
        self.token.is_some() && !self.destinations.is_empty()
    }
}

/// Parse a comma-separated exclusion list into category aliases.
pub fn parse_exclude_types(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|part| part.trim().to_string())
        .filter(|part| !part.is_empty())
        .collect()
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `changelog-relay.toml` in current directory
/// 3. `~/.config/.changelog-relay.toml` in user config directory
/// 4. Default configuration if no file found
pub fn load_config(config_path: Option<&str>) -> Result<Config, Box<dyn std::error::Error>> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if Path::new("./changelog-relay.toml").exists() {
        fs::read_to_string("./changelog-relay.toml")?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(".changelog-relay.toml");
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    let config: Config = toml::from_str(&config_str)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_exclude_types() {
        assert_eq!(
            parse_exclude_types("chore, docs,ci"),
            vec!["chore".to_string(), "docs".to_string(), "ci".to_string()]
        );
        assert!(parse_exclude_types("").is_empty());
        assert!(parse_exclude_types(" , ").is_empty());
    }

    #[test]
    fn test_delivery_requires_token_and_destination() {
        let mut delivery = DeliveryConfig::default();
        assert!(!delivery.is_configured());

        delivery.token = Some("xoxb-123".to_string());
        assert!(!delivery.is_configured());

        delivery.destinations.push("C123".to_string());
        assert!(delivery.is_configured());
    }

    #[test]
    fn test_config_parses_from_toml() {
        let config: Config = toml::from_str(
            r#"
            tag = "v1.2.0"
            title = "Release v1.2.0"
            exclude_types = ["chore", "ci"]
            reverse_order = true

            [delivery]
            token = "xoxb-123"
            destinations = ["C123", "C456"]
            "#,
        )
        .unwrap();

        assert_eq!(config.tag, Some("v1.2.0".to_string()));
        assert_eq!(config.title, "Release v1.2.0");
        assert_eq!(config.exclude_types.len(), 2);
        assert!(config.reverse_order);
        assert!(!config.include_invalid_commits);
        assert!(config.delivery.is_configured());
        assert_eq!(
            config.delivery.endpoint,
            "https://slack.com/api/chat.postMessage"
        );
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
    }
}
