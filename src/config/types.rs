// Configuration type definitions

use serde::Deserialize;

pub const DEFAULT_ENDPOINT: &str = "https://jsonplaceholder.typicode.com/users";
pub const DEFAULT_QUERY_PARAM: &str = "q";
pub const DEFAULT_MAX_VISIBLE: usize = 8;

/// Data-sourcing strategy selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum StrategyKind {
    /// One request per input change
    #[default]
    Live,
    /// One request at startup, local filtering afterwards
    Preload,
}

/// Remote source configuration section
#[derive(Debug, Clone, Deserialize)]
pub struct SourceConfig {
    #[serde(default)]
    pub strategy: StrategyKind,
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_query_param")]
    pub query_param: String,
    /// Request timeout in milliseconds, 0 disables it
    #[serde(default)]
    pub timeout_ms: u64,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_query_param() -> String {
    DEFAULT_QUERY_PARAM.to_string()
}

impl Default for SourceConfig {
    fn default() -> Self {
        SourceConfig {
            strategy: StrategyKind::default(),
            endpoint: default_endpoint(),
            query_param: default_query_param(),
            timeout_ms: 0,
        }
    }
}

/// Dropdown configuration section
#[derive(Debug, Clone, Deserialize)]
pub struct DropdownConfig {
    #[serde(default = "default_max_visible")]
    pub max_visible: usize,
}

fn default_max_visible() -> usize {
    DEFAULT_MAX_VISIBLE
}

impl Default for DropdownConfig {
    fn default() -> Self {
        DropdownConfig {
            max_visible: DEFAULT_MAX_VISIBLE,
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub dropdown: DropdownConfig,
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // Every valid strategy name parses to the matching variant.
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(50))]

        #[test]
        fn prop_valid_strategy_parsing(strategy in prop::sample::select(vec!["live", "preload"])) {
            let toml_content = format!(r#"
[source]
strategy = "{}"
"#, strategy);

            let config: Result<Config, _> = toml::from_str(&toml_content);
            prop_assert!(config.is_ok(), "Failed to parse valid strategy: {}", strategy);

            let expected = match strategy {
                "live" => StrategyKind::Live,
                "preload" => StrategyKind::Preload,
                _ => unreachable!(),
            };
            prop_assert_eq!(config.unwrap().source.strategy, expected);
        }
    }

    // Missing sections and fields always fall back to defaults.
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(50))]

        #[test]
        fn prop_missing_fields_use_defaults(
            include_source_section in prop::bool::ANY,
            include_dropdown_section in prop::bool::ANY,
        ) {
            let mut toml_content = String::new();
            if include_source_section {
                toml_content.push_str("[source]\n");
            }
            if include_dropdown_section {
                toml_content.push_str("[dropdown]\n");
            }

            let config: Result<Config, _> = toml::from_str(&toml_content);
            prop_assert!(config.is_ok(), "Failed to parse config with missing fields");

            let config = config.unwrap();
            prop_assert_eq!(config.source.strategy, StrategyKind::Live);
            prop_assert_eq!(config.source.endpoint, DEFAULT_ENDPOINT);
            prop_assert_eq!(config.source.query_param, DEFAULT_QUERY_PARAM);
            prop_assert_eq!(config.source.timeout_ms, 0);
            prop_assert_eq!(config.dropdown.max_visible, DEFAULT_MAX_VISIBLE);
        }
    }

    #[test]
    fn test_unknown_strategy_is_rejected() {
        let result: Result<Config, _> = toml::from_str("[source]\nstrategy = \"psychic\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_full_config() {
        let config: Config = toml::from_str(
            r#"
[source]
strategy = "preload"
endpoint = "http://localhost:8080/people"
query_param = "search"
timeout_ms = 1500

[dropdown]
max_visible = 4
"#,
        )
        .unwrap();

        assert_eq!(config.source.strategy, StrategyKind::Preload);
        assert_eq!(config.source.endpoint, "http://localhost:8080/people");
        assert_eq!(config.source.query_param, "search");
        assert_eq!(config.source.timeout_ms, 1500);
        assert_eq!(config.dropdown.max_visible, 4);
    }
}
