// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::errors::ConfigError;

/// Configuration for a demo run of the service.
///
/// # Fields
/// * `log_filter` - `tracing` filter directive used when `RUST_LOG` is unset (optional)
/// * `seed` - Strings to analyze and store before running queries
/// * `queries` - Natural-language queries to run against the seeded store
///
/// # Example
/// ```yaml
/// log_filter: debug
/// seed:
///   - racecar
///   - hello world
/// queries:
///   - all single word palindromic strings
/// ```
#[derive(Debug, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub log_filter: Option<String>,
    #[serde(default)]
    pub seed: Vec<String>,
    #[serde(default)]
    pub queries: Vec<String>,
}

/// Load a config from a YAML file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let content = fs::read_to_string(path)?;
    let cfg: Config = serde_yaml::from_str(&content)?;
    Ok(cfg)
}

/// Load and validate a config from a YAML file
///
/// Every validation rule runs; all failures are returned together.
pub fn load_and_validate_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let cfg = load_config(path)?;
    crate::config::validate_config(&cfg).map_err(ConfigError::Invalid)?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ValidationError;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(yaml: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(yaml.as_bytes()).unwrap();
        file
    }

    #[test]
    fn parse_basic_config() {
        let yaml = r#"
log_filter: debug
seed:
  - racecar
  - hello world
queries:
  - all palindromic strings
"#;

        let cfg: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(cfg.log_filter.as_deref(), Some("debug"));
        assert_eq!(cfg.seed, vec!["racecar", "hello world"]);
        assert_eq!(cfg.queries.len(), 1);
    }

    #[test]
    fn test_all_fields_default() {
        let cfg: Config = serde_yaml::from_str("{}").unwrap();
        assert_eq!(
            cfg,
            Config {
                log_filter: None,
                seed: vec![],
                queries: vec![],
            }
        );
    }

    #[test]
    fn test_seed_keeps_whitespace() {
        let yaml = r#"
seed:
  - "  padded  "
"#;
        let cfg: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(cfg.seed, vec!["  padded  "]);
    }

    #[test]
    fn test_load_and_validate_valid_config() {
        let file = write_config(
            r#"
seed: [racecar, level]
queries: ["strings longer than 3 characters"]
"#,
        );

        let result = load_and_validate_config(file.path());
        assert!(result.is_ok());
    }

    #[test]
    fn test_load_and_validate_duplicate_seed() {
        let file = write_config(
            r#"
seed: [racecar, level, racecar]
"#,
        );

        let err = load_and_validate_config(file.path()).unwrap_err();
        match &err {
            ConfigError::Invalid(errors) => assert_eq!(
                errors,
                &vec![ValidationError::DuplicateSeedValue {
                    value: "racecar".to_string(),
                    positions: vec![0, 2],
                }]
            ),
            other => panic!("unexpected error: {}", other),
        }
        assert!(err
            .to_string()
            .contains("Seed value 'racecar' is listed more than once (positions 0, 2)"));
    }

    #[test]
    fn test_load_missing_file() {
        let result = load_config("does/not/exist.yaml");
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_load_malformed_yaml() {
        let file = write_config("seed: [unterminated");
        let result = load_config(file.path());
        assert!(matches!(result, Err(ConfigError::Yaml(_))));
    }
}
