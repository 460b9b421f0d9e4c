//! Demo run settings.
//!
//! Settings come from an optional TOML file (`--config <path>`) and are then
//! overridden by command-line flags:
//!
//! ```text
//! rb-demo [--config FILE] [--count N] [--queries N] [--min N] [--max N]
//!         [--seed N] [--log-level LEVEL] [--no-dump]
//! ```

use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;
use simplelog::LevelFilter;

use crate::error::DemoError;

pub const USAGE: &str = "usage: rb-demo [--config FILE] [--count N] [--queries N] [--min N] \
[--max N] [--seed N] [--log-level off|error|warn|info|debug|trace] [--no-dump]";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DemoConfig {
    /// Random payloads to insert.
    pub count: usize,
    /// Random lookups to perform afterwards.
    pub queries: usize,
    pub min: i32,
    pub max: i32,
    pub seed: Option<u64>,
    pub log_level: String,
    /// Print the tree dump at the end of the run.
    pub dump: bool,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            count: 64,
            queries: 32,
            min: 1,
            max: 1024,
            seed: None,
            log_level: "warn".to_string(),
            dump: true,
        }
    }
}

fn parse_flag<T: FromStr>(flag: &str, value: Option<&String>) -> Result<T, DemoError> {
    let value = value.ok_or_else(|| DemoError::Usage(format!("{flag} needs a value\n{USAGE}")))?;
    value.parse().map_err(|_| DemoError::InvalidValue {
        flag: flag.to_string(),
        value: value.clone(),
    })
}

impl DemoConfig {
    pub fn from_toml_str(source: &str) -> Result<Self, DemoError> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, DemoError> {
        let source = std::fs::read_to_string(path)?;
        Self::from_toml_str(&source)
    }

    /// Builds the configuration for a command line (program name excluded).
    pub fn from_args(args: &[String]) -> Result<Self, DemoError> {
        let mut config = match args.iter().position(|a| a == "--config") {
            Some(i) => Self::load(Path::new(&parse_flag::<String>("--config", args.get(i + 1))?))?,
            None => Self::default(),
        };

        let mut i = 0;
        while i < args.len() {
            match args[i].as_str() {
                "--config" => i += 1,
                "--count" => {
                    i += 1;
                    config.count = parse_flag("--count", args.get(i))?;
                }
                "--queries" => {
                    i += 1;
                    config.queries = parse_flag("--queries", args.get(i))?;
                }
                "--min" => {
                    i += 1;
                    config.min = parse_flag("--min", args.get(i))?;
                }
                "--max" => {
                    i += 1;
                    config.max = parse_flag("--max", args.get(i))?;
                }
                "--seed" => {
                    i += 1;
                    config.seed = Some(parse_flag("--seed", args.get(i))?);
                }
                "--log-level" => {
                    i += 1;
                    config.log_level = parse_flag("--log-level", args.get(i))?;
                }
                "--no-dump" => config.dump = false,
                other => return Err(DemoError::Usage(format!("unknown argument: {other}\n{USAGE}"))),
            }
            i += 1;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), DemoError> {
        if self.min > self.max {
            return Err(DemoError::InvalidConfig(format!(
                "min ({}) is greater than max ({})",
                self.min, self.max
            )));
        }
        self.level_filter()?;
        Ok(())
    }

    pub fn level_filter(&self) -> Result<LevelFilter, DemoError> {
        LevelFilter::from_str(&self.log_level).map_err(|_| DemoError::InvalidValue {
            flag: "log_level".to_string(),
            value: self.log_level.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn defaults_without_arguments() {
        let config = DemoConfig::from_args(&[]).unwrap();
        assert_eq!(config, DemoConfig::default());
        assert_eq!(config.level_filter().unwrap(), LevelFilter::Warn);
    }

    #[test]
    fn flags_override_defaults() {
        let config = DemoConfig::from_args(&args(&[
            "--count", "10", "--queries", "3", "--min", "-5", "--max", "5", "--seed", "99",
            "--log-level", "debug", "--no-dump",
        ]))
        .unwrap();
        assert_eq!(config.count, 10);
        assert_eq!(config.queries, 3);
        assert_eq!((config.min, config.max), (-5, 5));
        assert_eq!(config.seed, Some(99));
        assert_eq!(config.level_filter().unwrap(), LevelFilter::Debug);
        assert!(!config.dump);
    }

    #[test]
    fn toml_fills_missing_fields_with_defaults() {
        let config = DemoConfig::from_toml_str("count = 8\nseed = 3\ndump = false\n").unwrap();
        assert_eq!(config.count, 8);
        assert_eq!(config.seed, Some(3));
        assert!(!config.dump);
        assert_eq!(config.max, 1024);
    }

    #[test]
    fn rejects_unknown_toml_keys() {
        assert!(matches!(
            DemoConfig::from_toml_str("colour = 1\n"),
            Err(DemoError::Toml(_))
        ));
    }

    #[test]
    fn rejects_inverted_range() {
        assert!(matches!(
            DemoConfig::from_args(&args(&["--min", "10", "--max", "1"])),
            Err(DemoError::InvalidConfig(_))
        ));
    }

    #[test]
    fn rejects_bad_values_and_flags() {
        assert!(matches!(
            DemoConfig::from_args(&args(&["--count", "many"])),
            Err(DemoError::InvalidValue { .. })
        ));
        assert!(matches!(
            DemoConfig::from_args(&args(&["--count"])),
            Err(DemoError::Usage(_))
        ));
        assert!(matches!(
            DemoConfig::from_args(&args(&["--verbose"])),
            Err(DemoError::Usage(_))
        ));
        assert!(matches!(
            DemoConfig::from_args(&args(&["--log-level", "loud"])),
            Err(DemoError::InvalidValue { .. })
        ));
    }
}
