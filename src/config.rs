use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::severity::Severity;

/// Sink settings: where the backing store lives and the threshold
/// applied before any caller overrides it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SinkConfig {
    #[serde(default = "default_log_path")]
    pub log_path: PathBuf,
    #[serde(default = "default_threshold")]
    pub threshold: Severity,
}

fn default_log_path() -> PathBuf {
    PathBuf::from("logsieve.log")
}

fn default_threshold() -> Severity {
    Severity::Info
}

impl Default for SinkConfig {
    fn default() -> Self {
        Self {
            log_path: default_log_path(),
            threshold: default_threshold(),
        }
    }
}

pub fn load_config() -> Result<SinkConfig, figment::Error> {
    let figment = Figment::from(Serialized::defaults(SinkConfig::default()))
        .merge(Toml::file("logsieve.toml"))
        .merge(Env::prefixed("LOGSIEVE_"));

    figment.extract()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_without_file_or_env() {
        figment::Jail::expect_with(|_jail| {
            let config = load_config()?;
            assert_eq!(config.log_path, default_log_path());
            assert_eq!(config.threshold, Severity::Info);
            Ok(())
        });
    }

    #[test]
    fn env_overrides_file() {
        figment::Jail::expect_with(|jail| {
            jail.create_file(
                "logsieve.toml",
                r#"
                    log_path = "from_file.log"
                    threshold = "WARNING"
                "#,
            )?;
            jail.set_env("LOGSIEVE_THRESHOLD", "ERROR");

            let config = load_config()?;
            assert_eq!(config.log_path, PathBuf::from("from_file.log"));
            assert_eq!(config.threshold, Severity::Error);
            Ok(())
        });
    }
}
