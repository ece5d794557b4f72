// src/infra/config.rs — Configuration loading (TOML)

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::infra::errors::CutChainError;
use crate::infra::paths;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub naming: NamingConfig,

    #[serde(default)]
    pub optimizer: OptimizerConfig,

    #[serde(default)]
    pub finalize: FinalizeConfig,

    #[serde(default)]
    pub diagnostics: DiagnosticsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NamingConfig {
    /// Date tag shared by every file of one optimization campaign.
    /// The literal `today` is replaced by the current local date.
    pub date_tag: String,
    /// Directory the optimizer writes cut files into.
    pub repository_dir: String,
    /// One working point per pass, in pass order.
    pub working_points: Vec<String>,
    /// Efficiency tag of the bootstrap cut range file.
    pub bootstrap_tag: String,
}

impl Default for NamingConfig {
    fn default() -> Self {
        Self {
            date_tag: "2019-08-23".into(),
            repository_dir: "cut_repository".into(),
            working_points: vec![
                "WP_Veto".into(),
                "WP_Loose".into(),
                "WP_Medium".into(),
                "WP_Tight".into(),
            ],
            bootstrap_tag: "eff_0999".into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptimizerConfig {
    #[serde(default = "default_program")]
    pub program: String,
    /// Argument templates. Available variables: `limits_file`,
    /// `output_base`, `training_base`, `limits_table`, `region`,
    /// `use_barrel` (`true` or `false`, as a C++ literal), `pass`.
    #[serde(default)]
    pub args: Vec<String>,
    #[serde(default)]
    pub working_dir: Option<String>,
}

fn default_program() -> String {
    "root".into()
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            program: default_program(),
            args: vec![
                "-l".into(),
                "-b".into(),
                "-q".into(),
                "optimize.C+(\"{{ limits_file }}\",\"{{ output_base }}\",\"{{ training_base }}\",VarLims::{{ limits_table }},{{ use_barrel }})".into(),
            ],
            working_dir: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FinalizeConfig {
    /// Total copy attempts per working point, first try included.
    pub max_copy_attempts: u32,
    pub retry_delay_ms: u64,
    /// Record key looked up in each final cut file.
    pub record_key: String,
}

impl Default for FinalizeConfig {
    fn default() -> Self {
        Self {
            max_copy_attempts: 10,
            retry_delay_ms: 0,
            record_key: "cuts".into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DiagnosticsConfig {
    /// Run `pwd` and `ls -rtl` before finalizing.
    pub enabled: bool,
}

impl Default for DiagnosticsConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

impl Config {
    /// Load config from the first existing candidate file, falling back to defaults.
    pub fn load() -> anyhow::Result<Self> {
        match paths::config_file_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), CutChainError> {
        if self.naming.working_points.is_empty() {
            return Err(CutChainError::Config(
                "naming.working_points must list at least one working point".into(),
            ));
        }
        if self.naming.working_points.iter().any(|w| w.trim().is_empty()) {
            return Err(CutChainError::Config(
                "naming.working_points contains an empty name".into(),
            ));
        }
        if self.finalize.max_copy_attempts == 0 {
            return Err(CutChainError::Config(
                "finalize.max_copy_attempts must be at least 1".into(),
            ));
        }
        if self.optimizer.program.trim().is_empty() {
            return Err(CutChainError::Config("optimizer.program is empty".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_reasonable() {
        let c = Config::default();
        assert_eq!(c.naming.working_points.len(), 4);
        assert_eq!(c.naming.date_tag, "2019-08-23");
        assert_eq!(c.naming.repository_dir, "cut_repository");
        assert_eq!(c.finalize.max_copy_attempts, 10);
        assert_eq!(c.finalize.retry_delay_ms, 0);
        assert_eq!(c.finalize.record_key, "cuts");
        assert!(c.diagnostics.enabled);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn test_optimizer_defaults() {
        let o = OptimizerConfig::default();
        assert_eq!(o.program, "root");
        assert_eq!(o.args.len(), 4);
        assert!(o.args[3].contains("{{ limits_table }}"));
        assert!(o.working_dir.is_none());
    }

    #[test]
    fn test_parse_minimal_toml() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.finalize.max_copy_attempts, 10);
        assert_eq!(config.naming.bootstrap_tag, "eff_0999");
    }

    #[test]
    fn test_parse_full_toml() {
        let toml_str = r#"
[naming]
date_tag = "2020-01-15"
repository_dir = "repo"
working_points = ["WP_Loose", "WP_Tight"]
bootstrap_tag = "eff_0995"

[optimizer]
program = "/opt/bin/optimize"
args = ["--limits", "{{ limits_file }}"]
working_dir = "work"

[finalize]
max_copy_attempts = 3
retry_delay_ms = 250
record_key = "wp_cuts"

[diagnostics]
enabled = false
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.naming.date_tag, "2020-01-15");
        assert_eq!(config.naming.working_points, vec!["WP_Loose", "WP_Tight"]);
        assert_eq!(config.optimizer.program, "/opt/bin/optimize");
        assert_eq!(config.optimizer.working_dir.as_deref(), Some("work"));
        assert_eq!(config.finalize.max_copy_attempts, 3);
        assert_eq!(config.finalize.retry_delay_ms, 250);
        assert_eq!(config.finalize.record_key, "wp_cuts");
        assert!(!config.diagnostics.enabled);
    }

    #[test]
    fn test_optimizer_args_empty_when_omitted() {
        let config: Config = toml::from_str("[optimizer]\nprogram = \"opt\"\n").unwrap();
        assert_eq!(config.optimizer.program, "opt");
        assert!(config.optimizer.args.is_empty());
    }

    #[test]
    fn test_validate_rejects_empty_working_points() {
        let mut c = Config::default();
        c.naming.working_points.clear();
        assert!(matches!(c.validate(), Err(CutChainError::Config(_))));
    }

    #[test]
    fn test_validate_rejects_blank_working_point() {
        let mut c = Config::default();
        c.naming.working_points[1] = "  ".into();
        assert!(c.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_attempts() {
        let mut c = Config::default();
        c.finalize.max_copy_attempts = 0;
        assert!(c.validate().is_err());
    }

    #[test]
    fn test_serialize_roundtrip() {
        let config = Config::default();
        let serialized = toml::to_string(&config).unwrap();
        let deserialized: Config = toml::from_str(&serialized).unwrap();
        assert_eq!(
            deserialized.naming.working_points,
            config.naming.working_points
        );
        assert_eq!(deserialized.optimizer.args, config.optimizer.args);
    }

    #[test]
    fn test_load_nonexistent_file() {
        let result = Config::load_from(Path::new("/nonexistent/cutchain.toml"));
        assert!(result.is_err());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cutchain.toml");
        std::fs::write(&path, "[finalize]\nmax_copy_attempts = 2\n").unwrap();
        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.finalize.max_copy_attempts, 2);
        assert_eq!(config.finalize.record_key, "cuts");
    }

    #[test]
    fn test_partial_sections_keep_field_defaults() {
        let config: Config = toml::from_str(
            "[naming]\ndate_tag = \"2020-01-01\"\n\n[finalize]\nmax_copy_attempts = 3\n\n[diagnostics]\n",
        )
        .unwrap();
        assert_eq!(config.naming.date_tag, "2020-01-01");
        assert_eq!(config.naming.repository_dir, "cut_repository");
        assert_eq!(config.naming.working_points.len(), 4);
        assert_eq!(config.finalize.max_copy_attempts, 3);
        assert_eq!(config.finalize.retry_delay_ms, 0);
        assert_eq!(config.finalize.record_key, "cuts");
        assert!(config.diagnostics.enabled);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_optimizer_program_defaults_to_root() {
        let config: Config = toml::from_str("[optimizer]\nworking_dir = \"work\"\n").unwrap();
        assert_eq!(config.optimizer.program, "root");
        assert_eq!(config.optimizer.working_dir.as_deref(), Some("work"));
    }
}
