//! Configuration types for taskmd.
//!
//! This crate provides the configuration read from `.taskmd/config.yaml`
//! and the environment overrides applied on top of it.

pub mod env;
pub mod loader;
pub mod types;

pub use env::*;
pub use loader::*;
pub use types::*;

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_default_config_has_sensible_values() {
        let config = TaskmdConfig::default();

        assert_eq!(config.output_dir, PathBuf::from("taskmd.out"));
        assert_eq!(config.resource_scan, ScanMode::Skip);
        assert_eq!(config.kustomize.program, "kustomize");
        assert_eq!(config.kustomize.args, vec!["build".to_string()]);
    }

    #[test]
    fn test_partial_configs_merge_with_defaults() {
        let partial_yaml = r#"
kustomize:
  program: kubectl
"#;

        let config: TaskmdConfig = serde_yaml::from_str(partial_yaml).unwrap();

        assert_eq!(config.kustomize.program, "kubectl");
        assert_eq!(config.kustomize.args, vec!["build".to_string()]);
        assert_eq!(config.output_dir, PathBuf::from("taskmd.out"));
    }

    #[test]
    fn test_scan_mode_uses_snake_case() {
        let config: TaskmdConfig =
            serde_yaml::from_str("resource_scan: stop_at_first_non_task\n").unwrap();
        assert_eq!(config.resource_scan, ScanMode::StopAtFirstNonTask);

        let yaml = serde_yaml::to_string(&ScanMode::Skip).unwrap();
        assert!(yaml.contains("skip"));
    }
}
