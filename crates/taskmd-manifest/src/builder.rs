//! Running the external overlay build.

use std::path::Path;
use std::process::Command;

use taskmd_common_config::{KustomizeConfig, ScanMode};
use tracing::{debug, info};

use crate::error::{ManifestError, Result};
use crate::resources::ResourceSet;
use crate::types::Task;

/// Turns a directory into a flat resource set.
pub trait ManifestBuilder {
    fn build(&self, dir: &Path) -> Result<ResourceSet>;
}

/// Runs `<program> <args...> <dir>` and parses its stdout as a YAML stream.
#[derive(Debug, Clone)]
pub struct KustomizeBuilder {
    program: String,
    args: Vec<String>,
}

impl KustomizeBuilder {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn from_config(config: &KustomizeConfig) -> Self {
        Self::new(config.program.clone()).with_args(config.args.iter().cloned())
    }

    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args = args.into_iter().map(Into::into).collect();
        self
    }

    fn command_line(&self, dir: &Path) -> String {
        let mut parts = vec![self.program.clone()];
        parts.extend(self.args.iter().cloned());
        parts.push(dir.display().to_string());
        parts.join(" ")
    }
}

impl Default for KustomizeBuilder {
    fn default() -> Self {
        Self::from_config(&KustomizeConfig::default())
    }
}

impl ManifestBuilder for KustomizeBuilder {
    fn build(&self, dir: &Path) -> Result<ResourceSet> {
        let command_line = self.command_line(dir);
        let build_error = |message: String| ManifestError::Build {
            dir: dir.to_path_buf(),
            message,
        };

        debug!(command = %command_line, "running overlay build");
        let output = Command::new(&self.program)
            .args(&self.args)
            .arg(dir)
            .output()
            .map_err(|e| build_error(format!("failed to run `{command_line}`: {e}")))?;

        if !output.status.success() {
            let status = match output.status.code() {
                Some(code) => format!("exited with code {code}"),
                None => "was terminated by a signal".to_string(),
            };
            let stderr = single_line(&String::from_utf8_lossy(&output.stderr));
            let message = if stderr.is_empty() {
                format!("`{command_line}` {status}")
            } else {
                format!("`{command_line}` {status}: {stderr}")
            };
            return Err(build_error(message));
        }

        let stdout = String::from_utf8(output.stdout)
            .map_err(|e| build_error(format!("output is not valid UTF-8: {e}")))?;
        let resources = ResourceSet::from_yaml_stream(&stdout)?;
        info!(dir = %dir.display(), resources = resources.len(), "overlay build finished");
        Ok(resources)
    }
}

/// Build `dir` and decode the Task resources of the result.
pub fn build_tasks(
    builder: &dyn ManifestBuilder,
    dir: &Path,
    mode: ScanMode,
) -> Result<Vec<Task>> {
    builder.build(dir)?.tasks(mode)
}

/// Join the non-blank lines of `text`, trimmed, with `"; "`.
fn single_line(text: &str) -> String {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use taskmd_test_utils::fixtures::{resource_yaml, task_yaml, yaml_stream};

    struct StaticBuilder(String);

    impl ManifestBuilder for StaticBuilder {
        fn build(&self, _dir: &Path) -> Result<ResourceSet> {
            ResourceSet::from_yaml_stream(&self.0)
        }
    }

    #[test]
    fn test_build_tasks_with_static_builder() {
        let builder = StaticBuilder(yaml_stream(&[
            task_yaml("lint"),
            resource_yaml("ServiceAccount", "ci"),
            task_yaml("test"),
        ]));

        let tasks = build_tasks(&builder, Path::new("unused"), ScanMode::Skip).unwrap();
        let names: Vec<_> = tasks.iter().map(Task::name).collect();
        assert_eq!(names, vec!["lint", "test"]);
    }

    #[test]
    fn test_command_line() {
        let builder = KustomizeBuilder::new("kubectl").with_args(["kustomize"]);
        assert_eq!(
            builder.command_line(Path::new("overlays/prod")),
            "kubectl kustomize overlays/prod"
        );
        assert_eq!(
            KustomizeBuilder::default().command_line(Path::new(".")),
            "kustomize build ."
        );
    }

    #[test]
    fn test_missing_program_is_build_error() {
        let builder = KustomizeBuilder::new("taskmd-no-such-kustomize-binary");
        let err = builder.build(Path::new(".")).unwrap_err();
        match err {
            ManifestError::Build { dir, message } => {
                assert_eq!(dir, PathBuf::from("."));
                assert!(message.contains("failed to run"));
            }
            other => panic!("expected build error, got {other:?}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_build_reads_stdout_of_program() {
        let dir = taskmd_test_utils::ManifestDir::new();
        dir.write(
            "all.yaml",
            &yaml_stream(&[task_yaml("one"), task_yaml("two")]),
        );
        // `sh -c script dir` runs the script with $0 set to dir.
        let builder = KustomizeBuilder::new("sh").with_args(["-c", "cat \"$0/all.yaml\""]);

        let tasks = build_tasks(&builder, dir.path(), ScanMode::Skip).unwrap();
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[1].name(), "two");
    }

    #[test]
    fn test_single_line() {
        assert_eq!(
            single_line("Error: accumulating resources\n\n  second line  \n"),
            "Error: accumulating resources; second line"
        );
        assert_eq!(single_line(" \n"), "");
    }

    #[cfg(unix)]
    #[test]
    fn test_failing_program_reports_stderr() {
        let builder = KustomizeBuilder::new("sh")
            .with_args(["-c", "echo 'accumulating resources failed' >&2; exit 3"]);

        let err = builder.build(Path::new("overlay")).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("kustomize build of overlay failed"));
        assert!(message.contains("exited with code 3: accumulating resources failed"));
    }

    #[cfg(unix)]
    #[test]
    fn test_multiline_stderr_is_folded() {
        let script = "printf 'Error: accumulating resources\\nsecond line\\n' >&2; exit 1";
        let builder = KustomizeBuilder::new("sh").with_args(["-c", script]);

        let err = builder.build(Path::new("overlay")).unwrap_err();
        let message = err.to_string();
        assert_eq!(message.lines().count(), 1);
        assert!(message.ends_with("code 1: Error: accumulating resources; second line"));
    }
}
