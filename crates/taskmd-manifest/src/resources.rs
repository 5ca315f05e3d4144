//! Resource sets produced by an overlay build.

use serde::Deserialize;
use taskmd_common_config::ScanMode;
use tracing::debug;

use crate::error::{ManifestError, Result};
use crate::types::{Task, TASK_KIND};

/// One resource of a built resource set.
#[derive(Debug, Clone, PartialEq)]
pub struct Resource {
    document: serde_yaml::Value,
}

impl Resource {
    pub fn new(document: serde_yaml::Value) -> Self {
        Self { document }
    }

    /// The top-level `kind`, or `""` when absent.
    pub fn kind(&self) -> &str {
        self.document
            .get("kind")
            .and_then(serde_yaml::Value::as_str)
            .unwrap_or_default()
    }

    /// `metadata.name`, or `""` when absent.
    pub fn name(&self) -> &str {
        self.document
            .get("metadata")
            .and_then(|m| m.get("name"))
            .and_then(serde_yaml::Value::as_str)
            .unwrap_or_default()
    }

    pub fn is_task(&self) -> bool {
        self.kind() == TASK_KIND
    }

    /// The resource as a JSON value.
    pub fn to_json(&self) -> Result<serde_json::Value> {
        serde_json::to_value(&self.document).map_err(|e| ManifestError::json(self.origin(), &e))
    }

    /// Decode the resource as a [`Task`] by way of its JSON form.
    pub fn to_task(&self) -> Result<Task> {
        serde_json::from_value(self.to_json()?).map_err(|e| ManifestError::json(self.origin(), &e))
    }

    fn origin(&self) -> String {
        format!("{} resource {:?}", self.kind(), self.name())
    }
}

/// An ordered set of resources, in the order the build emitted them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResourceSet {
    resources: Vec<Resource>,
}

impl ResourceSet {
    /// Parse a multi-document YAML stream. Empty documents are dropped.
    pub fn from_yaml_stream(stream: &str) -> Result<Self> {
        let mut resources = Vec::new();
        for document in serde_yaml::Deserializer::from_str(stream) {
            let value = serde_yaml::Value::deserialize(document)
                .map_err(|e| ManifestError::yaml("kustomize output", &e))?;
            if !value.is_null() {
                resources.push(Resource::new(value));
            }
        }
        Ok(Self { resources })
    }

    pub fn len(&self) -> usize {
        self.resources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Resource> {
        self.resources.iter()
    }

    /// Decode the Task resources in emitted order.
    ///
    /// With [`ScanMode::StopAtFirstNonTask`] the scan ends at the first
    /// resource of any other kind; with [`ScanMode::Skip`] such resources
    /// are passed over.
    pub fn tasks(&self, mode: ScanMode) -> Result<Vec<Task>> {
        let mut tasks = Vec::new();

        for resource in &self.resources {
            if !resource.is_task() {
                match mode {
                    ScanMode::Skip => {
                        debug!(kind = resource.kind(), name = resource.name(), "skipping resource");
                        continue;
                    }
                    ScanMode::StopAtFirstNonTask => {
                        debug!(kind = resource.kind(), name = resource.name(), "stopping scan");
                        break;
                    }
                }
            }
            tasks.push(resource.to_task()?);
        }

        Ok(tasks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use taskmd_test_utils::fixtures::{resource_yaml, task_yaml, yaml_stream};

    fn names(tasks: &[Task]) -> Vec<&str> {
        tasks.iter().map(Task::name).collect()
    }

    fn mixed_stream() -> ResourceSet {
        let stream = yaml_stream(&[
            task_yaml("first"),
            resource_yaml("ConfigMap", "settings"),
            task_yaml("second"),
        ]);
        ResourceSet::from_yaml_stream(&stream).unwrap()
    }

    #[test]
    fn test_parse_stream_keeps_order_and_kinds() {
        let set = mixed_stream();

        assert_eq!(set.len(), 3);
        let kinds: Vec<_> = set.iter().map(Resource::kind).collect();
        assert_eq!(kinds, vec!["Task", "ConfigMap", "Task"]);
        assert_eq!(set.iter().nth(1).unwrap().name(), "settings");
    }

    #[test]
    fn test_skip_mode_passes_over_other_kinds() {
        let tasks = mixed_stream().tasks(ScanMode::Skip).unwrap();
        assert_eq!(names(&tasks), vec!["first", "second"]);
    }

    #[test]
    fn test_stop_mode_ends_at_first_other_kind() {
        let tasks = mixed_stream().tasks(ScanMode::StopAtFirstNonTask).unwrap();
        assert_eq!(names(&tasks), vec!["first"]);
    }

    #[test]
    fn test_stop_mode_with_leading_other_kind_yields_nothing() {
        let stream = yaml_stream(&[resource_yaml("Pipeline", "ci"), task_yaml("build")]);
        let set = ResourceSet::from_yaml_stream(&stream).unwrap();

        assert!(set.tasks(ScanMode::StopAtFirstNonTask).unwrap().is_empty());
        assert_eq!(names(&set.tasks(ScanMode::Skip).unwrap()), vec!["build"]);
    }

    #[test]
    fn test_empty_documents_are_dropped() {
        let set = ResourceSet::from_yaml_stream("---\n---\n").unwrap();
        assert!(set.is_empty());
        assert!(ResourceSet::from_yaml_stream("").unwrap().is_empty());
    }

    #[test]
    fn test_missing_kind_is_empty_string() {
        let set = ResourceSet::from_yaml_stream("metadata:\n  name: x\n").unwrap();
        let resource = set.iter().next().unwrap();
        assert_eq!(resource.kind(), "");
        assert!(!resource.is_task());
    }

    #[test]
    fn test_undecodable_task_is_decode_error() {
        let stream = "kind: Task\nmetadata:\n  name: broken\nspec:\n  workspaces: 7\n";
        let set = ResourceSet::from_yaml_stream(stream).unwrap();

        let err = set.tasks(ScanMode::Skip).unwrap_err();
        match err {
            ManifestError::Decode { origin, .. } => assert!(origin.contains("broken")),
            other => panic!("expected decode error, got {other:?}"),
        }
    }

    #[test]
    fn test_malformed_stream_is_decode_error() {
        let err = ResourceSet::from_yaml_stream("kind: [Task\n").unwrap_err();
        assert!(matches!(err, ManifestError::Decode { .. }));
    }
}
