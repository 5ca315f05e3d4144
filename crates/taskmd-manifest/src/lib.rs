//! Tekton Task manifests for taskmd.
//!
//! Tasks arrive either as standalone manifest files ([`load_bundles`]) or as
//! the output of a kustomize build over a directory ([`build_tasks`]). Both
//! paths decode into the same [`Task`] model.

pub mod builder;
pub mod error;
pub mod loader;
pub mod resources;
pub mod types;

pub use builder::{build_tasks, KustomizeBuilder, ManifestBuilder};
pub use error::{ManifestError, Result};
pub use loader::{decode_task, load_bundle, load_bundles, TaskBundle};
pub use resources::{Resource, ResourceSet};
pub use taskmd_common_config::ScanMode;
pub use types::{
    ObjectMeta, ParamSpec, ParamValue, Task, TaskResult, TaskSpec, WorkspaceDeclaration, TASK_KIND,
};
