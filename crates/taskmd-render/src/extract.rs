//! Render-ready view of a Task.

use taskmd_manifest::Task;

use crate::value::stringify;

/// The fields of a [`Task`] that appear in its documentation, in manifest order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskReference<'a> {
    pub name: &'a str,
    pub description: &'a str,
    pub params: Vec<ParamEntry<'a>>,
    pub workspaces: Vec<WorkspaceEntry<'a>>,
    pub results: Vec<ResultEntry<'a>>,
}

/// A parameter with its default already stringified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamEntry<'a> {
    pub name: &'a str,
    pub description: &'a str,
    pub default: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkspaceEntry<'a> {
    pub name: &'a str,
    pub description: &'a str,
    pub optional: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultEntry<'a> {
    pub name: &'a str,
    pub description: &'a str,
}

impl<'a> TaskReference<'a> {
    pub fn extract(task: &'a Task) -> Self {
        Self {
            name: task.name(),
            description: task.description(),
            params: task
                .params()
                .iter()
                .map(|p| ParamEntry {
                    name: &p.name,
                    description: &p.description,
                    default: p.default.as_ref().map(stringify),
                })
                .collect(),
            workspaces: task
                .workspaces()
                .iter()
                .map(|w| WorkspaceEntry {
                    name: &w.name,
                    description: &w.description,
                    optional: w.optional,
                })
                .collect(),
            results: task
                .results()
                .iter()
                .map(|r| ResultEntry {
                    name: &r.name,
                    description: &r.description,
                })
                .collect(),
        }
    }
}
