//! Markdown document layout.
//!
//! Every document has the same five sections in the same order: title,
//! description, `## Parameters`, `## Workspaces`, `## Results`. A section
//! whose list is empty keeps its heading. Text from the manifest is emitted
//! verbatim, without Markdown escaping.

use std::fmt;

use taskmd_manifest::Task;
use tracing::trace;

use crate::extract::{ParamEntry, ResultEntry, TaskReference, WorkspaceEntry};

/// A Task's reference documentation; its `Display` output is the Markdown text.
#[derive(Debug, Clone)]
pub struct MarkdownDoc<'a> {
    reference: TaskReference<'a>,
}

impl<'a> MarkdownDoc<'a> {
    pub fn new(task: &'a Task) -> Self {
        Self::from_reference(TaskReference::extract(task))
    }

    pub fn from_reference(reference: TaskReference<'a>) -> Self {
        Self { reference }
    }
}

impl fmt::Display for MarkdownDoc<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let doc = &self.reference;

        writeln!(f, "# `{}`", doc.name)?;
        writeln!(f)?;
        writeln!(f, "{}", doc.description)?;
        writeln!(f)?;

        writeln!(f, "## Parameters")?;
        for param in &doc.params {
            write_param(f, param)?;
        }
        writeln!(f)?;

        writeln!(f, "## Workspaces")?;
        for workspace in &doc.workspaces {
            write_workspace(f, workspace)?;
        }
        writeln!(f)?;

        writeln!(f, "## Results")?;
        for result in &doc.results {
            write_result(f, result)?;
        }
        Ok(())
    }
}

fn write_param(f: &mut fmt::Formatter<'_>, param: &ParamEntry<'_>) -> fmt::Result {
    write!(f, "* **{}**: {}", param.name, param.description)?;
    if let Some(default) = &param.default {
        write!(f, " `(Default: {default})`")?;
    }
    writeln!(f)
}

fn write_workspace(f: &mut fmt::Formatter<'_>, workspace: &WorkspaceEntry<'_>) -> fmt::Result {
    let marker = if workspace.optional { " (optional)" } else { "" };
    writeln!(
        f,
        "* **{}**{marker}: {}",
        workspace.name, workspace.description
    )
}

fn write_result(f: &mut fmt::Formatter<'_>, result: &ResultEntry<'_>) -> fmt::Result {
    writeln!(f, "* **{}**: {}", result.name, result.description)
}

/// Render a Task's reference documentation.
pub fn render(task: &Task) -> String {
    let doc = MarkdownDoc::new(task).to_string();
    trace!(task = task.name(), bytes = doc.len(), "rendered markdown");
    doc
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use taskmd_manifest::{ParamSpec, ParamValue, TaskResult, WorkspaceDeclaration};

    fn task(name: &str, description: &str) -> Task {
        let mut task = Task::default();
        task.metadata.name = name.to_string();
        task.spec.description = description.to_string();
        task
    }

    #[test]
    fn test_empty_lists_keep_headings() {
        let doc = render(&task("noop", "Does nothing."));
        assert_eq!(
            doc,
            "# `noop`\n\nDoes nothing.\n\n## Parameters\n\n## Workspaces\n\n## Results\n"
        );
    }

    #[test]
    fn test_empty_description_is_blank_paragraph() {
        let doc = render(&task("noop", ""));
        assert!(doc.starts_with("# `noop`\n\n\n\n## Parameters\n"));
    }

    #[test]
    fn test_param_default_suffix() {
        let mut t = task("p", "");
        t.spec.params = vec![
            ParamSpec {
                name: "required".into(),
                description: "No default".into(),
                default: None,
            },
            ParamSpec {
                name: "mode".into(),
                description: "Run mode".into(),
                default: Some(ParamValue::String("x".into())),
            },
        ];

        let doc = render(&t);
        assert!(doc.contains("* **required**: No default\n"));
        assert!(doc.contains("* **mode**: Run mode `(Default: x)`\n"));
    }

    #[test]
    fn test_optional_workspace_marker() {
        let mut t = task("w", "");
        t.spec.workspaces = vec![
            WorkspaceDeclaration {
                name: "cache".into(),
                description: "Shared cache".into(),
                optional: true,
            },
            WorkspaceDeclaration {
                name: "src".into(),
                description: "Sources".into(),
                optional: false,
            },
        ];

        let doc = render(&t);
        assert!(doc.contains("* **cache** (optional): Shared cache\n"));
        assert!(doc.contains("* **src**: Sources\n"));
    }

    #[test]
    fn test_results_section_is_last() {
        let mut t = task("r", "");
        t.spec.results = vec![TaskResult {
            name: "digest".into(),
            description: "Image digest".into(),
        }];

        let doc = render(&t);
        assert!(doc.ends_with("## Results\n* **digest**: Image digest\n"));
    }

    #[test]
    fn test_text_is_not_escaped() {
        let doc = render(&task("a_b", "Uses *stars* and <tags>."));
        assert!(doc.contains("# `a_b`\n"));
        assert!(doc.contains("Uses *stars* and <tags>.\n"));
    }
}
