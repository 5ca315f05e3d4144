//! Markdown reference documentation for Tekton Tasks.

pub mod extract;
pub mod markdown;
pub mod value;

pub use extract::{ParamEntry, ResultEntry, TaskReference, WorkspaceEntry};
pub use markdown::{render, MarkdownDoc};
pub use value::stringify;
