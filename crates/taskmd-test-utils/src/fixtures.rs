//! Manifest fixtures.

/// The `build` task used in end-to-end tests, with blank descriptions.
pub const BUILD_TASK: &str = r#"apiVersion: tekton.dev/v1
kind: Task
metadata:
  name: build
spec:
  description: "Builds the app."
  params:
    - name: image
  workspaces:
    - name: source
      optional: true
  results:
    - name: digest
"#;

/// Rendered documentation for [`BUILD_TASK`].
pub const BUILD_TASK_MARKDOWN: &str = "# `build`

Builds the app.

## Parameters
* **image**: 

## Workspaces
* **source** (optional): 

## Results
* **digest**: 
";

/// A Task carrying every kind of parameter default.
pub const DEFAULTS_TASK: &str = r#"apiVersion: tekton.dev/v1
kind: Task
metadata:
  name: publish
spec:
  description: Publishes an image.
  params:
    - name: registry
      description: Target registry
      default: ghcr.io
    - name: tags
      description: Tags to push
      type: array
      default: [latest, stable]
    - name: labels
      description: Image labels
      type: object
      default:
        org: acme
    - name: token
      description: Registry token
  workspaces:
    - name: context
      description: Build context
  results:
    - name: url
      description: Pushed image URL
    - name: digest
      description: Pushed image digest
"#;

/// Rendered documentation for [`DEFAULTS_TASK`].
pub const DEFAULTS_TASK_MARKDOWN: &str = "# `publish`

Publishes an image.

## Parameters
* **registry**: Target registry `(Default: ghcr.io)`
* **tags**: Tags to push `(Default: [latest, stable])`
* **labels**: Image labels `(Default: {})`
* **token**: Registry token

## Workspaces
* **context**: Build context

## Results
* **url**: Pushed image URL
* **digest**: Pushed image digest
";

/// A minimal Task named `name`.
pub fn task_yaml(name: &str) -> String {
    format!(
        "apiVersion: tekton.dev/v1\nkind: Task\nmetadata:\n  name: {name}\nspec:\n  description: The {name} task.\n"
    )
}

/// A minimal non-Task resource of `kind` named `name`.
pub fn resource_yaml(kind: &str, name: &str) -> String {
    format!("apiVersion: v1\nkind: {kind}\nmetadata:\n  name: {name}\n")
}

/// Join documents into a multi-document YAML stream, as `kustomize build` prints.
pub fn yaml_stream<S: AsRef<str>>(documents: &[S]) -> String {
    documents
        .iter()
        .map(|d| d.as_ref().trim_end().to_string())
        .collect::<Vec<_>>()
        .join("\n---\n")
        + "\n"
}
