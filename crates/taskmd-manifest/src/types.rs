//! Tekton `Task` resource model.
//!
//! Only the fields the documentation generator reads are modelled. Decoding
//! is permissive: unknown fields are ignored and missing or `null` fields take
//! their zero value.

use indexmap::IndexMap;
use serde::de::{self, Deserializer};
use serde::Deserialize;
use serde_json::Value;

/// Kind string identifying a Task resource.
pub const TASK_KIND: &str = "Task";

/// A Tekton Task resource.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Task {
    #[serde(deserialize_with = "nullable")]
    pub api_version: String,
    #[serde(deserialize_with = "nullable")]
    pub kind: String,
    #[serde(deserialize_with = "nullable")]
    pub metadata: ObjectMeta,
    #[serde(deserialize_with = "nullable")]
    pub spec: TaskSpec,
}

impl Task {
    /// The task name (`metadata.name`).
    pub fn name(&self) -> &str {
        &self.metadata.name
    }

    /// The task description (`spec.description`).
    pub fn description(&self) -> &str {
        &self.spec.description
    }

    /// Declared parameters, in manifest order.
    pub fn params(&self) -> &[ParamSpec] {
        &self.spec.params
    }

    /// Declared workspaces, in manifest order.
    pub fn workspaces(&self) -> &[WorkspaceDeclaration] {
        &self.spec.workspaces
    }

    /// Declared results, in manifest order.
    pub fn results(&self) -> &[TaskResult] {
        &self.spec.results
    }
}

/// Resource metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ObjectMeta {
    #[serde(deserialize_with = "nullable")]
    pub name: String,
}

/// The `spec` of a Task.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TaskSpec {
    #[serde(deserialize_with = "nullable")]
    pub description: String,
    #[serde(deserialize_with = "nullable")]
    pub params: Vec<ParamSpec>,
    #[serde(deserialize_with = "nullable")]
    pub workspaces: Vec<WorkspaceDeclaration>,
    #[serde(deserialize_with = "nullable")]
    pub results: Vec<TaskResult>,
}

/// A declared parameter. `default: None` means the parameter is required.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ParamSpec {
    #[serde(deserialize_with = "nullable")]
    pub name: String,
    #[serde(deserialize_with = "nullable")]
    pub description: String,
    pub default: Option<ParamValue>,
}

/// A declared workspace.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct WorkspaceDeclaration {
    #[serde(deserialize_with = "nullable")]
    pub name: String,
    #[serde(deserialize_with = "nullable")]
    pub description: String,
    #[serde(deserialize_with = "nullable")]
    pub optional: bool,
}

/// A declared result.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TaskResult {
    #[serde(deserialize_with = "nullable")]
    pub name: String,
    #[serde(deserialize_with = "nullable")]
    pub description: String,
}

/// A parameter value, as used for parameter defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamValue {
    String(String),
    Array(Vec<String>),
    Object(IndexMap<String, String>),
}

impl ParamValue {
    /// Build a value from its JSON form.
    ///
    /// Accepts the explicit encoding (`{type, stringVal | arrayVal | objectVal}`)
    /// as well as the plain one (scalar, sequence or mapping).
    pub fn from_json(value: Value) -> Result<Self, String> {
        match value {
            Value::Array(items) => array(items).map(Self::Array),
            Value::Object(map) => match Self::from_tagged(&map)? {
                Some(tagged) => Ok(tagged),
                None => object(map).map(Self::Object),
            },
            scalar_value => scalar(scalar_value).map(Self::String),
        }
    }

    fn from_tagged(map: &serde_json::Map<String, Value>) -> Result<Option<Self>, String> {
        let Some(Value::String(tag)) = map.get("type") else {
            return Ok(None);
        };

        let payload_key = match tag.as_str() {
            "string" => "stringVal",
            "array" => "arrayVal",
            "object" => "objectVal",
            _ => return Ok(None),
        };
        let Some(payload) = map.get(payload_key) else {
            return Ok(None);
        };

        let value = match (tag.as_str(), payload.clone()) {
            ("string", payload) => Self::String(scalar(payload)?),
            ("array", Value::Array(items)) => Self::Array(array(items)?),
            ("object", Value::Object(entries)) => Self::Object(object(entries)?),
            (_, other) => {
                return Err(format!(
                    "{payload_key} must match type {tag}, found {}",
                    json_type(&other)
                ))
            }
        };
        Ok(Some(value))
    }
}

impl<'de> Deserialize<'de> for ParamValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Value::deserialize(deserializer)?;
        Self::from_json(raw).map_err(de::Error::custom)
    }
}

fn scalar(value: Value) -> Result<String, String> {
    match value {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        other => Err(format!("expected a scalar, found {}", json_type(&other))),
    }
}

fn array(items: Vec<Value>) -> Result<Vec<String>, String> {
    items.into_iter().map(scalar).collect()
}

fn object(entries: serde_json::Map<String, Value>) -> Result<IndexMap<String, String>, String> {
    entries
        .into_iter()
        .map(|(key, value)| Ok((key, scalar(value)?)))
        .collect()
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Treat an explicit `null` the same as an absent field.
fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}
