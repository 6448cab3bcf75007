// Workflow catalog entity types
//
// These are the wire-facing shapes served by the API. Groups and workflows
// are produced by an external registry and are read-only here; identity is
// the group name, and the (group, workflow) pair for workflow definitions.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

#[cfg(feature = "openapi")]
use utoipa::ToSchema;

/// A named collection of workflow definitions, backed by a repository.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct Group {
    #[cfg_attr(
        feature = "openapi",
        schema(min_length = 4, max_length = 16, example = "kogito-examples")
    )]
    pub name: String,
    #[cfg_attr(
        feature = "openapi",
        schema(
            min_length = 10,
            example = "https://github.com/kiegroup/kogito-examples/tree/stable"
        )
    )]
    pub repository_url: String,
}

/// A group joined with the workflow definitions registered in it.
///
/// Workflows keep the order the registry returned them in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct GroupDetails {
    #[serde(flatten)]
    pub group: Group,
    pub workflows: Vec<Workflow>,
}

/// A named, parameterized unit of work belonging to exactly one group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct Workflow {
    #[serde(default)]
    pub meta: BTreeMap<String, String>,
    #[cfg_attr(
        feature = "openapi",
        schema(min_length = 3, example = "fahrenheit_to_celsius")
    )]
    pub name: String,
    /// Opaque JSON document; the catalog never interprets it.
    #[serde(default)]
    #[cfg_attr(
        feature = "openapi",
        schema(value_type = String, example = "{ 'fahrenheit': 100 }")
    )]
    pub input_arguments: Value,
}

impl Workflow {
    /// Workflow with the given name and no metadata or arguments.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            meta: BTreeMap::new(),
            name: name.into(),
            input_arguments: Value::Null,
        }
    }
}

/// One run of a workflow. Extension point: no route serves executions yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct WorkflowExecution {
    #[serde(flatten)]
    pub workflow: Workflow,
    #[cfg_attr(
        feature = "openapi",
        schema(
            value_type = String,
            example = "{ 'fahrenheit': 100, 'subtractValue': 32.0, 'multiplyValue': 0.5556, 'difference': 68.0, 'product': 37.7808 }"
        )
    )]
    pub result: Value,
    #[cfg_attr(feature = "openapi", schema(value_type = String, format = DateTime))]
    pub timestamp: String,
}
