// In-memory workflow registry
//
// Keeps the whole catalog in memory, which is all the service needs until a
// real backend lands. Also convenient for handler tests and local runs.
// Groups and workflows are held in insertion-ordered maps because listings
// are served in registry order, never re-sorted.

use std::sync::Arc;

use async_trait::async_trait;
use indexmap::IndexMap;
use serde_json::json;
use tokio::sync::RwLock;

use crate::error::{RegistryError, Result};
use crate::traits::{WorkflowsCommand, WorkflowsQuery};
use crate::workflow::{Group, GroupDetails, Workflow};

#[derive(Debug, Clone)]
struct GroupEntry {
    group: Group,
    workflows: IndexMap<String, Workflow>,
}

/// In-memory implementation of both registry ports.
#[derive(Debug, Default, Clone)]
pub struct InMemoryRegistry {
    groups: Arc<RwLock<IndexMap<String, GroupEntry>>>,
}

impl InMemoryRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry seeded with the demo catalog the service has shipped with so
    /// far: the parodos and parodos-service groups and their workflows.
    pub fn with_sample_data() -> Self {
        let mut groups = IndexMap::new();
        groups.insert(
            "parodos".to_string(),
            GroupEntry {
                group: Group {
                    name: "parodos".to_string(),
                    repository_url: "https://github.com/parodos-dev/parodos".to_string(),
                },
                workflows: IndexMap::from([(
                    "fahrenheit_to_celsius".to_string(),
                    Workflow {
                        meta: Default::default(),
                        name: "fahrenheit_to_celsius".to_string(),
                        input_arguments: json!({ "fahrenheit": 100 }),
                    },
                )]),
            },
        );
        groups.insert(
            "parodos-service".to_string(),
            GroupEntry {
                group: Group {
                    name: "parodos-service".to_string(),
                    repository_url: "https://github.com/parodos-dev/parodos-service".to_string(),
                },
                workflows: IndexMap::from([
                    ("test1".to_string(), Workflow::named("test1")),
                    ("test2".to_string(), Workflow::named("test2")),
                ]),
            },
        );
        Self {
            groups: Arc::new(RwLock::new(groups)),
        }
    }

    /// Add a group to the registry, replacing any previous entry of the same
    /// name.
    pub async fn insert_group(&self, group: Group) {
        self.groups.write().await.insert(
            group.name.clone(),
            GroupEntry {
                group,
                workflows: IndexMap::new(),
            },
        );
    }

    /// Add a workflow definition to an existing group.
    pub async fn insert_workflow(&self, group_id: &str, workflow: Workflow) -> Result<()> {
        let mut groups = self.groups.write().await;
        let entry = groups
            .get_mut(group_id)
            .ok_or_else(|| RegistryError::not_found(format!("Group {group_id:?} not found")))?;
        entry.workflows.insert(workflow.name.clone(), workflow);
        Ok(())
    }
}

#[async_trait]
impl WorkflowsQuery for InMemoryRegistry {
    async fn list_groups(&self) -> Result<Vec<Group>> {
        let groups = self.groups.read().await;
        Ok(groups.values().map(|entry| entry.group.clone()).collect())
    }

    async fn get_group(&self, group_id: &str) -> Result<GroupDetails> {
        if group_id.is_empty() {
            return Err(RegistryError::bad_request("No group provided"));
        }
        let groups = self.groups.read().await;
        let entry = groups
            .get(group_id)
            .ok_or_else(|| RegistryError::not_found(format!("Group {group_id:?} not found")))?;
        Ok(GroupDetails {
            group: entry.group.clone(),
            workflows: entry.workflows.values().cloned().collect(),
        })
    }

    async fn list_workflows(&self, group_id: &str) -> Result<Vec<Workflow>> {
        if group_id.is_empty() {
            return Err(RegistryError::bad_request("No group provided"));
        }
        let groups = self.groups.read().await;
        let entry = groups
            .get(group_id)
            .ok_or_else(|| RegistryError::not_found(format!("Group {group_id:?} not found")))?;
        Ok(entry.workflows.values().cloned().collect())
    }

    async fn get_workflow(&self, group_id: &str, workflow_id: &str) -> Result<Workflow> {
        if group_id.is_empty() {
            return Err(RegistryError::bad_request("No group provided"));
        }
        if workflow_id.is_empty() {
            return Err(RegistryError::bad_request("No workflow provided"));
        }
        let groups = self.groups.read().await;
        let entry = groups
            .get(group_id)
            .ok_or_else(|| RegistryError::not_found(format!("Group {group_id:?} not found")))?;
        entry.workflows.get(workflow_id).cloned().ok_or_else(|| {
            RegistryError::not_found(format!(
                "Workflow {workflow_id:?} of group {group_id:?} not found"
            ))
        })
    }
}

impl WorkflowsCommand for InMemoryRegistry {}
