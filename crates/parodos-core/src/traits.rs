// Registry ports
//
// The transport depends only on these traits. Implementations can be:
// - The in-memory registry in this crate (current data source)
// - A database- or service-backed registry in production
// - Scripted mocks in handler tests

use async_trait::async_trait;

use crate::error::Result;
use crate::workflow::{Group, GroupDetails, Workflow};

// ============================================================================
// WorkflowsQuery - read-only access to the catalog
// ============================================================================

/// Read port for groups and workflow definitions.
///
/// Contract rules binding every implementation:
/// - An empty `group_id` or `workflow_id` argument fails with
///   [`RegistryError::BadRequest`](crate::RegistryError::BadRequest) naming
///   the missing field (e.g. "No group provided"). Presence of a parameter is
///   the transport's concern; emptiness is rejected here.
/// - A well-formed identifier that matches nothing may fail with `NotFound`,
///   and anything else with `Internal`.
/// - No operation has side effects; all are safe to retry.
#[async_trait]
pub trait WorkflowsQuery: Send + Sync {
    /// List every registered group, in registry order.
    async fn list_groups(&self) -> Result<Vec<Group>>;

    /// Fetch one group together with its workflow definitions.
    async fn get_group(&self, group_id: &str) -> Result<GroupDetails>;

    /// List the workflow definitions registered in a group, in registry order.
    async fn list_workflows(&self, group_id: &str) -> Result<Vec<Workflow>>;

    /// Fetch a single workflow definition.
    async fn get_workflow(&self, group_id: &str, workflow_id: &str) -> Result<Workflow>;
}

// ============================================================================
// WorkflowsCommand - write seam, no operations yet
// ============================================================================

/// Write port for the catalog.
///
/// Deliberately empty: no exposed route mutates anything today, but the
/// handler already holds this seam so future write operations land without
/// altering the read contract or its tests.
pub trait WorkflowsCommand: Send + Sync {}
