// Workflow definition read endpoints
//
// The axum routes are thin adapters: they collect path parameters into
// RequestParams and hand over to the DefinitionHandler, which owns the
// transport adaptation against the registry ports.
//
// Presence and emptiness are different checks at different layers. The
// handler rejects a parameter the router never supplied, without touching
// the query port. An empty supplied value is forwarded as-is; rejecting it
// is the port's contract, and the classifier turns that BadRequest into the
// same 400 through the other code path.

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use parodos_core::{Group, GroupDetails, Workflow, WorkflowsCommand, WorkflowsQuery};
use std::sync::Arc;

use crate::error::{self, ErrorReply, HttpError};

/// Path parameters the router extracted for one request.
///
/// Replaces per-request context lookups with an explicit struct; a `None`
/// field means the router never supplied that parameter.
#[derive(Debug, Default, Clone)]
pub struct RequestParams {
    pub group_id: Option<String>,
    pub workflow_id: Option<String>,
}

impl RequestParams {
    /// Parameters for a group-scoped request.
    pub fn group(group_id: impl Into<String>) -> Self {
        Self {
            group_id: Some(group_id.into()),
            workflow_id: None,
        }
    }

    /// Parameters for a workflow-scoped request.
    pub fn workflow(group_id: impl Into<String>, workflow_id: impl Into<String>) -> Self {
        Self {
            group_id: Some(group_id.into()),
            workflow_id: Some(workflow_id.into()),
        }
    }
}

/// Adapts transport requests to the registry ports.
pub struct DefinitionHandler {
    // Write seam only; no exposed route consumes it yet.
    #[allow(dead_code)]
    command: Arc<dyn WorkflowsCommand>,
    query: Arc<dyn WorkflowsQuery>,
}

impl DefinitionHandler {
    pub fn new(command: Arc<dyn WorkflowsCommand>, query: Arc<dyn WorkflowsQuery>) -> Self {
        Self { command, query }
    }

    /// List the registered groups.
    pub async fn list_groups(&self) -> Result<Json<Vec<Group>>, ErrorReply> {
        let groups = self.query.list_groups().await.map_err(|e| {
            tracing::error!("Failed to list groups: {}", e);
            error::reply(&e)
        })?;
        Ok(Json(groups))
    }

    /// Fetch one group with its workflow definitions.
    pub async fn get_group(
        &self,
        params: &RequestParams,
    ) -> Result<Json<GroupDetails>, ErrorReply> {
        let Some(group_id) = params.group_id.as_deref() else {
            return Err(error::bad_request("no group id provided"));
        };
        tracing::debug!(group_id, "Fetching group details");
        let details = self.query.get_group(group_id).await.map_err(|e| {
            tracing::error!("Failed to get group {:?}: {}", group_id, e);
            error::reply(&e)
        })?;
        Ok(Json(details))
    }

    /// List the workflow definitions registered in one group.
    pub async fn list_workflows(
        &self,
        params: &RequestParams,
    ) -> Result<Json<Vec<Workflow>>, ErrorReply> {
        let Some(group_id) = params.group_id.as_deref() else {
            return Err(error::bad_request("no group id provided"));
        };
        tracing::debug!(group_id, "Fetching group workflows");
        let workflows = self.query.list_workflows(group_id).await.map_err(|e| {
            tracing::error!("Failed to list workflows of group {:?}: {}", group_id, e);
            error::reply(&e)
        })?;
        Ok(Json(workflows))
    }

    /// Fetch a single workflow definition.
    pub async fn get_workflow(&self, params: &RequestParams) -> Result<Json<Workflow>, ErrorReply> {
        let Some(group_id) = params.group_id.as_deref() else {
            return Err(error::bad_request("no group id provided"));
        };
        let Some(workflow_id) = params.workflow_id.as_deref() else {
            return Err(error::bad_request("no workflow id provided"));
        };
        tracing::debug!(group_id, workflow_id, "Fetching workflow");
        let workflow = self
            .query
            .get_workflow(group_id, workflow_id)
            .await
            .map_err(|e| {
                tracing::error!(
                    "Failed to get workflow {:?} of group {:?}: {}",
                    workflow_id,
                    group_id,
                    e
                );
                error::reply(&e)
            })?;
        Ok(Json(workflow))
    }
}

/// App state for workflow definition routes
#[derive(Clone)]
pub struct AppState {
    pub handler: Arc<DefinitionHandler>,
}

impl AppState {
    pub fn new(command: Arc<dyn WorkflowsCommand>, query: Arc<dyn WorkflowsQuery>) -> Self {
        Self {
            handler: Arc::new(DefinitionHandler::new(command, query)),
        }
    }
}

/// Create workflow definition routes
pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/v1/groups", get(list_groups))
        .route("/v1/groups/:group_id", get(get_group))
        .route("/v1/groups/:group_id/workflows", get(list_workflows))
        .route(
            "/v1/groups/:group_id/workflows/:workflow_id",
            get(get_workflow),
        )
        .with_state(state)
}

/// GET /v1/groups - List the registered groups
#[utoipa::path(
    get,
    path = "/v1/groups",
    responses(
        (status = 200, description = "List of registered groups", body = Vec<Group>),
        (status = 500, description = "Internal error", body = HttpError)
    ),
    tag = "workflows"
)]
pub async fn list_groups(State(state): State<AppState>) -> Result<Json<Vec<Group>>, ErrorReply> {
    state.handler.list_groups().await
}

/// GET /v1/groups/{group_id} - Get the details of a registered group
#[utoipa::path(
    get,
    path = "/v1/groups/{group_id}",
    params(
        ("group_id" = String, Path, description = "Name of the group")
    ),
    responses(
        (status = 200, description = "Group details", body = GroupDetails),
        (status = 400, description = "Invalid group id", body = HttpError),
        (status = 404, description = "Group not found", body = HttpError),
        (status = 500, description = "Internal error", body = HttpError)
    ),
    tag = "workflows"
)]
pub async fn get_group(
    State(state): State<AppState>,
    Path(group_id): Path<String>,
) -> Result<Json<GroupDetails>, ErrorReply> {
    state
        .handler
        .get_group(&RequestParams::group(group_id))
        .await
}

/// GET /v1/groups/{group_id}/workflows - List the workflow definitions in a group
#[utoipa::path(
    get,
    path = "/v1/groups/{group_id}/workflows",
    params(
        ("group_id" = String, Path, description = "Name of the group")
    ),
    responses(
        (status = 200, description = "Workflow definitions registered in the group", body = Vec<Workflow>),
        (status = 400, description = "Invalid group id", body = HttpError),
        (status = 404, description = "Group not found", body = HttpError),
        (status = 500, description = "Internal error", body = HttpError)
    ),
    tag = "workflows"
)]
pub async fn list_workflows(
    State(state): State<AppState>,
    Path(group_id): Path<String>,
) -> Result<Json<Vec<Workflow>>, ErrorReply> {
    state
        .handler
        .list_workflows(&RequestParams::group(group_id))
        .await
}

/// GET /v1/groups/{group_id}/workflows/{workflow_id} - Get a workflow definition
#[utoipa::path(
    get,
    path = "/v1/groups/{group_id}/workflows/{workflow_id}",
    params(
        ("group_id" = String, Path, description = "Name of the group"),
        ("workflow_id" = String, Path, description = "Name of the workflow")
    ),
    responses(
        (status = 200, description = "Workflow definition", body = Workflow),
        (status = 400, description = "Invalid group or workflow id", body = HttpError),
        (status = 404, description = "Workflow not found", body = HttpError),
        (status = 500, description = "Internal error", body = HttpError)
    ),
    tag = "workflows"
)]
pub async fn get_workflow(
    State(state): State<AppState>,
    Path((group_id, workflow_id)): Path<(String, String)>,
) -> Result<Json<Workflow>, ErrorReply> {
    state
        .handler
        .get_workflow(&RequestParams::workflow(group_id, workflow_id))
        .await
}
