// Workflow Catalog Domain
//
// This crate holds everything the HTTP transport depends on but does not own:
//
// - Domain entity types (Group, GroupDetails, Workflow, WorkflowExecution)
// - The error taxonomy transports classify into status codes (RegistryError)
// - The read/write ports (WorkflowsQuery, WorkflowsCommand) kept as separate
//   traits so write operations can be added without altering the read path
// - An in-memory registry implementing both ports, used as the data source
//   until a real backend lands

pub mod error;
pub mod registry;
pub mod traits;
pub mod workflow;

// Re-exports for convenience
pub use error::{RegistryError, Result};
pub use registry::InMemoryRegistry;
pub use traits::{WorkflowsCommand, WorkflowsQuery};
pub use workflow::{Group, GroupDetails, Workflow, WorkflowExecution};
