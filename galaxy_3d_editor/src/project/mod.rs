/// Project module - state of the open project

mod project_context;

pub use project_context::{ProjectContext, ProjectRef};
