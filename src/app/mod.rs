pub mod commands;
mod context;

pub use context::WorkflowContext;
