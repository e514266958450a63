pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod export;
pub mod hierarchy;
pub mod layout;
pub mod model;
pub mod serve;
pub mod style;

pub use api::{ApiClient, ApiError};
pub use cli::Cli;
pub use config::{Config, Theme};
pub use hierarchy::HierarchyError;
pub use layout::{Direction, FlowEdge, FlowNode, Flowchart};
pub use model::{EntryKind, HierarchyNode, RepoRef, TreeEntry, TreeResponse};
pub use serve::FlowchartData;
