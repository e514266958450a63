mod repo;
mod tree;
mod user;

pub use repo::{CODE_HOST, RepoRef, Repository};
pub use tree::{EntryKind, HierarchyNode, TreeEntry, TreeResponse};
pub use user::UserProfile;
