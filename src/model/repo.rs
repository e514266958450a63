use serde::{Deserialize, Serialize};

/// Code host that file and folder links point at.
pub const CODE_HOST: &str = "https://github.com";

/// Repository summary as returned by the repos/starred listings.
#[derive(Debug, Clone, Deserialize)]
pub struct Repository {
    pub name: String,
    pub full_name: String,
    pub description: Option<String>,
    pub html_url: Option<String>,
    #[serde(default)]
    pub fork: bool,
    #[serde(default)]
    pub stargazers_count: u64,
    #[serde(default)]
    pub forks_count: u64,
    #[serde(default)]
    pub open_issues_count: u64,
    pub language: Option<String>,
    pub default_branch: Option<String>,
    pub updated_at: Option<String>,
}

/// Owner/name/branch triple identifying the repository being visualized.
#[derive(Debug, Clone, Serialize)]
pub struct RepoRef {
    pub owner: String,
    pub repo: String,
    pub default_branch: String,
}

impl RepoRef {
    /// Display label, `owner/repo`.
    pub fn label(&self) -> String {
        format!("{}/{}", self.owner, self.repo)
    }

    /// Code-host URL of a file.
    pub fn blob_url(&self, path: &str) -> String {
        format!(
            "{CODE_HOST}/{}/{}/blob/{}/{}",
            self.owner, self.repo, self.default_branch, path
        )
    }

    /// Code-host URL of a folder.
    pub fn tree_url(&self, path: &str) -> String {
        format!(
            "{CODE_HOST}/{}/{}/tree/{}/{}",
            self.owner, self.repo, self.default_branch, path
        )
    }
}
