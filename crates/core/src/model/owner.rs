use serde::{Deserialize, Serialize};

/// The person the portfolio presents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Owner {
    pub name: String,
    #[serde(default)]
    pub headline: String,
    /// Target of "Request Code" links on projects without a live demo.
    pub email: String,
    /// Public code-hosting profile; fallback for projects without a repo.
    pub profile_url: String,
}

impl Owner {
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }
}
