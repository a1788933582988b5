use serde::Deserialize;

pub const ADMIN_PERMISSION: &str = "admin";

#[derive(Deserialize, Debug, Clone)]
pub struct Team {
    pub name: String,
    pub slug: String,
    pub permission: String,
}

impl Team {
    /// Whether the team grants admin access on the repository it was listed for.
    pub fn is_admin(&self) -> bool {
        self.permission == ADMIN_PERMISSION
    }
}
