use serde::Deserialize;

/// Entry of a team member listing.
#[derive(Deserialize, Debug, Clone)]
pub struct Member {
    pub login: String,
}

/// Resolved user profile. `name` and `email` are null for users who have not made them public.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub login: String,
    pub name: Option<String>,
    pub email: Option<String>,
}
