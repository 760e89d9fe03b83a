use serde::Serialize;

const USERS: [&str; 2] = ["Alice", "Bob"];

/// Version tag reported alongside the user list. Bumped when the response
/// shape changes.
const API_VERSION: &str = "v2";

#[derive(Debug, Clone, Serialize)]
pub struct UsersResponse {
    pub users: Vec<String>,
    pub version: String,
}

impl UsersResponse {
    pub fn current() -> Self {
        Self {
            users: USERS.iter().map(|user| user.to_string()).collect(),
            version: API_VERSION.to_string(),
        }
    }
}
