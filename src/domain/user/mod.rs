use serde::{Deserialize, Serialize};

// ============================================================================
// User Domain - fixture records owned by the user service
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
}

impl User {
    fn new(id: i64, name: &str, email: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            email: email.to_string(),
        }
    }
}

/// Users present at process start.
pub fn fixture_users() -> Vec<User> {
    vec![
        User::new(1, "John Doe", "john@example.com"),
        User::new(2, "Jane Smith", "jane@example.com"),
        User::new(3, "Bob Johnson", "bob@example.com"),
    ]
}

pub fn find_user(users: &[User], id: i64) -> Option<&User> {
    users.iter().find(|u| u.id == id)
}
