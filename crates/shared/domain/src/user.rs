//! User domain entity and related types.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// User domain entity
///
/// `id` is assigned by the store: it is `None` on a user built for
/// creation and always `Some` on a user read back from the store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Option<i64>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl User {
    /// Create an unsaved user (no identifier yet)
    pub fn new(first_name: Option<String>, last_name: Option<String>) -> Self {
        Self {
            id: None,
            first_name,
            last_name,
        }
    }

    /// Check whether either name contains `term` (case-sensitive).
    ///
    /// The empty term matches every user, including ones with no names.
    pub fn matches(&self, term: &str) -> bool {
        if term.is_empty() {
            return true;
        }

        [&self.first_name, &self.last_name]
            .into_iter()
            .flatten()
            .any(|name| name.contains(term))
    }
}

/// User create/update request (wire shape)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UserRequest {
    /// First name, stored as NULL when absent
    #[validate(length(max = 255, message = "First name must be at most 255 characters"))]
    pub first_name: Option<String>,
    /// Last name, stored as NULL when absent
    #[validate(length(max = 255, message = "Last name must be at most 255 characters"))]
    pub last_name: Option<String>,
}

impl UserRequest {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: Some(first_name.into()),
            last_name: Some(last_name.into()),
        }
    }
}

/// User response (wire shape)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    /// Store-assigned identifier
    pub id: Option<i64>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            first_name: user.first_name,
            last_name: user.last_name,
        }
    }
}

impl From<UserRequest> for User {
    fn from(request: UserRequest) -> Self {
        User::new(request.first_name, request.last_name)
    }
}
