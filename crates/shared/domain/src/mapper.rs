//! Mapping between wire shapes and the stored user entity.
//!
//! Every function is pure. Absent input maps to absent output, except
//! [`to_response_list`] which always yields a (possibly empty) list.

use crate::user::{User, UserRequest, UserResponse};

/// Build an unsaved user from a creation request.
pub fn to_entity(request: Option<UserRequest>) -> Option<User> {
    request.map(User::from)
}

/// Overwrite both names of `existing` with the values in `request`.
///
/// The identifier of `existing` is kept as is. A missing request leaves
/// the existing user untouched.
pub fn apply_update(existing: Option<User>, request: Option<UserRequest>) -> Option<User> {
    let mut user = existing?;
    if let Some(request) = request {
        user.first_name = request.first_name;
        user.last_name = request.last_name;
    }
    Some(user)
}

/// Project a user onto the response shape.
pub fn to_response(user: Option<User>) -> Option<UserResponse> {
    user.map(UserResponse::from)
}

/// Project a list of users onto response shapes.
pub fn to_response_list(users: Option<Vec<User>>) -> Vec<UserResponse> {
    users
        .unwrap_or_default()
        .into_iter()
        .map(UserResponse::from)
        .collect()
}
