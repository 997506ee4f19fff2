//! Employee profile types.

use uuid::Uuid;

/// Application-level profile attached 1:1 to an identity record.
///
/// `user_id` is a non-owning back-reference: the identity subsystem owns the
/// `users` row, and deleting it cascades to the employee at the schema level.
/// Nullable so an employee can exist detached from a login, though the
/// registration workflow never leaves it detached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Employee {
    pub id: i64,
    pub user_id: Option<Uuid>,
    pub name: String,
    pub position: String,
}

/// Profile-page locator for a user id, used for post-mutation redirects.
pub fn profile_path(user_id: Uuid) -> String {
    format!("/user/{user_id}/")
}
