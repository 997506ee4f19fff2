//! Permission group names.

/// Default group granted to every registered identity. Item mutation,
/// profile editing and spreadsheet export all require it.
pub const EMPLOYEE: &str = "employee";

/// Returns `true` when at least one held group is in the allow-list.
pub fn any_allowed(held: &[String], allowed: &[&str]) -> bool {
    held.iter().any(|g| allowed.contains(&g.as_str()))
}
