//! sea-orm entities for the inventory service.

pub mod employees;
pub mod group_memberships;
pub mod items;
pub mod users;
