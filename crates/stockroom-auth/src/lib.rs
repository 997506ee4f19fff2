//! Identity primitives for the Stockroom inventory service.
//!
//! Password hashing and strength policy, session-token issue/validation,
//! and session cookie builders. The application proper treats these as an
//! opaque collaborator; nothing here touches the datastore.

pub mod cookie;
pub mod password;
pub mod session;
