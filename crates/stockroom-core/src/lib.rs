//! Shared service plumbing: health handlers, request-id middleware, tracing.

pub mod health;
pub mod middleware;
pub mod tracing;
