//! Domain types for the Stockroom inventory service.
//!
//! This crate contains only pure types with no framework dependencies.
//! Import in `usecase/` and `domain/` layers; never in `infra/` or `handlers/`.

pub mod employee;
pub mod group;
pub mod item;
