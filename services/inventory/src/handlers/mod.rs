//! HTTP handlers.
//!
//! Views render JSON contexts: read pages return their data, form pages
//! return `{values, errors}` plus whatever choice lists the form needs.
//! A failed submission re-renders the same context with 200 so the client
//! can redisplay the form; workflow errors (missing item, missing session)
//! surface through [`crate::error::InventoryError`].

pub mod account;
pub mod export;
pub mod item;
pub mod pages;
pub mod profile;
