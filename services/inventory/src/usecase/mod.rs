pub mod export;
pub mod item;
pub mod login;
pub mod profile;
pub mod register;
