//! DTO modules that bridge services with templates and APIs.

pub mod analysis;
pub mod api;
pub mod compare;
pub mod main;
pub mod players;
pub mod search;
