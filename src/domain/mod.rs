//! Domain model shared by the gateway, controller, and page services.

pub mod analysis;
pub mod player;
pub mod search;
pub mod summary;
pub mod types;
