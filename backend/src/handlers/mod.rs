//! API handlers

pub mod fallback;
pub mod health;
pub mod user;

pub use fallback::route_not_found;
pub use health::{health_check, root};
pub use user::{create_user, delete_user, get_user, list_users, update_user};
