//! Route definitions
//!
//! Every route the server answers is declared here; [`crate::docs`] documents
//! the same handlers.

mod system;
mod user;

pub use system::{docs_routes, system_routes};
pub use user::user_routes;
