//! Toolkit user API
//!
//! A small HTTP resource API for user records backed by an in-memory store.
//! The binary in `main.rs` only wires configuration, logging and the
//! listener around [`app::build_app`].

pub mod app;
pub mod config;
pub mod docs;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod state;
pub mod store;
