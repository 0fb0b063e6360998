//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain so each view depends on a small focused model.
//! `session` and `subscription` are plain Rust stores with explicit listener
//! registration; `auth` is the reactive mirror the view tree reads.

pub mod auth;
pub mod observer;
pub mod session;
pub mod subscription;
