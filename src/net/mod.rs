//! Networking modules for the subscription REST service.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues HTTP calls and `types` defines the wire schema shared with
//! the session store.

pub mod api;
pub mod types;
