//! # bookshelf
//!
//! Leptos + WASM client for the reader dashboard.
//!
//! This crate holds the session store (who is signed in, persisted in
//! `localStorage`), the subscription status controller and view model, and
//! the pages and components that render them. Browser-only code sits behind
//! the `csr` feature so the stores run under native unit tests.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;
