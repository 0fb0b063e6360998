//! Browser capability seams shared across client state and pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Stores depend on these traits rather than on `web-sys` directly so session
//! and subscription logic can run under native unit tests.

pub mod navigation;
pub mod storage;
