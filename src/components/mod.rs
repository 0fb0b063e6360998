//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components are pure renderers of already-derived view models; fetching and
//! session access stay in `pages`.

pub mod loved_books;
pub mod status_panel;
pub mod subscription_card;
