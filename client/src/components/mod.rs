//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page sections and controls while reading/writing shared
//! state from Leptos context providers.

pub mod anchor_link;
pub mod nav_bar;
pub mod skill_bar;
pub mod skills_panel;
pub mod theme_toggle;
