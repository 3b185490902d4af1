//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `skills` is the static content rendered into the skills section; `ui`
//! holds the small amount of reactive page chrome state.

pub mod skills;
pub mod ui;
