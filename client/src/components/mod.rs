//! Dashboard panel components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Panels read their state from the shared [`crate::controller::AdminContext`]
//! and hand every request back to it; none of them talk to the API directly.

pub mod hero_panel;
pub mod list_panel;
pub mod music_panel;
pub mod photo_panel;
pub mod status_line;
