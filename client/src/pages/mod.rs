//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! The admin has exactly two screens, picked from the session state. Pages
//! own the screen layout and delegate the panels to `components`.

pub mod dashboard;
pub mod login;
