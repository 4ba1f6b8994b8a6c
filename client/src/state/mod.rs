//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`session`, one module per panel, and the
//! upload/delete flows) so components depend on small focused models and
//! the logic stays testable without a browser.

pub mod hero;
pub mod music;
pub mod mutation;
pub mod panel;
pub mod session;
pub mod upload;
