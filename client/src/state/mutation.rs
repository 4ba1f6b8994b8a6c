//! Confirm-then-delete flow shared by the list panels.

#[cfg(test)]
#[path = "mutation_test.rs"]
mod mutation_test;

use std::future::Future;

use crate::net::error::ApiError;

/// What happened to a delete request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The user declined; no request was sent.
    Declined,
    Deleted,
    Failed(ApiError),
}

impl DeleteOutcome {
    /// Whether the list should be reloaded from the server.
    pub fn needs_reload(&self) -> bool {
        !matches!(self, Self::Declined)
    }

    /// Status line for the panel, if any.
    pub fn status_text(&self) -> Option<String> {
        match self {
            Self::Failed(e) => Some(format!("Delete failed: {e}")),
            Self::Declined | Self::Deleted => None,
        }
    }
}

/// Ask `confirm` first and only then run `delete`.
pub async fn delete_if_confirmed<C, D, Fut>(confirm: C, delete: D) -> DeleteOutcome
where
    C: FnOnce() -> bool,
    D: FnOnce() -> Fut,
    Fut: Future<Output = Result<(), ApiError>>,
{
    if !confirm() {
        return DeleteOutcome::Declined;
    }
    match delete().await {
        Ok(()) => DeleteOutcome::Deleted,
        Err(e) => {
            leptos::logging::warn!("delete failed: {e}");
            DeleteOutcome::Failed(e)
        }
    }
}
