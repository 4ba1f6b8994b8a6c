//! Generic list-panel state shared by the Photos and Music panels.
//!
//! DESIGN
//! ======
//! Both panels follow the same cycle: show a placeholder while loading,
//! replace the whole list on success, and swap in a fixed error line on
//! failure. [`ListEntity`] supplies the per-entity wording so the cycle is
//! written once.

#[cfg(test)]
#[path = "panel_test.rs"]
mod panel_test;

use crate::net::error::ApiError;
use crate::net::types::Photo;

pub const LOADING_TEXT: &str = "Loading...";

/// An entity that can be listed in a dashboard panel.
pub trait ListEntity: Clone + Send + Sync + 'static {
    /// Placeholder when the server returns no items.
    const EMPTY_TEXT: &'static str;
    /// Placeholder when the load fails.
    const ERROR_TEXT: &'static str;
    /// Confirmation prompt before deleting one item.
    const DELETE_PROMPT: &'static str;

    /// Identifier used for delete/update requests.
    fn key(&self) -> Option<&str>;
}

impl ListEntity for Photo {
    const EMPTY_TEXT: &'static str = "No photos yet.";
    const ERROR_TEXT: &'static str = "Error loading photos";
    const DELETE_PROMPT: &'static str = "Delete this photo?";

    fn key(&self) -> Option<&str> {
        self.id()
    }
}

/// Outcome of the latest load of a list panel.
#[derive(Clone, Debug, PartialEq)]
pub enum ListLoad<T> {
    Loading,
    Empty,
    Ready(Vec<T>),
    Failed,
}

impl<T> Default for ListLoad<T> {
    fn default() -> Self {
        Self::Loading
    }
}

impl<T: ListEntity> ListLoad<T> {
    pub fn from_result(result: Result<Vec<T>, ApiError>) -> Self {
        match result {
            Ok(items) if items.is_empty() => Self::Empty,
            Ok(items) => Self::Ready(items),
            Err(e) => {
                leptos::logging::warn!("list load failed: {e}");
                Self::Failed
            }
        }
    }

    /// Text shown in place of rows, or `None` when rows should render.
    pub fn placeholder(&self) -> Option<&'static str> {
        match self {
            Self::Loading => Some(LOADING_TEXT),
            Self::Empty => Some(T::EMPTY_TEXT),
            Self::Failed => Some(T::ERROR_TEXT),
            Self::Ready(_) => None,
        }
    }

    pub fn items(&self) -> &[T] {
        match self {
            Self::Ready(items) => items,
            _ => &[],
        }
    }
}

/// State for one list panel: the list itself plus the form status line.
#[derive(Clone, Debug, PartialEq)]
pub struct ListPanelState<T> {
    pub load: ListLoad<T>,
    pub status: String,
    /// An upload is in flight; the submit button is disabled meanwhile.
    pub uploading: bool,
}

impl<T> Default for ListPanelState<T> {
    fn default() -> Self {
        Self { load: ListLoad::Loading, status: String::new(), uploading: false }
    }
}

pub type PhotoPanelState = ListPanelState<Photo>;
