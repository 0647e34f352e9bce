//! Error types for view setup.

use std::fmt;

use crate::element::ElementId;

/// Errors that can occur while binding views to a render target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewError {
    /// The element handle does not refer to anything in the render target.
    UnknownElement {
        /// The stale or foreign handle.
        element: ElementId,
    },

    /// No descendant with the requested name exists under the parent.
    MissingElement {
        /// Element the lookup started from.
        parent: ElementId,
        /// Name that was searched for.
        name: String,
    },

    /// Two views were registered under the same name.
    DuplicateView {
        /// The conflicting view name.
        name: String,
    },

    /// `setup_views` was called again while the previous views were still registered.
    AlreadyInitialized,
}

impl fmt::Display for ViewError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewError::UnknownElement { element } => {
                write!(f, "Render target has no element {}", element)
            }
            ViewError::MissingElement { parent, name } => {
                write!(f, "No element named '{}' under {}", name, parent)
            }
            ViewError::DuplicateView { name } => {
                write!(f, "A view named '{}' is already registered", name)
            }
            ViewError::AlreadyInitialized => {
                write!(f, "Views are already set up; dispose them before calling setup again")
            }
        }
    }
}

impl std::error::Error for ViewError {}
