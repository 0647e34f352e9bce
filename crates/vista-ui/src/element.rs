//! Element handles and the render target seam.
//!
//! Vista never owns the widget tree. Views and overlays hold [`ElementId`] handles and push
//! every visibility or style change through a [`RenderTarget`] borrowed for the duration of
//! the call.

use std::fmt;

/// Handle to an element inside a render target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(pub usize);

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ElementId({})", self.0)
    }
}

/// Operations Vista needs from the host widget tree.
///
/// Queries on an element the target does not contain return the neutral value (`false`,
/// `None`); mutations of such an element are ignored.
pub trait RenderTarget {
    /// Check whether the element exists.
    fn contains(&self, element: ElementId) -> bool;

    /// Find the first descendant of `parent` with the given name, breadth first.
    fn find_descendant(&self, parent: ElementId, name: &str) -> Option<ElementId>;

    /// Set whether the element takes part in layout and rendering.
    fn set_displayed(&mut self, element: ElementId, displayed: bool);

    /// Whether the element is currently displayed.
    fn is_displayed(&self, element: ElementId) -> bool;

    /// Add a style class. Adding a class twice is a no-op.
    fn add_class(&mut self, element: ElementId, class: &str);

    /// Remove a style class if present.
    fn remove_class(&mut self, element: ElementId, class: &str);

    /// Check whether the element carries a style class.
    fn has_class(&self, element: ElementId, class: &str) -> bool;

    /// Replace the text content of the element.
    fn set_text(&mut self, element: ElementId, text: &str);

    /// Set the element opacity (0.0 to 1.0).
    fn set_opacity(&mut self, element: ElementId, opacity: f32);

    /// Add or remove a class depending on `enabled`.
    fn toggle_class(&mut self, element: ElementId, class: &str, enabled: bool) {
        if enabled {
            self.add_class(element, class);
        } else {
            self.remove_class(element, class);
        }
    }
}
