//! Tab groups: a row of tab buttons where exactly one content region is displayed.
//!
//! ```
//! use vista_ui::{ElementTree, RenderTarget, TabGroup, UiEvent};
//!
//! let mut tree = ElementTree::new("Root");
//! let root = tree.root();
//! for name in ["AudioTab", "AudioPage", "VideoTab", "VideoPage"] {
//!     tree.add_child(root, name).unwrap();
//! }
//!
//! let pairs = [("AudioTab", "AudioPage"), ("VideoTab", "VideoPage")];
//! let mut tabs = TabGroup::bind(&mut tree, root, &pairs).unwrap();
//! assert_eq!(tabs.selected(), Some(0));
//!
//! let video_tab = tree.find_descendant(root, "VideoTab").unwrap();
//! tabs.handle_event(&mut tree, UiEvent::Click(video_tab));
//! assert_eq!(tabs.selected(), Some(1));
//! ```

use crate::element::{ElementId, RenderTarget};
use crate::error::ViewError;
use crate::event::{HandleStatus, UiEvent};
use crate::style;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Tab {
    button: ElementId,
    content: ElementId,
}

/// A set of tab buttons, each paired with a content region.
#[derive(Debug, Clone)]
pub struct TabGroup {
    tabs: Vec<Tab>,
    selected: Option<usize>,
}

impl TabGroup {
    /// Bind `(button, content)` name pairs under `root` and select the first tab.
    pub fn bind(
        target: &mut dyn RenderTarget,
        root: ElementId,
        pairs: &[(&str, &str)],
    ) -> Result<Self, ViewError> {
        let find = |name: &str| {
            target
                .find_descendant(root, name)
                .ok_or_else(|| ViewError::MissingElement {
                    parent: root,
                    name: name.to_string(),
                })
        };

        let tabs = pairs
            .iter()
            .map(|(button, content)| -> Result<Tab, ViewError> {
                Ok(Tab {
                    button: find(*button)?,
                    content: find(*content)?,
                })
            })
            .collect::<Result<Vec<_>, ViewError>>()?;

        let mut group = Self {
            tabs,
            selected: None,
        };
        for tab in &group.tabs {
            target.remove_class(tab.button, style::SELECTED);
            target.set_displayed(tab.content, false);
        }
        group.select(target, 0);
        Ok(group)
    }

    /// Number of tabs in the group.
    pub fn tab_count(&self) -> usize {
        self.tabs.len()
    }

    /// Index of the selected tab, `None` for an empty group.
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Content element of the selected tab.
    pub fn selected_content(&self) -> Option<ElementId> {
        self.selected.map(|i| self.tabs[i].content)
    }

    /// Select a tab by index.
    ///
    /// Returns false for an out of range index or the tab that is already selected.
    pub fn select(&mut self, target: &mut dyn RenderTarget, index: usize) -> bool {
        if index >= self.tabs.len() || self.selected == Some(index) {
            return false;
        }

        if let Some(previous) = self.selected {
            let tab = self.tabs[previous];
            target.remove_class(tab.button, style::SELECTED);
            target.set_displayed(tab.content, false);
        }

        let tab = self.tabs[index];
        target.add_class(tab.button, style::SELECTED);
        target.set_displayed(tab.content, true);
        self.selected = Some(index);
        tracing::trace!("Selected tab {}", index);
        true
    }

    /// Index of the tab whose button is `element`.
    pub fn tab_for_button(&self, element: ElementId) -> Option<usize> {
        self.tabs.iter().position(|t| t.button == element)
    }

    /// Select the tab whose button was clicked. Clicks on tab buttons are always consumed,
    /// even when the tab was already selected.
    pub fn handle_event(&mut self, target: &mut dyn RenderTarget, event: UiEvent) -> HandleStatus {
        let UiEvent::Click(element) = event else {
            return HandleStatus::Ignored;
        };
        match self.tab_for_button(element) {
            Some(index) => {
                self.select(target, index);
                HandleStatus::Consumed
            }
            None => HandleStatus::Ignored,
        }
    }
}
