use vista_ui::{ElementId, RenderTarget};

/// A recorded render target mutation.
#[derive(Debug, Clone, PartialEq)]
pub enum TargetCall {
    SetDisplayed { element: ElementId, displayed: bool },
    AddClass { element: ElementId, class: String },
    RemoveClass { element: ElementId, class: String },
    SetText { element: ElementId, text: String },
    SetOpacity { element: ElementId, opacity: f32 },
}

impl TargetCall {
    /// The element the call mutated.
    pub fn element(&self) -> ElementId {
        match self {
            TargetCall::SetDisplayed { element, .. }
            | TargetCall::AddClass { element, .. }
            | TargetCall::RemoveClass { element, .. }
            | TargetCall::SetText { element, .. }
            | TargetCall::SetOpacity { element, .. } => *element,
        }
    }
}

/// Render target wrapper that forwards everything and records mutations.
///
/// Queries are forwarded without being recorded.
#[derive(Debug, Clone)]
pub struct RecordingTarget<T> {
    inner: T,
    calls: Vec<TargetCall>,
}

impl<T: RenderTarget> RecordingTarget<T> {
    pub fn new(inner: T) -> Self {
        Self {
            inner,
            calls: Vec::new(),
        }
    }

    pub fn inner(&self) -> &T {
        &self.inner
    }

    pub fn inner_mut(&mut self) -> &mut T {
        &mut self.inner
    }

    pub fn into_inner(self) -> T {
        self.inner
    }

    /// All recorded calls, oldest first.
    pub fn calls(&self) -> &[TargetCall] {
        &self.calls
    }

    /// Recorded calls that touched `element`.
    pub fn calls_for(&self, element: ElementId) -> Vec<&TargetCall> {
        self.calls.iter().filter(|c| c.element() == element).collect()
    }

    /// Number of display flag changes made to `element`.
    pub fn count_display_changes(&self, element: ElementId) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, TargetCall::SetDisplayed { element: e, .. } if *e == element))
            .count()
    }

    /// Forget everything recorded so far.
    pub fn clear_calls(&mut self) {
        self.calls.clear();
    }
}

impl<T: RenderTarget> RenderTarget for RecordingTarget<T> {
    fn contains(&self, element: ElementId) -> bool {
        self.inner.contains(element)
    }

    fn find_descendant(&self, parent: ElementId, name: &str) -> Option<ElementId> {
        self.inner.find_descendant(parent, name)
    }

    fn set_displayed(&mut self, element: ElementId, displayed: bool) {
        self.calls.push(TargetCall::SetDisplayed { element, displayed });
        self.inner.set_displayed(element, displayed);
    }

    fn is_displayed(&self, element: ElementId) -> bool {
        self.inner.is_displayed(element)
    }

    fn add_class(&mut self, element: ElementId, class: &str) {
        self.calls.push(TargetCall::AddClass {
            element,
            class: class.to_string(),
        });
        self.inner.add_class(element, class);
    }

    fn remove_class(&mut self, element: ElementId, class: &str) {
        self.calls.push(TargetCall::RemoveClass {
            element,
            class: class.to_string(),
        });
        self.inner.remove_class(element, class);
    }

    fn has_class(&self, element: ElementId, class: &str) -> bool {
        self.inner.has_class(element, class)
    }

    fn set_text(&mut self, element: ElementId, text: &str) {
        self.calls.push(TargetCall::SetText {
            element,
            text: text.to_string(),
        });
        self.inner.set_text(element, text);
    }

    fn set_opacity(&mut self, element: ElementId, opacity: f32) {
        self.calls.push(TargetCall::SetOpacity { element, opacity });
        self.inner.set_opacity(element, opacity);
    }
}
