//! Pointer events and click subscriptions.

use indexmap::IndexMap;

use crate::element::ElementId;

/// Pointer events delivered by the host, already hit-tested to an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiEvent {
    /// Pointer pressed on the element.
    PointerDown(ElementId),
    /// Pointer released on the element.
    PointerUp(ElementId),
    /// Element was clicked.
    Click(ElementId),
}

impl UiEvent {
    /// The element the event targets.
    pub fn element(&self) -> ElementId {
        match self {
            UiEvent::PointerDown(e) | UiEvent::PointerUp(e) | UiEvent::Click(e) => *e,
        }
    }
}

/// Whether an event was handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandleStatus {
    Consumed,
    Ignored,
}

impl HandleStatus {
    pub fn is_consumed(&self) -> bool {
        matches!(self, HandleStatus::Consumed)
    }
}

/// Handle to a click subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

enum ClickHandler {
    Once(Box<dyn FnOnce()>),
    Persistent(Box<dyn FnMut()>),
}

struct Subscription {
    element: ElementId,
    handler: ClickHandler,
}

/// Click handlers keyed by element.
///
/// Handlers for the same element fire in subscription order. One-shot handlers are removed
/// before they run, so they fire at most once.
#[derive(Default)]
pub struct ClickSubscriptions {
    next_id: u64,
    subscriptions: IndexMap<SubscriptionId, Subscription>,
}

impl ClickSubscriptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe a handler that runs on every click of the element.
    pub fn on_click(
        &mut self,
        element: ElementId,
        handler: impl FnMut() + 'static,
    ) -> SubscriptionId {
        self.insert(element, ClickHandler::Persistent(Box::new(handler)))
    }

    /// Subscribe a handler that runs on the next click of the element only.
    pub fn on_click_once(
        &mut self,
        element: ElementId,
        handler: impl FnOnce() + 'static,
    ) -> SubscriptionId {
        self.insert(element, ClickHandler::Once(Box::new(handler)))
    }

    fn insert(&mut self, element: ElementId, handler: ClickHandler) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscriptions.insert(id, Subscription { element, handler });
        id
    }

    /// Remove a subscription. Returns false if it was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscriptions.shift_remove(&id).is_some()
    }

    /// Run every handler subscribed to the element. Returns how many ran.
    pub fn dispatch_click(&mut self, element: ElementId) -> usize {
        let ids: Vec<SubscriptionId> = self
            .subscriptions
            .iter()
            .filter(|(_, s)| s.element == element)
            .map(|(id, _)| *id)
            .collect();

        let mut fired = 0;
        for id in ids {
            let is_once = matches!(
                self.subscriptions.get(&id).map(|s| &s.handler),
                Some(ClickHandler::Once(_))
            );

            if is_once {
                if let Some(Subscription {
                    handler: ClickHandler::Once(handler),
                    ..
                }) = self.subscriptions.shift_remove(&id)
                {
                    handler();
                    fired += 1;
                }
            } else if let Some(Subscription {
                handler: ClickHandler::Persistent(handler),
                ..
            }) = self.subscriptions.get_mut(&id)
            {
                handler();
                fired += 1;
            }
        }
        fired
    }

    /// Number of handlers subscribed to the element.
    pub fn count_for(&self, element: ElementId) -> usize {
        self.subscriptions
            .values()
            .filter(|s| s.element == element)
            .count()
    }

    /// Total number of live subscriptions.
    pub fn len(&self) -> usize {
        self.subscriptions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subscriptions.is_empty()
    }
}

impl std::fmt::Debug for ClickSubscriptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClickSubscriptions")
            .field("len", &self.subscriptions.len())
            .finish()
    }
}
