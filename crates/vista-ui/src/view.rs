//! Views: named regions of the render target with a show/hide lifecycle.
//!
//! A [`View`] owns the fixed lifecycle order. Per-view behavior lives in a [`Viewable`]
//! implementation whose hooks all default to no-ops, so an implementation only overrides what
//! it needs and can never skip or reorder a step.
//!
//! Show runs:
//! 1. [`Viewable::on_showing`]
//! 2. display the element
//! 3. for [`TransitionStyle::Fade`], apply the fading-in state
//! 4. [`Viewable::on_shown`]
//!
//! Hide is symmetric with the fading-out state.

use vista_core::alloc::HashSet;

use crate::animation::{AnimationSystem, fade_in, fade_out};
use crate::element::{ElementId, RenderTarget};
use crate::error::ViewError;
use crate::event::{ClickSubscriptions, SubscriptionId};
use crate::style;

/// How a view transitions between shown and hidden.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransitionStyle {
    /// Switch instantly.
    #[default]
    None,
    /// Fade over [`style::VIEW_FADE_DURATION`].
    Fade,
}

/// Lifecycle hooks for a concrete view.
#[allow(unused_variables)]
pub trait Viewable {
    /// Resolve the child elements the view works with. Runs once, at setup.
    fn set_visual_elements(&mut self, target: &dyn RenderTarget, root: ElementId) {}

    /// Subscribe click handlers. Subscriptions made through the binder are released by
    /// [`View::dispose`].
    fn register_button_callbacks(&mut self, binder: &mut ClickBinder<'_>) {}

    /// Release anything [`register_button_callbacks`](Self::register_button_callbacks) set
    /// up outside the binder.
    fn unregister_button_callbacks(&mut self) {}

    /// Runs before the element is displayed.
    fn on_showing(&mut self, target: &mut dyn RenderTarget, root: ElementId) {}

    /// Runs after the element is displayed and any fade-in has started.
    fn on_shown(&mut self, target: &mut dyn RenderTarget, root: ElementId) {}

    /// Runs before the element is hidden.
    fn on_hiding(&mut self, target: &mut dyn RenderTarget, root: ElementId) {}

    /// Runs after the element is hidden.
    fn on_hidden(&mut self, target: &mut dyn RenderTarget, root: ElementId) {}
}

/// A view with no behavior of its own.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainView;

impl Viewable for PlainView {}

/// Scoped access to click subscriptions that records what a view subscribed.
pub struct ClickBinder<'a> {
    target: &'a dyn RenderTarget,
    root: ElementId,
    clicks: &'a mut ClickSubscriptions,
    owned: &'a mut Vec<SubscriptionId>,
}

impl<'a> ClickBinder<'a> {
    /// The root element of the view being bound.
    pub fn root(&self) -> ElementId {
        self.root
    }

    /// Find a named element inside the view.
    pub fn find(&self, name: &str) -> Option<ElementId> {
        self.target.find_descendant(self.root, name)
    }

    /// Subscribe a handler for every click on `element`.
    pub fn on_click(
        &mut self,
        element: ElementId,
        handler: impl FnMut() + 'static,
    ) -> SubscriptionId {
        let id = self.clicks.on_click(element, handler);
        self.owned.push(id);
        id
    }

    /// Subscribe a handler to the named element, if it exists. Returns whether it was found.
    pub fn on_named_click(&mut self, name: &str, handler: impl FnMut() + 'static) -> bool {
        match self.find(name) {
            Some(element) => {
                self.on_click(element, handler);
                true
            }
            None => {
                tracing::warn!("No button named '{}' under {}", name, self.root);
                false
            }
        }
    }
}

/// A named, show/hide-able region of the render target.
pub struct View {
    name: String,
    element: ElementId,
    transition: TransitionStyle,
    behavior: Box<dyn Viewable>,
    subscriptions: Vec<SubscriptionId>,
    bound: bool,
}

impl View {
    /// Create a view over `element`.
    ///
    /// Fails if the render target does not contain the element.
    pub fn new(
        target: &dyn RenderTarget,
        name: impl Into<String>,
        element: ElementId,
        transition: TransitionStyle,
        behavior: Box<dyn Viewable>,
    ) -> Result<Self, ViewError> {
        if !target.contains(element) {
            return Err(ViewError::UnknownElement { element });
        }

        Ok(Self {
            name: name.into(),
            element,
            transition,
            behavior,
            subscriptions: Vec::new(),
            bound: false,
        })
    }

    /// Run the setup hooks: resolve visual elements, then register button callbacks.
    pub fn bind(&mut self, target: &dyn RenderTarget, clicks: &mut ClickSubscriptions) {
        self.behavior.set_visual_elements(target, self.element);

        let mut binder = ClickBinder {
            target,
            root: self.element,
            clicks,
            owned: &mut self.subscriptions,
        };
        self.behavior.register_button_callbacks(&mut binder);
        self.bound = true;
    }

    /// The name the view is registered under.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Root element of the view.
    pub fn element(&self) -> ElementId {
        self.element
    }

    pub fn transition(&self) -> TransitionStyle {
        self.transition
    }

    /// Number of click subscriptions the view currently holds.
    pub fn subscription_count(&self) -> usize {
        self.subscriptions.len()
    }

    /// Show the view.
    ///
    /// Showing an already shown view runs the whole sequence again, restarting the fade.
    pub fn show(&mut self, target: &mut dyn RenderTarget, animations: &mut AnimationSystem) {
        tracing::debug!("Showing view '{}'", self.name);
        self.behavior.on_showing(target, self.element);

        target.set_displayed(self.element, true);
        if self.transition == TransitionStyle::Fade {
            target.remove_class(self.element, style::FADE_OUT);
            target.add_class(self.element, style::FADE_IN);
            animations.animate(
                target,
                self.element,
                fade_in(style::VIEW_FADE_DURATION.as_secs_f32()),
            );
        }

        self.behavior.on_shown(target, self.element);
    }

    /// Hide the view.
    pub fn hide(&mut self, target: &mut dyn RenderTarget, animations: &mut AnimationSystem) {
        tracing::debug!("Hiding view '{}'", self.name);
        self.behavior.on_hiding(target, self.element);

        target.set_displayed(self.element, false);
        if self.transition == TransitionStyle::Fade {
            target.remove_class(self.element, style::FADE_IN);
            target.add_class(self.element, style::FADE_OUT);
            animations.animate(
                target,
                self.element,
                fade_out(style::VIEW_FADE_DURATION.as_secs_f32()),
            );
        }

        self.behavior.on_hidden(target, self.element);
    }

    /// Whether the element is displayed right now, read from the render target.
    pub fn is_showing(&self, target: &dyn RenderTarget) -> bool {
        target.is_displayed(self.element)
    }

    pub fn is_hidden(&self, target: &dyn RenderTarget) -> bool {
        !self.is_showing(target)
    }

    /// Release every click subscription the view made. Safe to call repeatedly.
    pub fn dispose(&mut self, clicks: &mut ClickSubscriptions) {
        if !self.bound {
            return;
        }

        tracing::debug!(
            "Disposing view '{}' ({} subscriptions)",
            self.name,
            self.subscriptions.len()
        );
        for id in self.subscriptions.drain(..) {
            clicks.unsubscribe(id);
        }
        self.behavior.unregister_button_callbacks();
        self.bound = false;
    }
}

impl std::fmt::Debug for View {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("View")
            .field("name", &self.name)
            .field("element", &self.element)
            .field("transition", &self.transition)
            .field("subscriptions", &self.subscriptions.len())
            .finish()
    }
}

/// Describes a view for [`ViewManager::setup_views`](crate::ViewManager::setup_views).
pub struct ViewDescriptor {
    pub(crate) name: String,
    pub(crate) element_name: String,
    pub(crate) transition: TransitionStyle,
    pub(crate) behavior: Box<dyn Viewable>,
}

impl ViewDescriptor {
    /// A plain view whose element has the same name as the view.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            element_name: name.clone(),
            name,
            transition: TransitionStyle::None,
            behavior: Box::new(PlainView),
        }
    }

    /// Bind to an element with a different name.
    pub fn element(mut self, element_name: impl Into<String>) -> Self {
        self.element_name = element_name.into();
        self
    }

    /// Set the show/hide transition. Defaults to [`TransitionStyle::None`].
    pub fn transition(mut self, transition: TransitionStyle) -> Self {
        self.transition = transition;
        self
    }

    /// Attach lifecycle hooks. Defaults to [`PlainView`].
    pub fn behavior(mut self, behavior: impl Viewable + 'static) -> Self {
        self.behavior = Box::new(behavior);
        self
    }

    /// Name of the view to register.
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Check that descriptor names are unique.
pub(crate) fn check_unique<'a>(names: impl IntoIterator<Item = &'a str>) -> Result<(), ViewError> {
    let mut seen = HashSet::new();
    for name in names {
        if !seen.insert(name) {
            return Err(ViewError::DuplicateView {
                name: name.to_string(),
            });
        }
    }
    Ok(())
}
