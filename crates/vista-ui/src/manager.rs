//! The view registry.
//!
//! [`ViewManager`] owns every named [`View`] plus the built-in overlays. There is one manager
//! per running session; the application creates it and hands it (or borrows of it) to whatever
//! needs to show views. Nothing here is global.
//!
//! # Frame flow
//!
//! ```text
//! handle_event(tree, event)   pointer input, routed to dialog buttons and view subscriptions
//! show_view / hide_view / ... UI requests from game code
//! update(tree, delta)         fire due overlay timers, step fades
//! ```

use std::time::Duration;

use indexmap::IndexMap;
use vista_core::profiling::{profile_function, profile_scope};

use crate::animation::AnimationSystem;
use crate::element::{ElementId, RenderTarget};
use crate::error::ViewError;
use crate::event::{ClickSubscriptions, HandleStatus, UiEvent};
use crate::overlay::{
    CircleLoader, DialogBox, DialogCallback, DialogMode, FloatingText, FloatingTextState,
    OverlayNames, ToastPhase, ToastTimer,
};
use crate::timer::TimerQueue;
use crate::view::{View, ViewDescriptor, check_unique};

/// Configuration for the view manager.
#[derive(Debug, Clone)]
pub struct ViewManagerConfig {
    /// How long a floating text stays fully visible before fading.
    pub floating_text_hold: Duration,
    /// How long the floating text fade-out runs before the toast hides.
    pub floating_text_fade_out: Duration,
    /// Element names the overlays bind to.
    pub overlay_names: OverlayNames,
}

impl Default for ViewManagerConfig {
    fn default() -> Self {
        Self {
            floating_text_hold: Duration::from_millis(1000),
            floating_text_fade_out: Duration::from_millis(500),
            overlay_names: OverlayNames::default(),
        }
    }
}

/// Owner of all named views and the floating text, dialog box and circle loader overlays.
pub struct ViewManager {
    config: ViewManagerConfig,
    views: IndexMap<String, View>,
    clicks: ClickSubscriptions,
    animations: AnimationSystem,
    timers: TimerQueue<ToastTimer>,
    floating_text: Option<FloatingText>,
    dialog: Option<DialogBox>,
    loader: Option<CircleLoader>,
    initialized: bool,
    /// Bumped on every setup and teardown. Timers from an older generation are ignored.
    generation: u64,
}

impl ViewManager {
    /// Create an empty manager. Nothing is bound until [`setup_views`](Self::setup_views).
    pub fn new(config: ViewManagerConfig) -> Self {
        Self {
            config,
            views: IndexMap::new(),
            clicks: ClickSubscriptions::new(),
            animations: AnimationSystem::new(),
            timers: TimerQueue::new(),
            floating_text: None,
            dialog: None,
            loader: None,
            initialized: false,
            generation: 0,
        }
    }

    /// The configuration the manager was created with.
    pub fn config(&self) -> &ViewManagerConfig {
        &self.config
    }

    /// Bind views and overlays to the render target.
    ///
    /// Each descriptor's element is looked up by name under `root`. Setup is all-or-nothing:
    /// if any view fails to bind, nothing is registered. Overlays whose elements are missing
    /// are disabled with a warning instead.
    ///
    /// Fails with [`ViewError::AlreadyInitialized`] until the previous views are disposed with
    /// [`dispose_all_views`](Self::dispose_all_views) or [`teardown`](Self::teardown).
    pub fn setup_views(
        &mut self,
        target: &mut dyn RenderTarget,
        root: ElementId,
        descriptors: impl IntoIterator<Item = ViewDescriptor>,
    ) -> Result<(), ViewError> {
        profile_function!();
        if self.initialized {
            return Err(ViewError::AlreadyInitialized);
        }
        if !target.contains(root) {
            return Err(ViewError::UnknownElement { element: root });
        }

        let descriptors: Vec<ViewDescriptor> = descriptors.into_iter().collect();
        check_unique(descriptors.iter().map(|d| d.name()))?;

        let mut views = IndexMap::with_capacity(descriptors.len());
        for descriptor in descriptors {
            let Some(element) = target.find_descendant(root, &descriptor.element_name) else {
                return Err(ViewError::MissingElement {
                    parent: root,
                    name: descriptor.element_name,
                });
            };
            let view = View::new(
                &*target,
                descriptor.name.clone(),
                element,
                descriptor.transition,
                descriptor.behavior,
            )?;
            views.insert(descriptor.name, view);
        }

        for view in views.values_mut() {
            view.bind(&*target, &mut self.clicks);
        }
        self.views = views;

        // Overlays are rebound fresh; work scheduled against the previous binding is void.
        self.generation = self.generation.wrapping_add(1);
        self.timers.clear();
        self.animations.clear();

        let names = &self.config.overlay_names;
        self.floating_text = FloatingText::bind(target, root, names);
        self.dialog = DialogBox::bind(target, root, names);
        self.loader = CircleLoader::bind(target, root, names);

        if self.floating_text.is_none() {
            tracing::warn!("Floating text elements not found, toasts are disabled");
        }
        if self.dialog.is_none() {
            tracing::warn!("Dialog box elements not found, dialogs are disabled");
        }
        if self.loader.is_none() {
            tracing::warn!("Circle loader element not found, loader is disabled");
        }

        self.initialized = true;
        tracing::debug!("Set up {} views", self.views.len());
        Ok(())
    }

    /// Whether views are set up and not yet disposed.
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Show a view by name. Unknown names are ignored; returns whether the view exists.
    pub fn show_view(&mut self, target: &mut dyn RenderTarget, name: &str) -> bool {
        match self.views.get_mut(name) {
            Some(view) => {
                view.show(target, &mut self.animations);
                true
            }
            None => {
                tracing::trace!("show_view: no view named '{}'", name);
                false
            }
        }
    }

    /// Hide a view by name. Unknown names are ignored; returns whether the view exists.
    pub fn hide_view(&mut self, target: &mut dyn RenderTarget, name: &str) -> bool {
        match self.views.get_mut(name) {
            Some(view) => {
                view.hide(target, &mut self.animations);
                true
            }
            None => {
                tracing::trace!("hide_view: no view named '{}'", name);
                false
            }
        }
    }

    /// Look up a view by name.
    pub fn view(&self, name: &str) -> Option<&View> {
        self.views.get(name)
    }

    /// Whether a view with this name is registered.
    pub fn contains_view(&self, name: &str) -> bool {
        self.views.contains_key(name)
    }

    /// View names in registration order.
    pub fn view_names(&self) -> impl Iterator<Item = &str> {
        self.views.keys().map(String::as_str)
    }

    /// Number of registered views.
    pub fn view_count(&self) -> usize {
        self.views.len()
    }

    /// Whether the named view is displayed. Unknown names report false.
    pub fn is_view_showing(&self, target: &dyn RenderTarget, name: &str) -> bool {
        self.views.get(name).is_some_and(|v| v.is_showing(target))
    }

    /// Dispose every view and clear the registry. Idempotent.
    ///
    /// Afterwards `setup_views` may run again. Overlays stay bound until then.
    pub fn dispose_all_views(&mut self) {
        for view in self.views.values_mut() {
            view.dispose(&mut self.clicks);
        }
        if !self.views.is_empty() {
            tracing::debug!("Disposed {} views", self.views.len());
        }
        self.views.clear();
        self.initialized = false;
    }

    /// Dispose all views, hide and drop the overlays and cancel pending timers.
    ///
    /// Pending dialog callbacks are dropped without running.
    pub fn teardown(&mut self, target: &mut dyn RenderTarget) {
        self.dispose_all_views();

        if let Some(toast) = self.floating_text.as_mut() {
            toast.dismiss(target);
        }
        if let Some(dialog) = self.dialog.as_mut() {
            dialog.hide(target);
        }
        if let Some(loader) = self.loader.as_mut() {
            loader.set_shown(target, false);
        }

        self.generation = self.generation.wrapping_add(1);
        self.timers.clear();
        self.animations.clear();
        self.floating_text = None;
        self.dialog = None;
        self.loader = None;
    }

    /// Show a floating text toast.
    ///
    /// Returns false if a toast is already on screen (the request is dropped, not queued) or
    /// no floating text overlay is bound.
    pub fn show_floating_text(&mut self, target: &mut dyn RenderTarget, message: &str) -> bool {
        let Some(toast) = self.floating_text.as_mut() else {
            tracing::warn!("show_floating_text called without a floating text overlay");
            return false;
        };

        if !toast.show(target, &mut self.animations, message) {
            tracing::debug!("Floating text busy, dropping '{}'", message);
            return false;
        }

        self.timers.schedule(
            self.config.floating_text_hold,
            ToastTimer {
                generation: self.generation,
                phase: ToastPhase::BeginFade,
            },
        );
        true
    }

    /// State of the floating text, or `None` without a floating text overlay.
    pub fn floating_text_state(&self) -> Option<FloatingTextState> {
        self.floating_text.as_ref().map(|t| t.state())
    }

    /// Message of the current (or last) toast.
    pub fn floating_text_message(&self) -> Option<&str> {
        self.floating_text.as_ref().map(|t| t.message())
    }

    /// Show the dialog box.
    ///
    /// In [`DialogMode::Ok`] only the OK button is displayed and `positive` runs when it is
    /// clicked. In [`DialogMode::YesNo`] Yes runs `positive` and No runs `negative`. Any click
    /// closes the dialog, and callbacks pending from an earlier call are discarded.
    pub fn show_dialog_box(
        &mut self,
        target: &mut dyn RenderTarget,
        mode: DialogMode,
        title: &str,
        message: &str,
        positive: Option<DialogCallback>,
        negative: Option<DialogCallback>,
    ) -> bool {
        let Some(dialog) = self.dialog.as_mut() else {
            tracing::warn!("show_dialog_box called without a dialog overlay");
            return false;
        };

        dialog.show(target, &mut self.animations, mode, title, message, positive, negative);
        true
    }

    /// Whether the dialog box is displayed.
    pub fn is_dialog_visible(&self, target: &dyn RenderTarget) -> bool {
        self.dialog
            .as_ref()
            .is_some_and(|d| target.is_displayed(d.root()))
    }

    /// Mode of the dialog while it waits for a click.
    pub fn dialog_mode(&self) -> Option<DialogMode> {
        self.dialog.as_ref().and_then(|d| d.mode())
    }

    /// Display the circle loader. Does nothing without a loader overlay.
    pub fn show_circle_loader(&mut self, target: &mut dyn RenderTarget) {
        if let Some(loader) = self.loader.as_mut() {
            loader.set_shown(target, true);
        }
    }

    /// Hide the circle loader.
    pub fn hide_circle_loader(&mut self, target: &mut dyn RenderTarget) {
        if let Some(loader) = self.loader.as_mut() {
            loader.set_shown(target, false);
        }
    }

    /// Whether the circle loader was last shown rather than hidden.
    pub fn is_circle_loader_showing(&self) -> bool {
        self.loader.as_ref().is_some_and(|l| l.is_showing())
    }

    /// Route a pointer event.
    ///
    /// Dialog buttons get press/release styling in every mode and consume clicks they act on.
    /// Remaining clicks go to the handlers views subscribed.
    pub fn handle_event(&mut self, target: &mut dyn RenderTarget, event: UiEvent) -> HandleStatus {
        let element = event.element();

        if let Some(dialog) = self.dialog.as_mut()
            && let Some(button) = dialog.button_at(element)
        {
            return match event {
                UiEvent::PointerDown(_) => {
                    dialog.press_feedback(target, button, true);
                    HandleStatus::Consumed
                }
                UiEvent::PointerUp(_) => {
                    dialog.press_feedback(target, button, false);
                    HandleStatus::Consumed
                }
                UiEvent::Click(_) => {
                    if dialog.click(target, button) {
                        HandleStatus::Consumed
                    } else {
                        HandleStatus::Ignored
                    }
                }
            };
        }

        match event {
            UiEvent::Click(_) if self.clicks.dispatch_click(element) > 0 => HandleStatus::Consumed,
            _ => HandleStatus::Ignored,
        }
    }

    /// Advance overlay timers and fades by one frame.
    pub fn update(&mut self, target: &mut dyn RenderTarget, delta: Duration) {
        profile_function!();
        self.timers.advance(delta);

        {
            profile_scope!("overlay_timers");
            while let Some((due, task)) = self.timers.pop_due() {
                self.run_toast_timer(target, due, task);
            }
        }

        self.animations.update(target, delta.as_secs_f32());
    }

    fn run_toast_timer(&mut self, target: &mut dyn RenderTarget, due: Duration, task: ToastTimer) {
        if task.generation != self.generation {
            tracing::trace!("Ignoring toast timer from generation {}", task.generation);
            return;
        }
        let Some(toast) = self.floating_text.as_mut() else {
            return;
        };

        match task.phase {
            ToastPhase::BeginFade => {
                let fade = self.config.floating_text_fade_out;
                if toast.begin_fade(target, &mut self.animations, fade) {
                    tracing::trace!("Floating text fading out");
                    self.timers.schedule_at(
                        due + fade,
                        ToastTimer {
                            generation: self.generation,
                            phase: ToastPhase::Finish,
                        },
                    );
                }
            }
            ToastPhase::Finish => {
                if toast.finish(target, &mut self.animations) {
                    tracing::trace!("Floating text hidden");
                }
            }
        }
    }

    /// Number of pending overlay timers.
    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    /// Number of live click subscriptions held by views.
    pub fn click_subscription_count(&self) -> usize {
        self.clicks.len()
    }
}

impl Default for ViewManager {
    fn default() -> Self {
        Self::new(ViewManagerConfig::default())
    }
}

impl std::fmt::Debug for ViewManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ViewManager")
            .field("views", &self.views.keys().collect::<Vec<_>>())
            .field("initialized", &self.initialized)
            .field("floating_text", &self.floating_text)
            .field("dialog", &self.dialog)
            .field("loader", &self.loader)
            .field("pending_timers", &self.timers.len())
            .finish()
    }
}
