use std::time::Duration;

use crate::animation::{AnimationSystem, fade_out};
use crate::element::{ElementId, RenderTarget};
use crate::overlay::OverlayNames;
use crate::style;

/// Lifecycle of the floating text toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FloatingTextState {
    /// Nothing on screen; a new toast can be shown.
    #[default]
    Idle,
    /// Message visible, waiting for the hold time to pass.
    Showing,
    /// Fade-out running, waiting to hide.
    FadingOut,
}

/// Step of the toast auto-hide sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ToastPhase {
    BeginFade,
    Finish,
}

/// A scheduled toast step, tagged with the manager generation it was scheduled under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ToastTimer {
    pub generation: u64,
    pub phase: ToastPhase,
}

#[derive(Debug)]
pub(crate) struct FloatingText {
    container: ElementId,
    label: ElementId,
    state: FloatingTextState,
    message: String,
}

impl FloatingText {
    pub(crate) fn bind(
        target: &mut dyn RenderTarget,
        root: ElementId,
        names: &OverlayNames,
    ) -> Option<Self> {
        let container = target.find_descendant(root, &names.floating_text)?;
        let label = target.find_descendant(container, &names.floating_text_label)?;

        target.set_displayed(container, false);
        Some(Self {
            container,
            label,
            state: FloatingTextState::Idle,
            message: String::new(),
        })
    }

    pub(crate) fn state(&self) -> FloatingTextState {
        self.state
    }

    pub(crate) fn message(&self) -> &str {
        &self.message
    }

    #[cfg(test)]
    pub(crate) fn container(&self) -> ElementId {
        self.container
    }

    /// Put the message on screen. Returns false, changing nothing, while a toast is active.
    pub(crate) fn show(
        &mut self,
        target: &mut dyn RenderTarget,
        animations: &mut AnimationSystem,
        message: &str,
    ) -> bool {
        if self.state != FloatingTextState::Idle {
            return false;
        }

        self.state = FloatingTextState::Showing;
        self.message.clear();
        self.message.push_str(message);

        target.set_text(self.label, message);
        target.set_displayed(self.container, true);
        target.remove_class(self.container, style::FADE_OUT);
        target.add_class(self.container, style::VISIBLE);
        animations.stop(self.container);
        target.set_opacity(self.container, 1.0);
        true
    }

    /// Start fading out. Only valid while showing.
    pub(crate) fn begin_fade(
        &mut self,
        target: &mut dyn RenderTarget,
        animations: &mut AnimationSystem,
        duration: Duration,
    ) -> bool {
        if self.state != FloatingTextState::Showing {
            return false;
        }

        self.state = FloatingTextState::FadingOut;
        target.remove_class(self.container, style::VISIBLE);
        target.add_class(self.container, style::FADE_OUT);
        animations.animate(target, self.container, fade_out(duration.as_secs_f32()));
        true
    }

    /// Hide the container and become idle. Only valid while fading out.
    pub(crate) fn finish(
        &mut self,
        target: &mut dyn RenderTarget,
        animations: &mut AnimationSystem,
    ) -> bool {
        if self.state != FloatingTextState::FadingOut {
            return false;
        }

        self.state = FloatingTextState::Idle;
        animations.stop(self.container);
        target.set_displayed(self.container, false);
        target.remove_class(self.container, style::FADE_OUT);
        true
    }

    /// Hide the container immediately from any state.
    pub(crate) fn dismiss(&mut self, target: &mut dyn RenderTarget) {
        self.state = FloatingTextState::Idle;
        target.set_displayed(self.container, false);
        target.remove_class(self.container, style::VISIBLE);
        target.remove_class(self.container, style::FADE_OUT);
    }
}
