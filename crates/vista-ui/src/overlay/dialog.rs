use crate::animation::{AnimationSystem, fade_in};
use crate::element::{ElementId, RenderTarget};
use crate::overlay::OverlayNames;
use crate::style;

/// Which buttons the dialog box offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DialogMode {
    /// A single OK button.
    Ok,
    /// Yes and No buttons.
    YesNo,
}

/// The three dialog buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum DialogButton {
    Ok,
    Yes,
    No,
}

/// Callback fired when a dialog button is clicked.
pub type DialogCallback = Box<dyn FnOnce()>;

pub(crate) struct DialogBox {
    root: ElementId,
    title: ElementId,
    message: ElementId,
    ok: ElementId,
    yes: ElementId,
    no: ElementId,
    mode: Option<DialogMode>,
    positive: Option<DialogCallback>,
    negative: Option<DialogCallback>,
}

impl DialogBox {
    pub(crate) fn bind(
        target: &mut dyn RenderTarget,
        root: ElementId,
        names: &OverlayNames,
    ) -> Option<Self> {
        let dialog = target.find_descendant(root, &names.dialog_box)?;
        let find = |name: &str| target.find_descendant(dialog, name);

        let title = find(&names.dialog_title)?;
        let message = find(&names.dialog_message)?;
        let ok = find(&names.ok_button)?;
        let yes = find(&names.yes_button)?;
        let no = find(&names.no_button)?;

        target.set_displayed(dialog, false);
        Some(Self {
            root: dialog,
            title,
            message,
            ok,
            yes,
            no,
            mode: None,
            positive: None,
            negative: None,
        })
    }

    pub(crate) fn root(&self) -> ElementId {
        self.root
    }

    pub(crate) fn mode(&self) -> Option<DialogMode> {
        self.mode
    }

    pub(crate) fn element_of(&self, button: DialogButton) -> ElementId {
        match button {
            DialogButton::Ok => self.ok,
            DialogButton::Yes => self.yes,
            DialogButton::No => self.no,
        }
    }

    /// Map an element back to the dialog button it belongs to.
    pub(crate) fn button_at(&self, element: ElementId) -> Option<DialogButton> {
        [DialogButton::Ok, DialogButton::Yes, DialogButton::No]
            .into_iter()
            .find(|b| self.element_of(*b) == element)
    }

    pub(crate) fn has_pending_callbacks(&self) -> bool {
        self.positive.is_some() || self.negative.is_some()
    }

    /// Configure the buttons and text, then show the dialog with a fade-in.
    ///
    /// Replaces any callbacks still pending from a previous call; those are dropped unrun.
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn show(
        &mut self,
        target: &mut dyn RenderTarget,
        animations: &mut AnimationSystem,
        mode: DialogMode,
        title: &str,
        message: &str,
        positive: Option<DialogCallback>,
        negative: Option<DialogCallback>,
    ) {
        if self.has_pending_callbacks() {
            tracing::debug!("Dialog callbacks replaced before any button was clicked");
        }

        self.mode = Some(mode);
        self.positive = Some(positive.unwrap_or_else(|| Box::new(|| {})));
        self.negative = match mode {
            DialogMode::Ok => None,
            DialogMode::YesNo => Some(negative.unwrap_or_else(|| Box::new(|| {}))),
        };

        target.set_text(self.title, title);
        target.set_text(self.message, message);

        let yes_no = mode == DialogMode::YesNo;
        target.set_displayed(self.ok, !yes_no);
        target.set_displayed(self.yes, yes_no);
        target.set_displayed(self.no, yes_no);

        target.set_displayed(self.root, true);
        target.remove_class(self.root, style::FADE_OUT);
        target.add_class(self.root, style::FADE_IN);
        animations.animate(target, self.root, fade_in(style::VIEW_FADE_DURATION.as_secs_f32()));
    }

    /// Pressed/released styling, applied to any dialog button regardless of mode.
    pub(crate) fn press_feedback(
        &self,
        target: &mut dyn RenderTarget,
        button: DialogButton,
        pressed: bool,
    ) {
        let element = self.element_of(button);
        target.toggle_class(element, style::PRESSED, pressed);
        target.toggle_class(element, style::RELEASED, !pressed);
    }

    /// Handle a click on a dialog button.
    ///
    /// Takes the matching callback out of its slot, clears the other slot, hides the dialog and
    /// then runs the callback. Clicks on a hidden dialog or on a button the current mode does
    /// not offer do nothing and return false.
    pub(crate) fn click(&mut self, target: &mut dyn RenderTarget, button: DialogButton) -> bool {
        if !target.is_displayed(self.root) {
            return false;
        }

        let callback = match (self.mode, button) {
            (Some(DialogMode::Ok), DialogButton::Ok)
            | (Some(DialogMode::YesNo), DialogButton::Yes) => self.positive.take(),
            (Some(DialogMode::YesNo), DialogButton::No) => self.negative.take(),
            _ => return false,
        };
        let Some(callback) = callback else {
            return false;
        };

        self.positive = None;
        self.negative = None;
        self.mode = None;
        self.hide(target);

        tracing::debug!("Dialog button {:?} clicked", button);
        callback();
        true
    }

    pub(crate) fn hide(&mut self, target: &mut dyn RenderTarget) {
        target.set_displayed(self.root, false);
        target.remove_class(self.root, style::FADE_IN);
    }
}

impl std::fmt::Debug for DialogBox {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DialogBox")
            .field("root", &self.root)
            .field("mode", &self.mode)
            .field("pending_callbacks", &self.has_pending_callbacks())
            .finish()
    }
}
