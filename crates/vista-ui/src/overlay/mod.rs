//! Built-in transient overlays owned by the [`ViewManager`](crate::ViewManager).
//!
//! - Floating text: a toast that shows a message, holds, fades out and hides itself
//! - Dialog box: a modal with either an OK button or Yes/No buttons and one-shot callbacks
//! - Circle loader: an indeterminate spinner toggled on and off
//!
//! Each overlay is bound to named elements under the root at setup time. A missing overlay
//! element disables that overlay instead of failing setup.

mod dialog;
mod floating_text;
mod loader;

pub use dialog::{DialogCallback, DialogMode};
pub use floating_text::FloatingTextState;

pub(crate) use dialog::{DialogBox, DialogButton};
pub(crate) use floating_text::{FloatingText, ToastPhase, ToastTimer};
pub(crate) use loader::CircleLoader;

/// Element names the overlays bind to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlayNames {
    /// Floating text container.
    pub floating_text: String,
    /// Label inside the floating text container.
    pub floating_text_label: String,
    /// Dialog box container.
    pub dialog_box: String,
    /// Title label inside the dialog box.
    pub dialog_title: String,
    /// Message label inside the dialog box.
    pub dialog_message: String,
    pub ok_button: String,
    pub yes_button: String,
    pub no_button: String,
    /// Circle loader element.
    pub circle_loader: String,
}

impl Default for OverlayNames {
    fn default() -> Self {
        Self {
            floating_text: "FloatingText".to_string(),
            floating_text_label: "FloatingTextLabel".to_string(),
            dialog_box: "DialogBox".to_string(),
            dialog_title: "DialogTitle".to_string(),
            dialog_message: "DialogMessage".to_string(),
            ok_button: "OkButton".to_string(),
            yes_button: "YesButton".to_string(),
            no_button: "NoButton".to_string(),
            circle_loader: "CircleLoader".to_string(),
        }
    }
}
