//! Style class names and transition constants shared by views and overlays.

use std::time::Duration;

/// Fade duration used by every view with [`TransitionStyle::Fade`](crate::TransitionStyle).
pub const VIEW_FADE_DURATION: Duration = Duration::from_millis(200);

/// Applied while an element fades in.
pub const FADE_IN: &str = "fade-in";

/// Applied while an element fades out.
pub const FADE_OUT: &str = "fade-out";

/// Applied to the floating text container while the toast is on screen.
pub const VISIBLE: &str = "visible";

/// Applied to a dialog button while the pointer is held on it.
pub const PRESSED: &str = "pressed";

/// Applied to a dialog button after the pointer is released.
pub const RELEASED: &str = "released";

/// Applied to the active tab button of a tab group.
pub const SELECTED: &str = "selected";
