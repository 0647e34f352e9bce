//! Test utilities for Vista.
//!
//! - [`RecordingTarget`] wraps any [`RenderTarget`](vista_ui::RenderTarget) and records every
//!   mutation, so tests can assert on the exact sequence of display and style changes.
//! - [`fixture`] builds element trees shaped like a typical game UI document.
//!
//! # Example
//!
//! ```rust
//! use vista_test_utils::{RecordingTarget, TargetCall, fixture};
//! use vista_ui::RenderTarget;
//!
//! let mut target = RecordingTarget::new(fixture::ui_tree(&["Hud"]));
//! let root = target.inner().root();
//! let hud = target.find_descendant(root, "Hud").unwrap();
//!
//! target.set_displayed(hud, true);
//! assert_eq!(target.calls(), &[TargetCall::SetDisplayed { element: hud, displayed: true }]);
//! ```

pub mod fixture;
mod recording;

pub use recording::{RecordingTarget, TargetCall};
