//! Vista UI - view lifecycle and overlay management for retained-mode UI trees
//!
//! This crate sits on top of a host widget tree (anything implementing [`RenderTarget`]) and
//! provides:
//! - Named views with show/hide lifecycle hooks and optional fade transitions
//! - A [`ViewManager`] owning the views plus three built-in overlays: a floating text toast,
//!   an OK / Yes-No dialog box and a circle loader
//! - Tab groups that keep one content region displayed at a time
//!
//! ## Quick Start
//!
//! ```rust
//! use std::time::Duration;
//! use vista_ui::{ElementTree, ViewDescriptor, ViewManager, TransitionStyle};
//!
//! let mut tree = ElementTree::new("Root");
//! let root = tree.root();
//! tree.add_child(root, "MainMenu").unwrap();
//! tree.add_child(root, "Settings").unwrap();
//!
//! let mut ui = ViewManager::default();
//! ui.setup_views(
//!     &mut tree,
//!     root,
//!     [
//!         ViewDescriptor::new("MainMenu"),
//!         ViewDescriptor::new("Settings").transition(TransitionStyle::Fade),
//!     ],
//! )
//! .unwrap();
//!
//! ui.show_view(&mut tree, "Settings");
//! assert!(ui.is_view_showing(&tree, "Settings"));
//!
//! // Once per frame:
//! ui.update(&mut tree, Duration::from_millis(16));
//! ```

pub mod animation;
pub mod element;
pub mod error;
pub mod event;
pub mod manager;
pub mod overlay;
pub mod style;
pub mod tabs;
pub mod timer;
pub mod tree;
pub mod view;

pub use animation::{Animation, AnimationState, AnimationSystem, EasingFunction, fade_in, fade_out};
pub use element::{ElementId, RenderTarget};
pub use error::ViewError;
pub use event::{ClickSubscriptions, HandleStatus, SubscriptionId, UiEvent};
pub use manager::{ViewManager, ViewManagerConfig};
pub use overlay::{DialogCallback, DialogMode, FloatingTextState, OverlayNames};
pub use tabs::TabGroup;
pub use timer::{TimerId, TimerQueue};
pub use tree::ElementTree;
pub use view::{ClickBinder, PlainView, TransitionStyle, View, ViewDescriptor, Viewable};
