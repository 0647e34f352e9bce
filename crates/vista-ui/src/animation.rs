//! Opacity animations for fading elements.
//!
//! Hosts without a built-in transition system still get visible fades: each fading element
//! gets an [`Animation`] that is stepped by [`AnimationSystem::update`] and written back to the
//! render target with `set_opacity`.
//!
//! # Example
//!
//! ```ignore
//! let mut animations = AnimationSystem::new();
//! animations.animate(&mut tree, element, fade_in(0.2));
//!
//! // Each frame:
//! animations.update(&mut tree, delta_time);
//! ```

use indexmap::IndexMap;
use vista_core::profiling::profile_function;

use crate::element::{ElementId, RenderTarget};

/// Easing functions for animations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EasingFunction {
    /// Linear interpolation
    Linear,
    /// Ease in (slow start)
    EaseIn,
    /// Ease out (slow end)
    EaseOut,
    /// Ease in and out (slow start and end)
    EaseInOut,
}

impl EasingFunction {
    /// Apply the easing function to a normalized time value (0.0 to 1.0).
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);

        match self {
            EasingFunction::Linear => t,
            EasingFunction::EaseIn => t * t,
            EasingFunction::EaseOut => t * (2.0 - t),
            EasingFunction::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    -1.0 + (4.0 - 2.0 * t) * t
                }
            }
        }
    }
}

/// Animation state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationState {
    /// Animation is running
    Running,
    /// Animation is completed
    Completed,
}

/// An opacity tween.
#[derive(Debug, Clone)]
pub struct Animation {
    /// Start value
    from: f32,
    /// End value
    to: f32,
    /// Duration in seconds
    duration: f32,
    /// Elapsed time in seconds
    elapsed: f32,
    easing: EasingFunction,
    state: AnimationState,
}

impl Animation {
    /// Create a new animation from 0.0 to 1.0 over one second.
    pub fn new() -> Self {
        Self {
            from: 0.0,
            to: 1.0,
            duration: 1.0,
            elapsed: 0.0,
            easing: EasingFunction::Linear,
            state: AnimationState::Running,
        }
    }

    /// Set the start value.
    pub fn from(mut self, value: f32) -> Self {
        self.from = value;
        self
    }

    /// Set the end value.
    pub fn to(mut self, value: f32) -> Self {
        self.to = value;
        self
    }

    /// Set the duration in seconds.
    pub fn duration(mut self, duration: f32) -> Self {
        self.duration = duration;
        self
    }

    /// Set the easing function.
    pub fn easing(mut self, easing: EasingFunction) -> Self {
        self.easing = easing;
        self
    }

    /// Get the current value.
    pub fn value(&self) -> f32 {
        if self.duration <= 0.0 {
            return self.to;
        }
        let t = (self.elapsed / self.duration).clamp(0.0, 1.0);
        self.from + (self.to - self.from) * self.easing.apply(t)
    }

    /// Get the current state.
    pub fn state(&self) -> AnimationState {
        self.state
    }

    /// Update the animation by delta time.
    ///
    /// Returns true if the animation is still running.
    pub fn update(&mut self, delta_time: f32) -> bool {
        if self.state == AnimationState::Completed {
            return false;
        }

        self.elapsed += delta_time;
        if self.elapsed >= self.duration {
            self.elapsed = self.duration;
            self.state = AnimationState::Completed;
            return false;
        }

        true
    }
}

impl Default for Animation {
    fn default() -> Self {
        Self::new()
    }
}

/// Runs one opacity animation per element.
#[derive(Debug, Default)]
pub struct AnimationSystem {
    animations: IndexMap<ElementId, Animation>,
}

impl AnimationSystem {
    /// Create a new animation system.
    pub fn new() -> Self {
        Self {
            animations: IndexMap::new(),
        }
    }

    /// Start an animation, replacing any animation already running on the element.
    ///
    /// The starting value is written immediately so the element never flashes.
    pub fn animate(
        &mut self,
        target: &mut dyn RenderTarget,
        element: ElementId,
        animation: Animation,
    ) {
        target.set_opacity(element, animation.value());
        self.animations.insert(element, animation);
    }

    /// Stop the animation on an element, leaving its opacity where it is.
    pub fn stop(&mut self, element: ElementId) -> bool {
        self.animations.shift_remove(&element).is_some()
    }

    /// Get the running animation of an element.
    pub fn get(&self, element: ElementId) -> Option<&Animation> {
        self.animations.get(&element)
    }

    /// Step every animation and write the new opacity. Completed animations write their final
    /// value and are removed.
    pub fn update(&mut self, target: &mut dyn RenderTarget, delta_time: f32) {
        profile_function!();
        self.animations.retain(|element, animation| {
            let running = animation.update(delta_time);
            target.set_opacity(*element, animation.value());
            running
        });
    }

    /// Drop all animations.
    pub fn clear(&mut self) {
        self.animations.clear();
    }

    /// Number of elements with a running animation.
    pub fn len(&self) -> usize {
        self.animations.len()
    }

    /// Check if no animations are running.
    pub fn is_empty(&self) -> bool {
        self.animations.is_empty()
    }
}

/// Fade in from transparent to opaque.
pub fn fade_in(duration: f32) -> Animation {
    Animation::new()
        .from(0.0)
        .to(1.0)
        .duration(duration)
        .easing(EasingFunction::EaseOut)
}

/// Fade out from opaque to transparent.
pub fn fade_out(duration: f32) -> Animation {
    Animation::new()
        .from(1.0)
        .to(0.0)
        .duration(duration)
        .easing(EasingFunction::EaseIn)
}
