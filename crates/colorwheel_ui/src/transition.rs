//! Timed transitions between two appearances of a widget.
//!
//! Transitions are fire-and-forget: the owner samples them with the current
//! time while drawing and checks [`Transition::is_finished`] on each tick to
//! run its completion step. There is no cancellation.

use std::time::Duration;

use web_time::Instant;

use crate::layout::Bounds;

/// Affine placement of a widget relative to its layout bounds.
///
/// Scale and rotation pivot on the center of the bounds; translation is
/// applied afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub translate: (f32, f32),
    pub scale: f32,
    /// Rotation in radians
    pub rotation: f32,
}

impl Transform {
    pub const IDENTITY: Self = Self {
        translate: (0.0, 0.0),
        scale: 1.0,
        rotation: 0.0,
    };

    pub fn translated(mut self, dx: f32, dy: f32) -> Self {
        self.translate = (self.translate.0 + dx, self.translate.1 + dy);
        self
    }

    pub fn scaled(mut self, scale: f32) -> Self {
        self.scale *= scale;
        self
    }

    pub fn rotated(mut self, radians: f32) -> Self {
        self.rotation += radians;
        self
    }

    /// Componentwise interpolation, `t` in `[0, 1]`
    pub fn lerp(a: Self, b: Self, t: f32) -> Self {
        Self {
            translate: (
                lerp(a.translate.0, b.translate.0, t),
                lerp(a.translate.1, b.translate.1, t),
            ),
            scale: lerp(a.scale, b.scale, t),
            rotation: lerp(a.rotation, b.rotation, t),
        }
    }

    /// Map an `image_width` x `image_height` bitmap into `bounds` with this transform applied.
    pub fn to_skia(&self, bounds: Bounds, image_width: u32, image_height: u32) -> tiny_skia::Transform {
        let center = bounds.center();
        let fit_x = bounds.width / image_width.max(1) as f32;
        let fit_y = bounds.height / image_height.max(1) as f32;
        tiny_skia::Transform::from_translate(center.x + self.translate.0, center.y + self.translate.1)
            .pre_concat(tiny_skia::Transform::from_rotate(self.rotation.to_degrees()))
            .pre_scale(self.scale * fit_x, self.scale * fit_y)
            .pre_translate(-(image_width as f32) / 2.0, -(image_height as f32) / 2.0)
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// What a transition animates: placement and opacity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Appearance {
    pub transform: Transform,
    pub opacity: f32,
}

impl Appearance {
    /// Fully visible, untransformed
    pub const SHOWN: Self = Self {
        transform: Transform::IDENTITY,
        opacity: 1.0,
    };

    pub fn new(transform: Transform, opacity: f32) -> Self {
        Self { transform, opacity }
    }

    pub fn lerp(a: Self, b: Self, t: f32) -> Self {
        Self {
            transform: Transform::lerp(a.transform, b.transform, t),
            opacity: lerp(a.opacity, b.opacity, t),
        }
    }
}

impl Default for Appearance {
    fn default() -> Self {
        Self::SHOWN
    }
}

/// An eased interpolation from one appearance to another.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    from: Appearance,
    to: Appearance,
    started: Instant,
    duration: Duration,
}

impl Transition {
    pub fn new(from: Appearance, to: Appearance, duration: Duration, now: Instant) -> Self {
        Self {
            from,
            to,
            started: now,
            duration,
        }
    }

    /// Linear progress in `[0, 1]`
    pub fn progress(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }

    /// Appearance at `now`, eased in and out
    pub fn sample(&self, now: Instant) -> Appearance {
        Appearance::lerp(self.from, self.to, ease_in_out(self.progress(now)))
    }

    pub fn is_finished(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started) >= self.duration
    }

    pub fn target(&self) -> Appearance {
        self.to
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }
}

// Exact at t = 0 and t = 1
fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a * (1.0 - t) + b * t
}

/// Smoothstep easing
fn ease_in_out(t: f32) -> f32 {
    t * t * (3.0 - 2.0 * t)
}
