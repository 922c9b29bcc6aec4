//! Two-pose CSS animations.
//!
//! Every animated element on the page sits in one of two [`Pose`]s (its
//! hidden pose and its shown pose) and the browser interpolates between them
//! with a CSS `transition`.

use std::fmt::Write;

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Pose {
    pub opacity: f64,
    pub translate_x: f64,
    pub translate_y: f64,
    pub scale: f64,
    pub rotate: f64,
}

impl Default for Pose {
    fn default() -> Self {
        Pose::REST
    }
}

impl Pose {
    /// Fully visible, untransformed.
    pub const REST: Pose = Pose {
        opacity: 1.0,
        translate_x: 0.0,
        translate_y: 0.0,
        scale: 1.0,
        rotate: 0.0,
    };

    pub const HIDDEN: Pose = Pose { opacity: 0.0, ..Pose::REST };

    /// Transparent and pushed down by `px`; the usual entrance start.
    pub const fn rise(px: f64) -> Pose {
        Pose { opacity: 0.0, translate_y: px, ..Pose::REST }
    }

    /// Transparent and pushed sideways by `px`.
    pub const fn slide(px: f64) -> Pose {
        Pose { opacity: 0.0, translate_x: px, ..Pose::REST }
    }

    pub const fn scaled(scale: f64) -> Pose {
        Pose { scale, ..Pose::REST }
    }

    pub const fn with_opacity(self, opacity: f64) -> Pose {
        Pose { opacity, ..self }
    }

    pub const fn with_rotate(self, rotate: f64) -> Pose {
        Pose { rotate, ..self }
    }

    pub const fn with_scale(self, scale: f64) -> Pose {
        Pose { scale, ..self }
    }

    /// Picks the shown pose when `shown`, otherwise `self`.
    pub fn toward(self, shown: Pose, active: bool) -> Pose {
        if active {
            shown
        } else {
            self
        }
    }

    pub fn css(&self) -> String {
        format!(
            "opacity: {}; transform: translate({}px, {}px) scale({}) rotate({}deg);",
            self.opacity, self.translate_x, self.translate_y, self.scale, self.rotate
        )
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Easing {
    Linear,
    #[default]
    EaseOut,
    EaseInOut,
}

impl Easing {
    pub fn css(self) -> &'static str {
        match self {
            Easing::Linear => "linear",
            Easing::EaseOut => "ease-out",
            Easing::EaseInOut => "ease-in-out",
        }
    }
}

/// Duration and delay are in seconds.
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct Transition {
    pub duration: f64,
    pub delay: f64,
    pub easing: Easing,
}

impl Transition {
    pub const fn new(duration: f64) -> Self {
        Transition {
            duration,
            delay: 0.0,
            easing: Easing::EaseOut,
        }
    }

    pub const fn delay(self, delay: f64) -> Self {
        Transition { delay, ..self }
    }

    pub const fn easing(self, easing: Easing) -> Self {
        Transition { easing, ..self }
    }

    /// Staggered copy: the delay grows by `step` seconds per `index`.
    pub fn stagger(self, index: usize, step: f64) -> Self {
        self.delay(self.delay + index as f64 * step)
    }

    pub fn css(&self) -> String {
        let mut out = String::from("transition: ");
        for (i, property) in ["opacity", "transform"].iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            let _ = write!(
                out,
                "{} {}s {} {}s",
                property,
                self.duration,
                self.easing.css(),
                self.delay
            );
        }
        out.push(';');
        out
    }
}

/// Inline style for an element animating from `hidden` to `shown`.
pub fn style(hidden: Pose, shown: Pose, active: bool, transition: Transition) -> String {
    format!("{} {}", hidden.toward(shown, active).css(), transition.css())
}
