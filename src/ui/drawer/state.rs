//! State for the drawer animation controller.

use std::time::{Duration, Instant};

use crate::ui::mvi::UiState;

use super::easing::Easing;
use super::tween::Tween;

/// Duration and curve of one open/close transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawerMotion {
    pub duration: Duration,
    pub easing: Easing,
}

impl Default for DrawerMotion {
    fn default() -> Self {
        Self {
            duration: Duration::from_millis(300),
            easing: Easing::default(),
        }
    }
}

/// Logical endpoint the drawer is resting at or heading towards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawerTarget {
    Closed,
    Open,
}

impl DrawerTarget {
    pub fn progress(self) -> f32 {
        match self {
            DrawerTarget::Closed => 0.0,
            DrawerTarget::Open => 1.0,
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            DrawerTarget::Closed => DrawerTarget::Open,
            DrawerTarget::Open => DrawerTarget::Closed,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DrawerPhase {
    #[default]
    Closed,
    Open,
    /// Transition in flight; the tween's `to` is the target endpoint.
    Animating(Tween),
}

/// Drawer state: one progress value in [0, 1] driven only by transitions.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DrawerState {
    pub motion: DrawerMotion,
    pub phase: DrawerPhase,
}

impl UiState for DrawerState {}

impl DrawerState {
    /// Closed drawer using `motion` for every transition.
    pub fn new(motion: DrawerMotion) -> Self {
        Self {
            motion,
            phase: DrawerPhase::Closed,
        }
    }

    /// Progress at `now`: the settled endpoint or the active tween's sample.
    pub fn progress(&self, now: Instant) -> f32 {
        match self.phase {
            DrawerPhase::Closed => 0.0,
            DrawerPhase::Open => 1.0,
            DrawerPhase::Animating(tween) => tween.sample(now),
        }
    }

    /// Endpoint the drawer rests at or is moving towards.
    pub fn target(&self) -> DrawerTarget {
        match self.phase {
            DrawerPhase::Closed => DrawerTarget::Closed,
            DrawerPhase::Open => DrawerTarget::Open,
            DrawerPhase::Animating(tween) => {
                if tween.to >= 0.5 {
                    DrawerTarget::Open
                } else {
                    DrawerTarget::Closed
                }
            }
        }
    }

    pub fn is_animating(&self) -> bool {
        matches!(self.phase, DrawerPhase::Animating(_))
    }

    /// True while any part of the drawer is on screen.
    pub fn is_visible(&self, now: Instant) -> bool {
        self.progress(now) > 0.0
    }
}
