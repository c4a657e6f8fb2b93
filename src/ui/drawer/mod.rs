//! Drawer animation controller.
//!
//! One progress value in [0, 1] drives the side drawer. It only changes
//! through timed transitions, and everything visual (offset, background
//! opacity and scale, the dismiss surface) is derived from it per frame.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Closed / Open / Animating(tween)
//! - `intent.rs` - Toggle, Close, Tick, Reset (all stamped with an instant)
//! - `reducer.rs` - State transitions (pure, no side effects)
//! - `easing.rs`, `tween.rs` - Interpolation primitives
//! - `geometry.rs` - Derived transforms

mod easing;
mod geometry;
mod intent;
mod reducer;
mod state;
mod tween;

pub use easing::Easing;
pub use geometry::{lerp, DrawerFrame, DrawerGeometry, OPEN_BACKGROUND_OPACITY, OPEN_BACKGROUND_SCALE};
pub use intent::DrawerIntent;
pub use reducer::DrawerReducer;
pub use state::{DrawerMotion, DrawerPhase, DrawerState, DrawerTarget};
pub use tween::Tween;
