//! Reducer for the drawer animation controller.

use std::time::Instant;

use crate::ui::mvi::Reducer;

use super::intent::DrawerIntent;
use super::state::{DrawerPhase, DrawerState, DrawerTarget};
use super::tween::Tween;

/// Reducer for drawer state transitions.
pub struct DrawerReducer;

impl Reducer for DrawerReducer {
    type State = DrawerState;
    type Intent = DrawerIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            DrawerIntent::Toggle { now } => retarget(state, state.target().opposite(), now),

            DrawerIntent::Close { now } => {
                if state.target() == DrawerTarget::Closed {
                    state
                } else {
                    retarget(state, DrawerTarget::Closed, now)
                }
            }

            DrawerIntent::Tick { now } => match state.phase {
                DrawerPhase::Animating(tween) if tween.is_finished(now) => DrawerState {
                    phase: settled(if tween.to >= 0.5 {
                        DrawerTarget::Open
                    } else {
                        DrawerTarget::Closed
                    }),
                    ..state
                },
                _ => state,
            },

            DrawerIntent::Reset => DrawerState::new(state.motion),
        }
    }
}

/// Start a transition towards `target` from the value shown at `now`.
fn retarget(state: DrawerState, target: DrawerTarget, now: Instant) -> DrawerState {
    let from = state.progress(now);
    let to = target.progress();
    let phase = if from == to {
        settled(target)
    } else {
        DrawerPhase::Animating(Tween::new(
            from,
            to,
            now,
            state.motion.duration,
            state.motion.easing,
        ))
    };
    DrawerState { phase, ..state }
}

fn settled(target: DrawerTarget) -> DrawerPhase {
    match target {
        DrawerTarget::Closed => DrawerPhase::Closed,
        DrawerTarget::Open => DrawerPhase::Open,
    }
}
