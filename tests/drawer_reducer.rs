//! Drawer animation: bounds, interpolation and mid-flight retargeting.

mod common;

use common::ms;
use fieldsales::ui::drawer::{
    lerp, DrawerGeometry, DrawerIntent, DrawerMotion, DrawerReducer, DrawerState, DrawerTarget,
    Easing, OPEN_BACKGROUND_OPACITY, OPEN_BACKGROUND_SCALE,
};
use fieldsales::ui::mvi::Reducer;
use std::time::Instant;

fn toggle(state: DrawerState, now: Instant) -> DrawerState {
    DrawerReducer::reduce(state, DrawerIntent::Toggle { now })
}

fn tick(state: DrawerState, now: Instant) -> DrawerState {
    DrawerReducer::reduce(state, DrawerIntent::Tick { now })
}

#[test]
fn progress_stays_in_unit_range_under_toggle_storms() {
    let start = Instant::now();
    let geometry = DrawerGeometry::from_viewport(120, 0.75);
    let mut state = DrawerState::default();

    // Toggle every 37ms for a while, sampling every 5ms in between.
    for step in 0..40u64 {
        let toggled_at = start + ms(step * 37);
        state = toggle(state, toggled_at);
        for sample in 0..8u64 {
            let now = toggled_at + ms(sample * 5);
            state = tick(state, now);
            let progress = state.progress(now);
            assert!((0.0..=1.0).contains(&progress), "progress {progress} out of range");

            let frame = geometry.frame(progress);
            assert_eq!(frame.offset, lerp(-geometry.width(), 0.0, progress));
            assert_eq!(frame.opacity, lerp(1.0, OPEN_BACKGROUND_OPACITY, progress));
            assert_eq!(frame.scale, lerp(1.0, OPEN_BACKGROUND_SCALE, progress));
            assert_eq!(frame.dismiss_surface, progress > 0.0);
        }
    }
}

#[test]
fn toggle_mid_flight_reverses_from_current_value() {
    let motion = DrawerMotion {
        duration: ms(300),
        easing: Easing::Linear,
    };
    let start = Instant::now();
    let state = toggle(DrawerState::new(motion), start);

    let midway = start + ms(150);
    let before = state.progress(midway);
    assert!((before - 0.5).abs() < 0.01);

    let state = toggle(state, midway);
    assert_eq!(state.target(), DrawerTarget::Closed);
    // No jump: the closing transition starts where the opening one was.
    assert!((state.progress(midway) - before).abs() < 1e-6);

    // Moving towards 0, never back towards 1.
    let later = state.progress(midway + ms(60));
    assert!(later < before);

    // Full duration from the retarget instant.
    let state = tick(state, midway + ms(299));
    assert!(state.is_animating());
    let state = tick(state, midway + ms(300));
    assert!(!state.is_animating());
    assert_eq!(state.progress(midway + ms(300)), 0.0);
}

#[test]
fn close_while_opening_heads_to_zero() {
    let start = Instant::now();
    let state = toggle(DrawerState::default(), start);
    let state = DrawerReducer::reduce(state, DrawerIntent::Close { now: start + ms(100) });
    assert_eq!(state.target(), DrawerTarget::Closed);
    assert!(state.progress(start + ms(100)) > 0.0);
    assert_eq!(state.progress(start + ms(400)), 0.0);
}
