use super::*;
use crate::target_based::spring_motion;
use animate_testing::FrameDriver;
use animate_ui_graphics::{Color, Dp};

const MS: u64 = 1_000_000;

fn approx(a: f32, b: f32, tolerance: f32) -> bool {
    (a - b).abs() <= tolerance
}

#[test]
fn easing_linear_is_identity() {
    assert_eq!(Easing::LinearEasing.transform(0.0), 0.0);
    assert_eq!(Easing::LinearEasing.transform(0.5), 0.5);
    assert_eq!(Easing::LinearEasing.transform(1.0), 1.0);
}

#[test]
fn easing_endpoints_are_exact() {
    let easings = [
        Easing::LinearEasing,
        Easing::EaseIn,
        Easing::EaseOut,
        Easing::EaseInOut,
        Easing::FastOutSlowInEasing,
        Easing::LinearOutSlowInEasing,
        Easing::FastOutLinearInEasing,
        Easing::cubic_bezier(0.1, 0.7, 0.1, 1.0),
    ];

    for easing in easings {
        assert_eq!(easing.transform(0.0), 0.0, "start of {:?}", easing);
        assert_eq!(easing.transform(1.0), 1.0, "end of {:?}", easing);
        assert_eq!(easing.transform(-3.0), 0.0, "clamped start of {:?}", easing);
        assert_eq!(easing.transform(7.0), 1.0, "clamped end of {:?}", easing);
    }
}

#[test]
fn easing_curves_are_monotonic() {
    for easing in [
        Easing::FastOutSlowInEasing,
        Easing::LinearOutSlowInEasing,
        Easing::EaseInOut,
    ] {
        let mut previous = 0.0;
        for step in 1..=100 {
            let value = easing.transform(step as f32 / 100.0);
            assert!(value + 1e-4 >= previous, "{:?} dipped at step {}", easing, step);
            previous = value;
        }
    }
}

#[test]
fn fast_out_slow_in_leads_linear_in_the_middle() {
    // x(t) == 0.5 is reached with y well above 0.5 for this curve.
    let value = Easing::FastOutSlowInEasing.transform(0.5);
    assert!(value > 0.7 && value < 0.85, "got {value}");
}

#[test]
fn custom_easing_is_pluggable() {
    fn square(t: f32) -> f32 {
        t * t
    }
    assert_eq!(Easing::Custom(square).transform(0.5), 0.25);
}

#[test]
fn easing_equality_compares_curves() {
    fn square(t: f32) -> f32 {
        t * t
    }
    let custom = Easing::Custom(square);
    assert_eq!(custom, custom);
    assert_ne!(custom, Easing::LinearEasing);
    assert_eq!(
        Easing::cubic_bezier(0.4, 0.0, 0.2, 1.0),
        Easing::CubicBezier { x1: 0.4, y1: 0.0, x2: 0.2, y2: 1.0 }
    );
    assert_ne!(Easing::cubic_bezier(0.4, 0.0, 0.2, 1.0), Easing::FastOutSlowInEasing);
    assert_eq!(tween::<f32>(300), tween::<f32>(300));
}

#[test]
fn animation_spec_default_has_reasonable_values() {
    let spec = AnimationSpec::default();
    assert_eq!(spec.duration_millis, 300);
    assert_eq!(spec.easing, Easing::FastOutSlowInEasing);
    assert_eq!(spec.delay_millis, 0);
}

#[test]
fn spring_presets_match_their_names() {
    assert_eq!(SpringSpec::default().damping_ratio, 1.0);
    assert!(SpringSpec::bouncy().damping_ratio < 1.0);
    assert!(SpringSpec::stiff().stiffness > SpringSpec::default().stiffness);
}

#[test]
fn color_lerp_hits_endpoints_exactly() {
    assert_eq!(Color::YELLOW.lerp(&Color::MAGENTA, 0.0), Color::YELLOW);
    assert_eq!(Color::YELLOW.lerp(&Color::MAGENTA, 1.0), Color::MAGENTA);
    assert_eq!(Color::YELLOW.lerp(&Color::MAGENTA, 1.5), Color::MAGENTA);
}

#[test]
fn color_lerp_midpoint_stays_between_endpoints() {
    let mid = Color::YELLOW.lerp(&Color::MAGENTA, 0.5);
    assert!(mid.r() > 0.9, "red stays saturated: {:?}", mid);
    assert!(mid.g() > 0.1 && mid.g() < 0.95, "green in between: {:?}", mid);
    assert!(mid.b() > 0.1 && mid.b() < 0.95, "blue in between: {:?}", mid);
    assert!(approx(mid.a(), 1.0, 1e-4));
}

#[test]
fn tween_respects_delay_and_lands_on_target() {
    let animation = TargetBasedAnimation::new(
        AnimationType::Tween(AnimationSpec::linear(100).with_delay(50)),
        0.0_f32,
        10.0,
    );
    assert_eq!(animation.duration_nanos(), 150 * MS);
    assert_eq!(animation.value_at(20 * MS), 0.0);
    assert!(approx(animation.value_at(100 * MS), 5.0, 1e-4));
    assert_eq!(animation.value_at(150 * MS), 10.0);
    assert!(animation.is_finished_at(150 * MS));
}

fn motion_keyframes() -> KeyframesSpec<Dp> {
    KeyframesSpec::new(1000)
        .keyframe(Dp(100.0), 10, Easing::LinearEasing)
        .keyframe(Dp(110.0), 500, Easing::FastOutSlowInEasing)
        .keyframe(Dp(200.0), 700, Easing::LinearOutSlowInEasing)
}

#[test]
fn keyframes_pass_through_every_checkpoint() {
    let animation =
        TargetBasedAnimation::new(AnimationType::Keyframes(motion_keyframes()), Dp(0.0), Dp(330.0));
    assert_eq!(animation.value_at(0), Dp(0.0));
    assert!(approx(animation.value_at(5 * MS).0, 50.0, 1e-3));
    assert!(approx(animation.value_at(10 * MS).0, 100.0, 1e-3));
    assert!(approx(animation.value_at(500 * MS).0, 110.0, 1e-3));
    assert!(approx(animation.value_at(700 * MS).0, 200.0, 1e-3));
    assert!(approx(animation.value_at(850 * MS).0, 265.0, 1e-3));
    assert_eq!(animation.value_at(1000 * MS), Dp(330.0));
}

#[test]
fn keyframe_easing_shapes_the_segment_leading_into_it() {
    let animation =
        TargetBasedAnimation::new(AnimationType::Keyframes(motion_keyframes()), Dp(0.0), Dp(330.0));
    // Halfway through 500..700 with LinearOutSlowIn sits past the linear midpoint (155).
    let eased = animation.value_at(600 * MS).0;
    let expected = 110.0 + 90.0 * Easing::LinearOutSlowInEasing.transform(0.5);
    assert!(approx(eased, expected, 1e-3), "got {eased}, expected {expected}");
    assert!(eased > 155.0);
}

#[test]
fn keyframes_apply_in_time_order_regardless_of_declaration() {
    let shuffled = KeyframesSpec::new(1000)
        .keyframe(Dp(200.0), 700, Easing::LinearOutSlowInEasing)
        .keyframe(Dp(100.0), 10, Easing::LinearEasing)
        .keyframe(Dp(110.0), 500, Easing::FastOutSlowInEasing);
    assert_eq!(shuffled, motion_keyframes());
    let times: Vec<u64> = shuffled.keyframes().iter().map(|k| k.time_millis).collect();
    assert_eq!(times, vec![10, 500, 700]);
}

#[test]
fn keyframe_at_same_time_replaces_and_fraction_helper_rounds() {
    let spec = KeyframesSpec::new(1000)
        .at(1.0_f32, 500)
        .at_fraction(2.0, 0.5, Easing::EaseIn)
        .at(3.0, 5000);
    let keyframes = spec.keyframes();
    assert_eq!(keyframes.len(), 2);
    assert_eq!(keyframes[0].value, 2.0);
    assert_eq!(keyframes[0].easing, Easing::EaseIn);
    assert_eq!(keyframes[1].time_millis, 1000);
}

#[test]
fn spring_starts_at_rest_and_settles_on_target() {
    for spec in [
        SpringSpec::new(DAMPING_RATIO_HIGH_BOUNCY, STIFFNESS_VERY_LOW),
        SpringSpec::default(),
        SpringSpec::new(2.0, STIFFNESS_LOW),
    ] {
        let (x0, v0) = spring_motion(&spec, 0);
        assert!(approx(x0, -1.0, 1e-5), "{:?} starts one unit away", spec);
        assert!(approx(v0, 0.0, 1e-5), "{:?} starts at rest", spec);

        let animation = TargetBasedAnimation::new(AnimationType::Spring(spec), 0.0_f32, 100.0);
        let duration = animation.duration_nanos();
        assert!(duration > 0 && duration < 60_000 * MS, "{:?} settles", spec);
        assert_eq!(animation.value_at(duration), 100.0);
    }
}

#[test]
fn bouncy_spring_overshoots() {
    let animation = TargetBasedAnimation::new(
        AnimationType::Spring(SpringSpec::new(DAMPING_RATIO_HIGH_BOUNCY, STIFFNESS_VERY_LOW)),
        0.0_f32,
        100.0,
    );
    let peak = (0..animation.duration_nanos() / MS)
        .map(|ms| animation.value_at(ms * MS))
        .fold(f32::MIN, f32::max);
    assert!(peak > 100.0, "peak {peak}");
}

#[test]
fn animatable_reaches_target_at_end_of_window() {
    let mut driver = FrameDriver::new();
    let animatable = Animatable::new(0.0_f32, driver.handle());
    animatable.animate_to(360.0, AnimationType::Tween(AnimationSpec::linear(2500)));
    assert!(animatable.is_running());

    driver.frame();
    assert_eq!(animatable.value(), 0.0);
    driver.advance_by_millis(1250);
    assert!(approx(animatable.value(), 180.0, 1e-3));
    driver.advance_by_millis(1250);
    assert_eq!(animatable.value(), 360.0);
    assert_eq!(animatable.state().value(), 360.0);
    assert!(!animatable.is_running());
    assert!(!driver.has_pending_frames());
}

#[test]
fn animatable_retargets_from_current_value() {
    let mut driver = FrameDriver::new();
    let animatable = Animatable::new(0.0_f32, driver.handle());
    animatable.animate_to(100.0, AnimationType::Tween(AnimationSpec::linear(1000)));
    driver.frame();
    driver.advance_by_millis(400);
    let mid = animatable.value();
    assert!(approx(mid, 40.0, 1e-3));

    animatable.animate_to(0.0, AnimationType::Tween(AnimationSpec::linear(1000)));
    driver.frame();
    assert!(approx(animatable.value(), mid, 1e-3), "no jump on retarget");
    driver.advance_by_millis(500);
    assert!(approx(animatable.value(), 20.0, 1e-3));
    driver.advance_by_millis(500);
    assert_eq!(animatable.value(), 0.0);
}

#[test]
fn snap_to_cancels_running_animation() {
    let mut driver = FrameDriver::new();
    let animatable = Animatable::new(Dp(0.0), driver.handle());
    animatable.animate_to(Dp(50.0), AnimationType::Tween(AnimationSpec::linear(100)));
    driver.frame();
    animatable.snap_to(Dp(10.0));
    assert!(!animatable.is_running());
    driver.run_until_idle(10);
    assert_eq!(animatable.value(), Dp(10.0));
    assert_eq!(animatable.state().value(), Dp(10.0));
}

#[test]
fn animated_value_state_ignores_repeated_targets() {
    let driver = FrameDriver::new();
    let animated = animate_float_as_state(0.0, tween(300), "alpha", driver.handle());
    assert!(!animated.update(0.0));
    assert!(animated.update(1.0));
    assert!(!animated.update(1.0));
    assert!(animated.is_running());
    assert_eq!(animated.target(), 1.0);
}

#[test]
fn transition_children_finish_on_the_same_frame() {
    let mut driver = FrameDriver::new();
    let transition = Transition::new(false, "box", driver.handle());
    let color = transition.animate_color(
        "color",
        |_| tween(4000),
        |end| if *end { Color::MAGENTA } else { Color::YELLOW },
    );
    let offset = transition.animate_dp(
        "offset",
        |_| tween(4000),
        |end| if *end { Dp(330.0) } else { Dp(0.0) },
    );
    assert_eq!(color.value(), Color::YELLOW);
    assert_eq!(
        transition.child_labels(),
        vec!["box/color".to_string(), "box/offset".to_string()]
    );

    transition.update_target(true);
    assert!(transition.is_running());
    assert_eq!(transition.total_duration_nanos(), 4000 * MS);
    driver.frame();

    let mut frames = 0;
    while transition.is_running() {
        assert!(offset.value() < Dp(330.0), "offset settled early");
        assert_ne!(color.value(), Color::MAGENTA, "color settled early");
        driver.advance_frame();
        frames += 1;
        assert!(frames <= 300, "transition never settled");
    }
    // 4000ms at the default 16ms frame interval.
    assert_eq!(frames, 250);
    assert_eq!(color.value(), Color::MAGENTA);
    assert_eq!(offset.value(), Dp(330.0));
    assert!(!transition.is_running());
    assert!(transition.current_state());
}

#[test]
fn transition_retarget_mid_flight_starts_from_current_values() {
    let mut driver = FrameDriver::new();
    let transition = Transition::new(0_u8, "slider", driver.handle());
    let position = transition.animate_float(
        "position",
        |_| AnimationType::Tween(AnimationSpec::linear(1000)),
        |state| *state as f32 * 100.0,
    );
    transition.update_target(1);
    driver.frame();
    driver.advance_by_millis(300);
    let before = position.value();
    assert!(approx(before, 30.0, 1e-3));

    transition.update_target(0);
    driver.frame();
    assert!(approx(position.value(), before, 1e-3));
    assert_eq!(transition.target_state(), 0);
    driver.advance_by_millis(1000);
    assert_eq!(position.value(), 0.0);
    assert_eq!(transition.current_state(), 0);
}

#[test]
fn refresh_targets_snaps_settled_children() {
    use std::cell::Cell;
    use std::rc::Rc;

    let driver = FrameDriver::new();
    let width = Rc::new(Cell::new(400.0_f32));
    let transition = Transition::new(true, "resize", driver.handle());
    let offset = transition.animate_float("offset", |_| tween(4000), {
        let width = Rc::clone(&width);
        move |end: &bool| if *end { width.get() - 70.0 } else { 0.0 }
    });
    assert_eq!(offset.value(), 330.0);

    width.set(800.0);
    transition.refresh_targets();
    assert_eq!(offset.value(), 730.0);
    assert!(!transition.is_running());
}
