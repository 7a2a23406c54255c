use animate_animation::{AnimationType, Easing, KeyframesSpec, SpringSpec, TargetBasedAnimation};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_easing(c: &mut Criterion) {
    c.bench_function("fast_out_slow_in_transform", |b| {
        b.iter(|| {
            let mut acc = 0.0;
            for step in 0..=100 {
                acc += Easing::FastOutSlowInEasing.transform(black_box(step as f32 / 100.0));
            }
            acc
        })
    });
}

fn bench_keyframes(c: &mut Criterion) {
    let spec = KeyframesSpec::new(1000)
        .keyframe(100.0_f32, 10, Easing::LinearEasing)
        .keyframe(110.0, 500, Easing::FastOutSlowInEasing)
        .keyframe(200.0, 700, Easing::LinearOutSlowInEasing);
    let animation = TargetBasedAnimation::new(AnimationType::Keyframes(spec), 0.0, 330.0);
    c.bench_function("keyframes_value_at", |b| {
        b.iter(|| {
            let mut acc = 0.0;
            for ms in (0..1000).step_by(16) {
                acc += animation.value_at(black_box(ms * 1_000_000));
            }
            acc
        })
    });
}

fn bench_spring_settle(c: &mut Criterion) {
    c.bench_function("spring_settle_time", |b| {
        b.iter(|| {
            TargetBasedAnimation::new(
                AnimationType::Spring(SpringSpec::new(0.2, 50.0)),
                black_box(0.0_f32),
                black_box(330.0),
            )
            .duration_nanos()
        })
    });
}

criterion_group!(benches, bench_easing, bench_keyframes, bench_spring_settle);
criterion_main!(benches);
