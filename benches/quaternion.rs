use criterion::{Criterion, black_box, criterion_group, criterion_main};
use simd_math::{
    quaternion::{Quaternion, UnitQuaternion},
    vector::Vector4,
};

fn bench_quaternion(c: &mut Criterion) {
    let a = Quaternion::new(0.1, -0.2, 0.3, 0.9);
    let b = Quaternion::new(-0.4, 0.5, 0.6, -0.2);
    c.bench_function("quaternion_mul", |bencher| {
        bencher.iter(|| black_box(&a) * black_box(&b));
    });

    let q0 = UnitQuaternion::from_axis_angle(&Vector4::unit_x(), 0.5);
    let q1 = UnitQuaternion::from_axis_angle(&Vector4::unit_y(), 1.4);
    c.bench_function("quaternion_slerp", |bencher| {
        bencher.iter(|| black_box(&q0).slerp(black_box(&q1), black_box(0.3)));
    });

    let v = Vector4::new(1.5, -0.5, 2.0, 0.0);
    c.bench_function("quaternion_rotate_vector", |bencher| {
        bencher.iter(|| black_box(&q0).rotate_vector(black_box(&v)));
    });
}

criterion_group!(benches, bench_quaternion);
criterion_main!(benches);
