use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use transform_pipeline::config::{ObjectConfig, SceneConfig};
use transform_pipeline::core::{Button, CameraInputAdapter, InputState};
use transform_pipeline::math::{degrees_to_radians, slerp, Mat4, Quat, Vec3};
use transform_pipeline::scene::Scene;
use transform_pipeline::Camera;

/// Deterministic spread of positions so runs are comparable
fn scatter(seed: u32) -> Vec3 {
    let s = seed as f32;
    Vec3::new(
        (s * 0.618_034).fract() * 40.0 - 20.0,
        (s * 0.414_214).fract() * 20.0 - 10.0,
        -(s * 0.732_051).fract() * 60.0 - 2.0,
    )
}

/// Benchmark: 4x4 multiply, ours next to glam
fn bench_mat4_multiply(c: &mut Criterion) {
    let a = Mat4::create_rotation_xyz(Vec3::new(0.3, 1.1, -0.4));
    let b = Mat4::create_translation(Vec3::new(1.0, 2.0, 3.0)) * Mat4::create_scale(Vec3::new(2.0, 2.0, 2.0));
    let (ga, gb) = (glam::Mat4::from(a), glam::Mat4::from(b));

    let mut group = c.benchmark_group("mat4_multiply");
    group.bench_function("ours", |bench| bench.iter(|| black_box(black_box(a) * black_box(b))));
    group.bench_function("glam", |bench| bench.iter(|| black_box(black_box(ga) * black_box(gb))));
    group.finish();
}

fn bench_look_at(c: &mut Criterion) {
    let eye = Vec3::new(3.0, 4.0, -6.0);
    let target = Vec3::new(-1.0, 0.5, 2.0);

    c.bench_function("look_at", |b| {
        b.iter(|| black_box(Mat4::look_at(black_box(eye), black_box(target), Vec3::Y)))
    });
}

fn bench_perspective(c: &mut Criterion) {
    let fov = degrees_to_radians(45.0);
    c.bench_function("perspective", |b| {
        b.iter(|| black_box(Mat4::create_perspective(black_box(fov), 16.0 / 9.0, 0.1, 100.0)))
    });
}

/// Benchmark: slerp on the full path and on the near-parallel lerp fallback
fn bench_slerp(c: &mut Criterion) {
    let a = Quat::from_axis_angle(Vec3::Y, 0.2);
    let far = Quat::from_axis_angle(Vec3::new(1.0, 1.0, 0.0).normalized(), 2.0);
    let near = Quat::from_axis_angle(Vec3::Y, 0.21);

    let mut group = c.benchmark_group("slerp");
    group.bench_function("wide", |b| b.iter(|| black_box(slerp(black_box(a), black_box(far), 0.37))));
    group.bench_function("near_parallel", |b| b.iter(|| black_box(slerp(black_box(a), black_box(near), 0.37))));
    group.finish();
}

/// Benchmark: one frame of camera input (move, look, view matrix)
fn bench_camera_frame(c: &mut Criterion) {
    let mut camera = Camera::at(Vec3::new(0.0, 0.0, 5.0));
    let mut adapter = CameraInputAdapter::new();
    let mut input = InputState::new();
    input.press(Button::KeyW);
    let mut x = 0.0f32;

    c.bench_function("camera_frame", |b| {
        b.iter(|| {
            x += 1.0;
            input.cursor_moved(x % 800.0, 300.0);
            adapter.apply(&mut camera, &input, 1.0 / 60.0);
            black_box(camera.view_matrix())
        })
    });
}

/// Benchmark: per-frame uniforms for growing object counts
fn bench_frame_uniforms(c: &mut Criterion) {
    let mut group = c.benchmark_group("frame_uniforms");

    for count in [10u32, 100, 1000].iter() {
        let config = SceneConfig {
            objects: (0..*count)
                .map(|i| ObjectConfig {
                    name: format!("object_{}", i),
                    position: scatter(i),
                    rotation: Vec3::new(i as f32, i as f32 * 0.3, i as f32 * 0.5),
                    spin: Vec3::new(0.0, 30.0, 0.0),
                    ..ObjectConfig::default()
                })
                .collect(),
            ..SceneConfig::default()
        };
        let mut scene = Scene::from_config(&config);

        group.bench_with_input(BenchmarkId::new("objects", count), count, |b, _| {
            b.iter(|| {
                scene.update(1.0 / 60.0);
                black_box(scene.frame_uniforms())
            })
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_mat4_multiply,
    bench_look_at,
    bench_perspective,
    bench_slerp,
    bench_camera_frame,
    bench_frame_uniforms,
);

criterion_main!(benches);
