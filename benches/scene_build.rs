use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use scene_viewer::scene::{Animator, GeometryKind, MaterialPalette, Scene};
use scene_viewer::types::InstanceUniform;
use scene_viewer::{SceneDescription, ViewerConfig, ViewportSize};

const TYPES: [&str; 5] = ["box", "sphere", "cylinder", "pyramid", "torus"];
const MATERIALS: [&str; 5] = ["wall", "window", "dome", "tree", "marble"];

/// Generator-shaped description with `n` objects
fn description(n: usize) -> SceneDescription {
    let objects: Vec<String> = (0..n)
        .map(|i| {
            let name = match i % 7 {
                0 => format!("Tree_{}", i),
                1 => format!("Dome_{}", i),
                _ => format!("Wall_{}", i),
            };
            format!(
                r##"{{"name": "{}", "type": "{}", "material": "{}", "color": "#A0522D",
                     "position": [{}, 0, {}], "scale": [1, 2, 1]}}"##,
                name,
                TYPES[i % TYPES.len()],
                MATERIALS[i % MATERIALS.len()],
                (i % 20) as f32 - 10.0,
                (i / 20) as f32
            )
        })
        .collect();
    let json = format!(r#"{{"objects": [{}]}}"#, objects.join(","));
    SceneDescription::from_json_str(&json).unwrap()
}

fn build(description: &SceneDescription, palette: &MaterialPalette, config: &ViewerConfig) -> Scene {
    Scene::build(description, ViewportSize::new(800, 600), palette, config)
}

/// Benchmark: JSON decode of a description
fn bench_decode(c: &mut Criterion) {
    let json = std::fs::read_to_string(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/assets/scenes/rajasthani_villa.json"
    ))
    .unwrap();

    c.bench_function("decode_villa", |b| {
        b.iter(|| SceneDescription::from_json_str(black_box(&json)).unwrap())
    });
}

/// Benchmark: scene construction at various object counts
fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("scene_build");
    let palette = MaterialPalette::standard();
    let config = ViewerConfig::default();

    for n in [10, 100, 1000] {
        let description = description(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &description, |b, d| {
            b.iter(|| build(black_box(d), &palette, &config))
        });
    }

    group.finish();
}

/// Benchmark: one animation step plus instance upload data
fn bench_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("frame_update");
    let palette = MaterialPalette::standard();
    let config = ViewerConfig::default();
    let animator = Animator::new(config.rotation_step);

    for n in [100, 1000] {
        let mut scene = build(&description(n), &palette, &config);
        let mut time = 0.0f32;
        group.bench_function(BenchmarkId::from_parameter(n), |b| {
            b.iter(|| {
                time += 1.0 / 60.0;
                animator.advance(&mut scene, time);
                black_box(InstanceUniform::for_scene(&scene))
            })
        });
    }

    group.finish();
}

/// Benchmark: primitive mesh generation
fn bench_meshes(c: &mut Criterion) {
    c.bench_function("primitive_meshes", |b| {
        b.iter(|| {
            GeometryKind::ALL
                .into_iter()
                .map(|kind| kind.mesh().triangle_count())
                .sum::<usize>()
        })
    });
}

criterion_group!(benches, bench_decode, bench_build, bench_frame, bench_meshes);
criterion_main!(benches);
