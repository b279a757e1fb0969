// Bench-local relaxations: setup code unwraps, criterion builders
// return references we don't chain.
#![allow(clippy::unwrap_used)]
#![allow(unused_results)]

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use orrery::animation::OrbitAnimator;
use orrery::scene::{
    Appearance, MoonSpec, PlanetSpec, Scene, StarSpec, SystemSpec,
};

/// Build a synthetic system with roughly `bodies` bodies: planets in a
/// ring, every third planet carrying two moons.
fn synthetic_spec(bodies: usize) -> SystemSpec {
    let mut spec = SystemSpec {
        star: StarSpec::default(),
        planets: Vec::new(),
    };
    let mut count = 1;
    let mut i = 0;
    while count < bodies {
        let mut planet = PlanetSpec {
            name: format!("planet-{i}"),
            radius: 1.0,
            orbit_distance: 10.0 + i as f32,
            angular_speed: 0.004 + i as f32 * 1e-4,
            appearance: Appearance::default(),
            moons: vec![],
        };
        count += 1;
        if i % 3 == 0 {
            for m in 0..2 {
                planet.moons.push(MoonSpec {
                    name: format!("moon-{i}-{m}"),
                    radius: 0.2,
                    orbit_distance: 2.0 + m as f32,
                    angular_speed: 0.02,
                    appearance: Appearance::default(),
                });
                count += 1;
            }
        }
        spec.planets.push(planet);
        i += 1;
    }
    spec
}

fn advance_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("orbit_advance");

    for count in [10, 50, 100, 500].iter() {
        let spec = synthetic_spec(*count);
        let mut scene = Scene::from_spec(&spec).unwrap();
        let mut animator = OrbitAnimator::new();

        group.bench_function(format!("{}_bodies", count), |b| {
            b.iter(|| {
                animator.advance(black_box(&mut scene));
            })
        });
    }
    group.finish();
}

fn build_benchmark(c: &mut Criterion) {
    let spec = SystemSpec::solar_system();
    c.bench_function("scene_from_spec", |b| {
        b.iter(|| black_box(Scene::from_spec(black_box(&spec)).unwrap()))
    });
}

criterion_group!(benches, advance_benchmark, build_benchmark);
criterion_main!(benches);
